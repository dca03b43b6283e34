#[macro_use]
#[cfg(test)]
extern crate lazy_static;

mod api;
mod request;

pub use api::{Repo, SearchQuery, SearchResult};
pub use request::{client, search_url, Error, DEFAULT_TIMEOUT, GITHUB_API_URL};

use log::info;
use std::io;
use surf::Client;

/// Hard cap on printed entries, regardless of how many the server returns.
pub const REPO_DISPLAY_LIMIT: usize = 10;

/// Run one search: build the URL, fetch a single page, decode it.
pub async fn search_repositories(
    client: &Client,
    endpoint: &str,
    params: &SearchQuery,
) -> Result<SearchResult, Error> {
    let url = request::search_url(endpoint, params)?;
    info!("querying {}", url);
    let body = request::fetch(client, &url).await?;
    Ok(serde_json::from_slice(&body)?)
}

pub fn output(
    result: &SearchResult,
    repo_limit: usize,
    mut out: impl io::Write,
) -> Result<(), Error> {
    writeln!(out, "Total: {}", result.total_count)?;

    for (index, repo) in result.items.iter().take(repo_limit).enumerate() {
        writeln!(out)?;
        writeln!(out, "#{} {}", index + 1, repo.full_name)?;
        writeln!(
            out,
            "   ★ {}  ⑂ {}",
            repo.stargazers_count, repo.forks_count
        )?;
        writeln!(out, "   {}", repo.html_url)?;
        match repo.description.as_deref() {
            Some(description) if !description.is_empty() => {
                writeln!(out, "   {}", description)?
            }
            _ => writeln!(out)?,
        }
    }
    Ok(())
}
