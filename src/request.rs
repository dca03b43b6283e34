use crate::api::SearchQuery;
use std::convert::TryFrom;
use std::time::Duration;
use surf::Client;
use url::Url;

pub const GITHUB_API_URL: &str = "https://api.github.com/search/repositories";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// GitHub rejects requests missing either of these with a client error.
const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("github-repo-search/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The endpoint and parameters did not assemble into a request.
    #[error("could not prepare the search request: {reason}")]
    RequestConstruction { reason: String },
    /// DNS, connect, TLS or timeout trouble before a response arrived.
    #[error("request to {url} failed: {cause}")]
    Transport { url: String, cause: surf::Error },
    #[error("GitHub returned status {status} {reason}")]
    UnexpectedStatus { status: u16, reason: &'static str },
    /// The status was fine, but the body could not be read in full.
    #[error("could not read the response body from {url}: {cause}")]
    BodyRead { url: String, cause: surf::Error },
    #[error("could not decode the search response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not write results: {0}")]
    Output(#[from] std::io::Error),
}

pub fn client(timeout: Duration) -> Result<Client, Error> {
    let config = surf::Config::new().set_timeout(Some(timeout));
    let client = Client::try_from(config).map_err(|err| Error::RequestConstruction {
        reason: err.to_string(),
    })?;
    Ok(client)
}

pub fn search_url(endpoint: &str, params: &SearchQuery) -> Result<Url, Error> {
    Url::parse_with_params(
        endpoint,
        &[
            ("q", params.query.as_str()),
            ("sort", params.sort.as_str()),
            ("order", params.order.as_str()),
        ],
    )
    .map_err(|err| Error::RequestConstruction {
        reason: format!("{:?} is not a usable endpoint: {}", endpoint, err),
    })
}

pub(crate) async fn fetch(client: &Client, url: &Url) -> Result<Vec<u8>, Error> {
    let mut res = client
        .get(url.as_str())
        .header("Accept", ACCEPT)
        .header("User-Agent", USER_AGENT)
        .await
        .map_err(|cause| Error::Transport {
            url: url.to_string(),
            cause,
        })?;

    let status = res.status();
    if !status.is_success() {
        // Returning here drops `res`, which releases the connection with the
        // body unread.
        return Err(Error::UnexpectedStatus {
            status: status.into(),
            reason: status.canonical_reason(),
        });
    }

    res.body_bytes().await.map_err(|cause| Error::BodyRead {
        url: url.to_string(),
        cause,
    })
}
