mod options;

use github_repo_search::{
    client, output, search_repositories, Error, SearchQuery, DEFAULT_TIMEOUT, GITHUB_API_URL,
    REPO_DISPLAY_LIMIT,
};
use log::error;
use options::Args;
use std::io::stdout;
use structopt::StructOpt;

#[tokio::main]
async fn main() {
    let args: Args = Args::from_args();
    simple_logger::init_with_level(args.log_level).ok();

    if let Err(err) = run(args.into()).await {
        error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(params: SearchQuery) -> Result<(), Error> {
    let client = client(DEFAULT_TIMEOUT)?;
    let result = search_repositories(&client, GITHUB_API_URL, &params).await?;
    output(&result, REPO_DISPLAY_LIMIT, stdout())
}
