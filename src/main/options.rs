use github_repo_search::SearchQuery;
use log;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Search GitHub repositories and show the most popular matches")]
pub struct Args {
    /// The search expression sent to GitHub, like "language:go"
    #[structopt(short = "q", long = "query", default_value = "language:go")]
    pub query: String,
    /// The repository field GitHub should rank matches by
    #[structopt(short = "s", long = "sort", default_value = "stars")]
    pub sort: String,
    /// The direction the ranking is applied in, "asc" or "desc".
    /// Values are not checked locally; GitHub rejects unknown ones.
    #[structopt(short = "o", long = "order", default_value = "desc")]
    pub order: String,
    /// The desired log level. At INFO the request URL is shown before the call.
    #[structopt(short = "l", long = "log-level", default_value = "ERROR")]
    pub log_level: log::Level,
}

impl From<Args> for SearchQuery {
    fn from(
        Args {
            query, sort, order, ..
        }: Args,
    ) -> Self {
        SearchQuery { query, sort, order }
    }
}
