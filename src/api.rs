use serde::Deserialize;

/// One page of matches as returned by the search endpoint. `total_count`
/// reports all matches on the server side and usually exceeds `items.len()`.
#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct SearchResult {
    pub total_count: usize,
    pub items: Vec<Repo>,
}

// Field names follow the wire format; anything else in the payload is ignored.
#[derive(Deserialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: usize,
    pub forks_count: usize,
}

/// What to ask the server for. Values are passed through verbatim; unknown
/// sort keys or order directions are rejected remotely, not here.
pub struct SearchQuery {
    pub query: String,
    pub sort: String,
    pub order: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            query: "language:go".into(),
            sort: "stars".into(),
            order: "desc".into(),
        }
    }
}
