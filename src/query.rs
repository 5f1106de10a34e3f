//! Search request construction for the iTunes Search endpoint.

use thiserror::Error;

use crate::model::CategoryFilter;

/// Base URL of the catalog search service.
pub const SEARCH_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Fixed page size requested from the endpoint.
pub const SEARCH_LIMIT: usize = 200;

/// Building a request URL failed. Only possible when the endpoint constant
/// itself is unparseable, so this is a precondition violation rather than a
/// runtime condition: callers log it and reset, they never show it to the user.
#[derive(Debug, Error)]
#[error("failed to construct search URL: {0}")]
pub struct QueryError(String);

/// Build the fully-escaped request URL for a search.
///
/// The query term is percent-encoded as a URL query component, `limit` is
/// fixed at [`SEARCH_LIMIT`], and `entity` carries the category's kind string
/// (empty for [`CategoryFilter::All`]).
pub fn search_url(text: &str, category: CategoryFilter) -> Result<reqwest::Url, QueryError> {
    let mut url = reqwest::Url::parse(SEARCH_ENDPOINT).map_err(|e| QueryError(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("term", text)
        .append_pair("limit", &SEARCH_LIMIT.to_string())
        .append_pair("entity", category.entity());
    Ok(url)
}
