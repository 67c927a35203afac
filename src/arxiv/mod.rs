//! arXiv feed pipeline.
//!
//! Composes the stages of one search invocation: query construction
//! ([`query`]), fetching, feed parsing ([`feed`]) and entry
//! normalization ([`normalize`]). [`ArxivSource::search_digest`] is the
//! error boundary: it always returns a string, whatever happens below.

mod feed;
mod normalize;
mod query;

pub use feed::{parse_feed, AuthorField, AuthorRecord, Feed, FeedEntry};
pub use normalize::normalize_entry;
pub use query::build_query;

use std::sync::Arc;

use crate::config::ArxivConfig;
use crate::format::format_results;
use crate::models::{PaperRecord, RequestError, SearchRequest};
use crate::utils::HttpClient;

/// Base URL for the arXiv query API
pub const ARXIV_API_URL: &str = "https://export.arxiv.org/api/query";

/// User agent sent with every feed request
pub const USER_AGENT: &str = "arxiv-mcp/1.0";

/// Errors that can occur in the feed pipeline
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// No response obtained; carries the underlying transport message
    #[error("{0}")]
    Network(String),

    /// Response obtained with a non-success status
    #[error("arXiv API returned status {0}")]
    Api(u16),

    /// Malformed or structurally unexpected feed document
    #[error("{0}")]
    Parse(String),

    /// Malformed search request, rejected before any fetch
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

/// arXiv research source
///
/// Holds the shared HTTP client and the API base URL, and runs the
/// search pipeline end-to-end.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: Arc<HttpClient>,
    base_url: String,
}

impl ArxivSource {
    /// Create a new source pointing at the public arXiv API
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::new()?),
            base_url: ARXIV_API_URL.to_string(),
        })
    }

    /// Create a source from configuration
    pub fn from_config(config: &ArxivConfig) -> Result<Self, SourceError> {
        Ok(Self {
            client: Arc::new(HttpClient::with_timeout(config.timeout_secs)?),
            base_url: config.api_url.clone(),
        })
    }

    /// Create with a custom HTTP client and base URL (for testing)
    pub fn with_base_url(client: Arc<HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the raw feed text for a request.
    ///
    /// Single attempt, no retries. Success requires both a completed
    /// transport exchange and a 2xx status.
    async fn fetch_feed(&self, request: &SearchRequest) -> Result<String, SourceError> {
        let url = format!("{}?{}", self.base_url, build_query(request));
        tracing::debug!(%url, "fetching arXiv feed");

        let response = self
            .client
            .client()
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/xml")
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))
    }

    /// Run the full pipeline for one request: fetch, parse, normalize.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<PaperRecord>, SourceError> {
        let body = self.fetch_feed(request).await?;
        let feed = parse_feed(&body)?;
        tracing::debug!(
            category = %request.category,
            entries = feed.entries.len(),
            "parsed arXiv feed"
        );
        Ok(feed.entries.iter().map(normalize_entry).collect())
    }

    /// Run the pipeline and render the outcome as text.
    ///
    /// This is the only failure-to-success conversion point: every
    /// pipeline error becomes a readable message, so the caller always
    /// receives a string and never an error.
    pub async fn search_digest(&self, request: &SearchRequest) -> String {
        match self.search(request).await {
            Ok(papers) => format_results(&papers),
            Err(err) => {
                tracing::warn!(category = %request.category, error = %err, "search failed");
                format!("Error during search: {}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message_passthrough() {
        let err = SourceError::Network("Network error".to_string());
        assert_eq!(
            format!("Error during search: {}", err),
            "Error during search: Network error"
        );
    }

    #[test]
    fn test_api_error_carries_status() {
        let err = SourceError::Api(503);
        assert_eq!(err.to_string(), "arXiv API returned status 503");
    }

    #[test]
    fn test_invalid_request_wraps_request_error() {
        let err = SourceError::from(RequestError::MaxResultsOutOfRange(101));
        assert_eq!(
            err.to_string(),
            "invalid request: max_results must be between 1 and 100, got 101"
        );
    }
}
