//! Search request model with bounds validation.

use serde::{Deserialize, Serialize};

/// Result count used when the caller does not specify one
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Upper bound on the requested result count
pub const MAX_RESULTS_LIMIT: u32 = 100;

/// Errors raised while constructing a [`SearchRequest`].
///
/// These are rejected before any network activity takes place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("category must not be empty")]
    EmptyCategory,

    #[error("max_results must be between 1 and 100, got {0}")]
    MaxResultsOutOfRange(u64),
}

/// A validated search request, constructed once per invocation.
///
/// The category is opaque to this crate; whether it names a real arXiv
/// category is decided by the remote API. An unknown category surfaces
/// later as an API failure, not a local error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// arXiv category, e.g. "cs.AI"
    pub category: String,

    /// Number of results to request, within [1, 100]
    pub max_results: u32,
}

impl SearchRequest {
    /// Create a new request, enforcing the `max_results` bounds and default.
    pub fn new(
        category: impl Into<String>,
        max_results: Option<u64>,
    ) -> Result<Self, RequestError> {
        let category = category.into();
        if category.is_empty() {
            return Err(RequestError::EmptyCategory);
        }

        let max_results = match max_results {
            None => DEFAULT_MAX_RESULTS,
            Some(n) if (1..=MAX_RESULTS_LIMIT as u64).contains(&n) => n as u32,
            Some(n) => return Err(RequestError::MaxResultsOutOfRange(n)),
        };

        Ok(Self {
            category,
            max_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_results() {
        let request = SearchRequest::new("cs.AI", None).unwrap();
        assert_eq!(request.max_results, 5);
        assert_eq!(request.category, "cs.AI");
    }

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(SearchRequest::new("cs.AI", Some(1)).unwrap().max_results, 1);
        assert_eq!(
            SearchRequest::new("cs.AI", Some(100)).unwrap().max_results,
            100
        );
    }

    #[test]
    fn test_bounds_rejected() {
        assert_eq!(
            SearchRequest::new("cs.AI", Some(0)),
            Err(RequestError::MaxResultsOutOfRange(0))
        );
        assert_eq!(
            SearchRequest::new("cs.AI", Some(101)),
            Err(RequestError::MaxResultsOutOfRange(101))
        );
    }

    #[test]
    fn test_empty_category_rejected() {
        assert_eq!(
            SearchRequest::new("", Some(5)),
            Err(RequestError::EmptyCategory)
        );
    }
}
