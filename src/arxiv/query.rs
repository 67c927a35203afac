//! Query-string construction for the arXiv API.

use crate::models::SearchRequest;

/// Build the query string for a category search.
///
/// Four fixed parameters: a `cat:` search filter, sort by submission
/// date, descending order, and the bounded result count. The category
/// value is URL-encoded but otherwise passed through untouched; the
/// remote API decides whether it names a real category.
pub fn build_query(request: &SearchRequest) -> String {
    let params = [
        ("search_query", format!("cat:{}", request.category)),
        ("sortBy", "submittedDate".to_string()),
        ("sortOrder", "descending".to_string()),
        ("max_results", request.max_results.to_string()),
    ];

    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
