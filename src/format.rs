//! Digest rendering for search results.

use crate::models::PaperRecord;

/// Message returned when a search matches nothing
pub const NO_RESULTS_MESSAGE: &str = "No papers found for the specified category.";

/// Separator between paper blocks in the digest
const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Render a list of papers as a plain-text digest.
///
/// Each paper becomes a four-line block; blocks are joined in input
/// order. An empty list yields [`NO_RESULTS_MESSAGE`].
pub fn format_results(papers: &[PaperRecord]) -> String {
    if papers.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    papers
        .iter()
        .map(|paper| {
            format!(
                "Title: {}\nAuthors: {}\nSummary: {}\nLink: {}",
                paper.title, paper.authors, paper.summary, paper.link
            )
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
