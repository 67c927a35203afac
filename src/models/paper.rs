//! Normalized paper record produced by the feed pipeline.

use serde::{Deserialize, Serialize};

/// A single arXiv paper in normalized form.
///
/// `authors` is always a flat, comma-and-space-joined string regardless
/// of how many author nodes the feed carried (zero, one, or many).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title
    pub title: String,

    /// Authors, joined with ", "
    pub authors: String,

    /// Abstract text
    pub summary: String,

    /// Paper page URL (the feed entry's id)
    pub link: String,
}
