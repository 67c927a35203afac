//! Core data models.

mod paper;
mod search;

pub use paper::PaperRecord;
pub use search::{RequestError, SearchRequest, DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT};
