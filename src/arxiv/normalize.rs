//! Entry normalization: variable author cardinality to a flat record.

use super::feed::{AuthorField, FeedEntry};
use crate::models::PaperRecord;

/// Convert one feed entry into a [`PaperRecord`].
///
/// `title`, `summary` and `link` copy over directly; absent fields are
/// already empty strings at this point. Author handling depends on the
/// shape the feed collapsed to: a list of records is filtered for empty
/// names and joined with ", ", while a lone record's name is used
/// verbatim, unfiltered. A lone empty name and a list of only empty
/// names both come out as "", but through different rules; keep both
/// paths covered when changing this.
pub fn normalize_entry(entry: &FeedEntry) -> PaperRecord {
    let authors = match &entry.author {
        Some(AuthorField::Many(records)) => records
            .iter()
            .filter_map(|record| record.name.as_deref())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Some(AuthorField::One(record)) => record.name.clone().unwrap_or_default(),
        None => String::new(),
    };

    PaperRecord {
        title: entry.title.clone(),
        authors,
        summary: entry.summary.clone(),
        link: entry.id.clone(),
    }
}
