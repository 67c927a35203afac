//! Atom feed parsing for arXiv query responses.
//!
//! The feed is parsed with a quick-xml pull reader rather than derived
//! deserialization: derived `Vec<Author>` fields erase whether the feed
//! carried one `author` element or several, and downstream author
//! handling depends on exactly that distinction.

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use super::SourceError;

/// Parsed feed document
#[derive(Debug, Default, PartialEq)]
pub struct Feed {
    /// Entries in document order (possibly empty)
    pub entries: Vec<FeedEntry>,
}

/// One raw feed entry, fields as the feed carried them
#[derive(Debug, Default, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    /// Entry id, used as the paper's link
    pub id: String,
    /// Author field, absent when the entry carried no author elements
    pub author: Option<AuthorField>,
}

/// Author field as one record or a sequence.
///
/// Mirrors how tree-shaped markup collapses: a lone repeated element
/// reads as a single node, several read as a list. Both shapes are kept
/// apart because normalization treats them differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorField {
    One(AuthorRecord),
    Many(Vec<AuthorRecord>),
}

/// A single author node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    /// Author name, absent when the node carried no name text
    pub name: Option<String>,
}

/// Text field currently being accumulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Summary,
    Id,
    Name,
}

/// Parse raw feed text into a [`Feed`].
///
/// Fails with [`SourceError::Parse`] when the text is not well-formed
/// XML or the top-level `feed` element is absent. A valid feed with
/// zero entries is a normal outcome, not an error.
pub fn parse_feed(xml: &str) -> Result<Feed, SourceError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut root_seen = false;
    let mut entries = Vec::new();

    // Entry-scoped state
    let mut in_entry = false;
    let mut title = String::new();
    let mut summary = String::new();
    let mut id = String::new();
    let mut authors: Vec<AuthorRecord> = Vec::new();
    let mut in_author = false;
    let mut author_name: Option<String> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.local_name();
                let name = name.as_ref();
                if !root_seen {
                    if name != b"feed" {
                        return Err(SourceError::Parse(
                            "expected top-level feed element".to_string(),
                        ));
                    }
                    root_seen = true;
                } else if name == b"entry" && !in_entry {
                    in_entry = true;
                    title.clear();
                    summary.clear();
                    id.clear();
                    authors.clear();
                    in_author = false;
                    author_name = None;
                    field = None;
                } else if in_entry {
                    match name {
                        b"author" if !in_author => {
                            in_author = true;
                            author_name = None;
                        }
                        b"name" if in_author => field = Some(Field::Name),
                        b"title" if !in_author => field = Some(Field::Title),
                        b"summary" if !in_author => field = Some(Field::Summary),
                        b"id" if !in_author => field = Some(Field::Id),
                        _ => {}
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.local_name();
                let name = name.as_ref();
                if !root_seen {
                    if name != b"feed" {
                        return Err(SourceError::Parse(
                            "expected top-level feed element".to_string(),
                        ));
                    }
                    // Self-closing root: a valid, empty feed
                    root_seen = true;
                } else if in_entry && name == b"author" && !in_author {
                    authors.push(AuthorRecord { name: None });
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(f) = field {
                    let text = e.unescape().unwrap_or_default();
                    match f {
                        Field::Title => title.push_str(&text),
                        Field::Summary => summary.push_str(&text),
                        Field::Id => id.push_str(&text),
                        Field::Name => author_name
                            .get_or_insert_with(String::new)
                            .push_str(&text),
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(f) = field {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    match f {
                        Field::Title => title.push_str(&text),
                        Field::Summary => summary.push_str(&text),
                        Field::Id => id.push_str(&text),
                        Field::Name => author_name
                            .get_or_insert_with(String::new)
                            .push_str(&text),
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"entry" if in_entry => {
                        let mut collected = std::mem::take(&mut authors);
                        let author = if collected.len() == 1 {
                            collected.pop().map(AuthorField::One)
                        } else if collected.is_empty() {
                            None
                        } else {
                            Some(AuthorField::Many(collected))
                        };

                        entries.push(FeedEntry {
                            title: std::mem::take(&mut title).trim().to_string(),
                            summary: std::mem::take(&mut summary).trim().to_string(),
                            id: std::mem::take(&mut id).trim().to_string(),
                            author,
                        });
                        in_entry = false;
                        field = None;
                    }
                    b"author" if in_author => {
                        authors.push(AuthorRecord {
                            name: author_name.take().map(|n| n.trim().to_string()),
                        });
                        in_author = false;
                        field = None;
                    }
                    b"title" | b"summary" | b"id" | b"name" => field = None,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(SourceError::Parse(format!("malformed feed: {}", e)));
            }
        }
        buf.clear();
    }

    if !root_seen {
        return Err(SourceError::Parse(
            "expected top-level feed element".to_string(),
        ));
    }

    Ok(Feed { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
"#;

    fn feed_with(entries: &str) -> String {
        format!("{}{}</feed>", FEED_HEADER, entries)
    }

    #[test]
    fn test_parse_entry_with_multiple_authors() {
        let xml = feed_with(
            r#"<entry>
                <id>https://arxiv.org/abs/test.123</id>
                <title>Test Paper Title</title>
                <summary>This is a test paper summary</summary>
                <author><name>John Doe</name></author>
                <author><name>Jane Smith</name></author>
            </entry>"#,
        );

        let feed = parse_feed(&xml).unwrap();
        assert_eq!(feed.entries.len(), 1);

        let entry = &feed.entries[0];
        assert_eq!(entry.title, "Test Paper Title");
        assert_eq!(entry.summary, "This is a test paper summary");
        assert_eq!(entry.id, "https://arxiv.org/abs/test.123");
        assert_eq!(
            entry.author,
            Some(AuthorField::Many(vec![
                AuthorRecord {
                    name: Some("John Doe".to_string())
                },
                AuthorRecord {
                    name: Some("Jane Smith".to_string())
                },
            ]))
        );
    }

    #[test]
    fn test_parse_entry_with_single_author_collapses_to_one() {
        let xml = feed_with(
            r#"<entry>
                <id>https://arxiv.org/abs/test.456</id>
                <title>Single Author Paper</title>
                <summary>Paper with single author</summary>
                <author><name>Solo Author</name></author>
            </entry>"#,
        );

        let feed = parse_feed(&xml).unwrap();
        assert_eq!(
            feed.entries[0].author,
            Some(AuthorField::One(AuthorRecord {
                name: Some("Solo Author".to_string())
            }))
        );
    }

    #[test]
    fn test_parse_entry_without_authors() {
        let xml = feed_with(
            r#"<entry>
                <id>https://arxiv.org/abs/test.789</id>
                <title>Anonymous Paper</title>
                <summary>No authors listed</summary>
            </entry>"#,
        );

        let feed = parse_feed(&xml).unwrap();
        assert_eq!(feed.entries[0].author, None);
    }

    #[test]
    fn test_parse_entry_missing_fields_degrade_to_empty() {
        let xml = feed_with(r#"<entry><author><name>Only Author</name></author></entry>"#);

        let feed = parse_feed(&xml).unwrap();
        let entry = &feed.entries[0];
        assert_eq!(entry.title, "");
        assert_eq!(entry.summary, "");
        assert_eq!(entry.id, "");
    }

    #[test]
    fn test_parse_empty_author_element() {
        let xml = feed_with(r#"<entry><title>T</title><author></author></entry>"#);

        let feed = parse_feed(&xml).unwrap();
        assert_eq!(
            feed.entries[0].author,
            Some(AuthorField::One(AuthorRecord { name: None }))
        );
    }

    #[test]
    fn test_parse_empty_feed_is_not_an_error() {
        let feed = parse_feed(&feed_with("")).unwrap();
        assert!(feed.entries.is_empty());
    }

    #[test]
    fn test_parse_feed_level_title_is_ignored() {
        let xml = feed_with(
            r#"<entry>
                <title>Entry Title</title>
                <id>x</id>
                <summary>s</summary>
            </entry>"#,
        );

        let feed = parse_feed(&xml).unwrap();
        assert_eq!(feed.entries[0].title, "Entry Title");
    }

    #[test]
    fn test_parse_preserves_entry_order() {
        let xml = feed_with(
            r#"<entry><title>First</title></entry>
               <entry><title>Second</title></entry>
               <entry><title>Third</title></entry>"#,
        );

        let feed = parse_feed(&xml).unwrap();
        let titles: Vec<&str> = feed.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let xml = feed_with(r#"<entry><title>P &amp; NP</title></entry>"#);

        let feed = parse_feed(&xml).unwrap();
        assert_eq!(feed.entries[0].title, "P & NP");
    }

    #[test]
    fn test_missing_feed_root_is_parse_error() {
        let err = parse_feed("<html><body>Not a feed</body></html>").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_non_xml_input_is_parse_error() {
        let err = parse_feed("plain text, no markup at all").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_mismatched_tags_are_parse_error() {
        let err = parse_feed("<feed><entry><title>x</entry></feed>").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
