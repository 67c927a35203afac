//! # arXiv MCP
//!
//! A Model Context Protocol (MCP) server exposing a single tool,
//! `search_arxiv`, that queries the arXiv API for recent papers in a
//! category and returns a plain-text digest.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (SearchRequest, PaperRecord)
//! - [`arxiv`]: The feed pipeline: query building, fetching, parsing, normalization
//! - [`format`]: Digest rendering
//! - [`mcp`]: MCP protocol implementation and server
//! - [`utils`]: HTTP client
//! - [`config`]: Configuration management

pub mod arxiv;
pub mod config;
pub mod format;
pub mod mcp;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use arxiv::{ArxivSource, SourceError};
pub use models::{PaperRecord, SearchRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
