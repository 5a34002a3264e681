//! # sift
//!
//! Pull readable text out of a saved HTML page.
//!
//! `sift` walks the headings (`h1`-`h3`), paragraphs and list items of a
//! document in order, normalizes each element's visible text, and keeps the
//! ones accepted by a [`Filter`].
//!
//! ## Design
//!
//! - **One traversal**: the filter is injected, so keyword and length
//!   selection share the same walk.
//! - **Permissive parsing**: documents go through html5ever (via `scraper`),
//!   which recovers from unclosed and unknown tags instead of failing.
//! - **Lazy output**: [`Extractor::extract`] yields matches as it walks.
//!
//! ## Example
//!
//! ```rust
//! use sift::{Document, Extractor};
//!
//! let doc = Document::parse("<h1>Cash for iPhones in Orlando</h1><p>Hello world</p>");
//! let lines: Vec<String> = Extractor::keywords()
//!     .extract(&doc)
//!     .map(|m| m.to_string())
//!     .collect();
//!
//! assert_eq!(lines, vec!["H1: Cash for iPhones in Orlando"]);
//! ```

pub mod document;
mod extract;
pub mod filter;
pub mod kind;
pub mod text;

use std::path::PathBuf;

pub use document::{Document, DEFAULT_INPUT};
pub use extract::{Extractor, Match};
pub use filter::{Filter, KeywordSet, DEFAULT_KEYWORDS, DEFAULT_MIN_WORDS};
pub use kind::ElementKind;
pub use text::{text_content, word_count};

/// Error type for sift operations
#[derive(Debug, thiserror::Error)]
pub enum SiftError {
    #[error("Failed to read document {}: {source}", .path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SiftError>;
