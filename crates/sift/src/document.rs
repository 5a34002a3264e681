//! Loading and parsing HTML documents.

use std::fs;
use std::path::Path;

use scraper::Html;

use crate::{Result, SiftError};

/// File read when no input path is given
pub const DEFAULT_INPUT: &str = "scrape.html";

/// A parsed HTML document, traversed read-only.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML string.
    ///
    /// Parsing never fails: html5ever recovers from unclosed and unknown tags
    /// the way browsers do, so malformed pages still produce a full tree.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Read a UTF-8 file and parse it.
    ///
    /// The whole file is read before parsing starts; the handle is closed
    /// by the time this returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SiftError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded document");

        Ok(Self::parse(&source))
    }

    /// Access the underlying scraper tree
    pub fn html(&self) -> &Html {
        &self.html
    }
}
