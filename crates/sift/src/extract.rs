//! Extractor - walks tracked elements and applies the active filter.

use std::fmt;
use std::io::Write;

use once_cell::sync::Lazy;
use scraper::Selector;

use crate::document::Document;
use crate::filter::Filter;
use crate::kind::ElementKind;
use crate::text::text_content;
use crate::Result;

#[allow(clippy::expect_used)] // Built from fixed tag names that are always valid CSS
static TRACKED: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&ElementKind::selector_list()).expect("valid tracked-element selector")
});

/// One emitted element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub kind: ElementKind,
    pub text: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.text)
    }
}

/// Runs a single pass over a document with an injected filter
#[derive(Debug)]
pub struct Extractor {
    filter: Filter,
}

impl Extractor {
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }

    /// Extractor using the default keyword set
    pub fn keywords() -> Self {
        Self::new(Filter::keywords())
    }

    /// Extractor keeping texts longer than the default word threshold
    pub fn min_words() -> Self {
        Self::new(Filter::min_words())
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Lazily yield matching elements in document order.
    ///
    /// Nested tracked elements are each visited, so an `li` wrapping a `p`
    /// can produce two matches.
    pub fn extract<'a>(&'a self, document: &'a Document) -> impl Iterator<Item = Match> + 'a {
        document.html().select(&TRACKED).filter_map(move |element| {
            let kind = ElementKind::from_tag(element.value().name())?;
            let text = text_content(element);

            if text.is_empty() {
                tracing::trace!(%kind, "skipping element without text");
                return None;
            }
            if !self.filter.matches(&text) {
                tracing::trace!(%kind, %text, "filtered out");
                return None;
            }

            Some(Match { kind, text })
        })
    }

    /// Write one `KIND: text` line per match, returning how many were written
    pub fn write_to<W: Write>(&self, document: &Document, mut out: W) -> Result<usize> {
        let mut count = 0;
        for found in self.extract(document) {
            writeln!(out, "{found}")?;
            count += 1;
        }
        out.flush()?;

        tracing::debug!(count, filter = ?self.filter, "extraction finished");

        Ok(count)
    }
}
