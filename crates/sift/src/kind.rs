//! The element kinds sift extracts text from.

use std::fmt;

/// Tracked element kinds, in the order they are listed in [`ElementKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    H1,
    H2,
    H3,
    P,
    Li,
}

impl ElementKind {
    pub const ALL: [ElementKind; 5] = [
        ElementKind::H1,
        ElementKind::H2,
        ElementKind::H3,
        ElementKind::P,
        ElementKind::Li,
    ];

    /// Map a tag name to its kind (case-insensitive)
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
    }

    /// Lowercase tag name as it appears in HTML
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::H1 => "h1",
            ElementKind::H2 => "h2",
            ElementKind::H3 => "h3",
            ElementKind::P => "p",
            ElementKind::Li => "li",
        }
    }

    /// Upper-cased output label
    pub fn label(self) -> &'static str {
        match self {
            ElementKind::H1 => "H1",
            ElementKind::H2 => "H2",
            ElementKind::H3 => "H3",
            ElementKind::P => "P",
            ElementKind::Li => "LI",
        }
    }

    /// CSS selector list matching every tracked kind
    pub fn selector_list() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.tag())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
