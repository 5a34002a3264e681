//! Filter policies deciding which element texts are emitted.

use std::fmt;

use crate::text::word_count;

/// Keywords matched by [`Filter::keywords`]
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "electronics",
    "iphone",
    "repair",
    "orlando",
    "sell",
    "trade",
    "samsung",
    "buy",
    "cash",
    "macbook",
    "ipad",
    "cell phone",
];

/// Token threshold used by [`Filter::min_words`]; a text must have more than this
pub const DEFAULT_MIN_WORDS: usize = 3;

/// A set of lowercase keywords matched as plain substrings.
///
/// Multi-word entries like `"cell phone"` match only that exact character
/// sequence, not the two words in any spacing or order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Build a set, lowercasing each keyword. Empty keywords are dropped.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if !keyword.is_empty() && !set.contains(&keyword) {
                set.push(keyword);
            }
        }
        Self { keywords: set }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Find the first keyword contained in `text` (case-insensitive)
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.iter().find(|keyword| lower.contains(keyword))
    }

    pub fn matches(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

/// A filter determines which element texts are emitted
pub enum Filter {
    /// Text contains any of the keywords
    Keywords(KeywordSet),
    /// Text has strictly more than this many whitespace-separated tokens
    MinWords(usize),
    /// Match using a predicate function
    Predicate(Box<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Filter {
    /// Keyword filter over [`DEFAULT_KEYWORDS`]
    pub fn keywords() -> Self {
        Filter::Keywords(KeywordSet::default())
    }

    /// Length filter over [`DEFAULT_MIN_WORDS`]
    pub fn min_words() -> Self {
        Filter::MinWords(DEFAULT_MIN_WORDS)
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter accepts a trimmed, non-empty text
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Filter::Keywords(set) => set.matches(text),
            Filter::MinWords(min) => word_count(text) > *min,
            Filter::Predicate(f) => f(text),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Keywords(set) => f.debug_tuple("Keywords").field(set).finish(),
            Filter::MinWords(min) => f.debug_tuple("MinWords").field(min).finish(),
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_case_insensitive() {
        let filter = Filter::keywords();
        assert!(filter.matches("Cash for iPhones in Orlando"));
        assert!(filter.matches("SAMSUNG"));
        assert!(!filter.matches("Hello world"));
    }

    #[test]
    fn test_keyword_is_substring_match() {
        let set = KeywordSet::default();
        assert_eq!(set.find_in("Reselling gadgets"), Some("sell"));
        assert_eq!(set.find_in("Cashier wanted"), Some("cash"));
        assert_eq!(set.find_in("Buyers welcome"), Some("buy"));
    }

    #[test]
    fn test_multi_word_keyword_is_literal() {
        let set = KeywordSet::new(["cell phone"]);
        assert!(set.matches("Broken Cell Phone?"));
        assert!(!set.matches("cell  phone"));
        assert!(!set.matches("phone cell"));
        assert!(!set.matches("cellphone"));
    }

    #[test]
    fn test_keyword_set_normalizes() {
        let set = KeywordSet::new(["iPad", "", "IPAD", "Trade"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["ipad", "trade"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_keyword_set_matches_nothing() {
        let filter = Filter::Keywords(KeywordSet::new(Vec::<String>::new()));
        assert!(!filter.matches("anything at all here"));
    }

    #[test]
    fn test_min_words_is_strict() {
        let filter = Filter::min_words();
        assert!(!filter.matches("Hello world"));
        assert!(!filter.matches("one two three"));
        assert!(filter.matches("one two three four"));
        assert!(filter.matches("one\ntwo\t three    four"));
    }

    #[test]
    fn test_predicate() {
        let filter = Filter::predicate(|text| text.ends_with('?'));
        assert!(filter.matches("Need a repair?"));
        assert!(!filter.matches("Repairs done."));
        assert_eq!(format!("{filter:?}"), "Predicate(..)");
    }
}
