//! Filter places by a title search string.
//!
//! The search string is always a literal: characters such as `.`, `*` or
//! `(` match themselves and nothing else.

use crate::traits::{EvalContext, Filter};
use place_store::Place;

/// A compiled, case-insensitive literal substring matcher.
///
/// There is no pattern for the empty search string: "match everything"
/// is expressed as the absence of a TitlePattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePattern {
    search: String,
    needle: String,
}

impl TitlePattern {
    /// Compile a raw search string; `None` if it is empty.
    pub fn new(search: &str) -> Option<Self> {
        if search.is_empty() {
            return None;
        }
        Some(Self {
            search: search.to_string(),
            needle: search.to_lowercase(),
        })
    }

    /// The search string as the user typed it
    pub fn as_str(&self) -> &str {
        &self.search
    }

    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.needle)
    }
}

/// Keeps places whose title contains the search string.
pub struct TitleFilter {
    pattern: TitlePattern,
}

impl TitleFilter {
    pub fn new(pattern: TitlePattern) -> Self {
        Self { pattern }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, place: &Place, _context: &EvalContext) -> bool {
        self.pattern.matches(&place.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_has_no_pattern() {
        assert!(TitlePattern::new("").is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let pattern = TitlePattern::new("CaFe").unwrap();

        assert!(pattern.matches("Cafe Regatta"));
        assert!(pattern.matches("Night CAFE"));
        assert!(!pattern.matches("Bakery"));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let pattern = TitlePattern::new("a.b*c").unwrap();

        assert!(pattern.matches("xx A.B*C yy"));
        assert!(!pattern.matches("axbc"));
        assert!(!pattern.matches("a.bbbc"));
        assert!(!pattern.matches("ab"));
    }

    #[test]
    fn test_other_metacharacters() {
        for search in ["(", "[x]", "^start", "end$", "a|b", "\\", "{2}", "+?"] {
            let pattern = TitlePattern::new(search).unwrap();
            assert!(pattern.matches(&format!("before {} after", search)));
            assert!(!pattern.matches("plain title"), "{:?} matched plain text", search);
        }
    }

    #[test]
    fn test_keeps_original_search() {
        let pattern = TitlePattern::new("Sauna").unwrap();
        assert_eq!(pattern.as_str(), "Sauna");
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let pattern = TitlePattern::new("ÄITI").unwrap();
        assert!(pattern.matches("Kahvila äiti"));
    }
}
