//! The user's current combination of filter criteria.

use crate::filters::TitlePattern;
use place_store::{Keyword, KeywordId};

/// Active search and filter criteria.
///
/// Owned by whichever layer handles user interaction and passed by
/// reference into every visibility pass. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    /// Title search; `None` matches every title
    pub title_pattern: Option<TitlePattern>,
    /// Selected keywords in selection (display) order
    pub selected_keywords: Vec<Keyword>,
    /// Only show places open at the evaluation instant
    pub open_only: bool,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the title search. An empty string clears it.
    pub fn set_title_search(&mut self, search: &str) {
        self.title_pattern = TitlePattern::new(search);
    }

    /// Add a keyword to the selection.
    ///
    /// Returns `false` (and changes nothing) if a keyword with the same
    /// id is already selected.
    pub fn select_keyword(&mut self, keyword: Keyword) -> bool {
        if self.is_keyword_selected(keyword.id) {
            return false;
        }
        self.selected_keywords.push(keyword);
        true
    }

    /// Remove a keyword from the selection. Returns whether it was selected.
    pub fn deselect_keyword(&mut self, id: KeywordId) -> bool {
        let before = self.selected_keywords.len();
        self.selected_keywords.retain(|k| k.id != id);
        self.selected_keywords.len() != before
    }

    pub fn is_keyword_selected(&self, id: KeywordId) -> bool {
        self.selected_keywords.iter().any(|k| k.id == id)
    }

    pub fn set_open_only(&mut self, open_only: bool) {
        self.open_only = open_only;
    }

    /// True when no criterion is active, i.e. every place is visible
    pub fn is_empty(&self) -> bool {
        self.title_pattern.is_none() && self.selected_keywords.is_empty() && !self.open_only
    }

    // Builder-style helpers

    pub fn with_title_search(mut self, search: &str) -> Self {
        self.set_title_search(search);
        self
    }

    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.select_keyword(keyword);
        self
    }

    pub fn with_open_only(mut self, open_only: bool) -> Self {
        self.set_open_only(open_only);
        self
    }
}
