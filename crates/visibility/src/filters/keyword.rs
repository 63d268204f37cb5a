//! Filter places by selected keywords.

use crate::traits::{EvalContext, Filter};
use place_store::{Keyword, KeywordId, Place};

/// Keeps places tagged with at least one of the selected keywords.
///
/// ## Algorithm
/// 1. No selected keywords: every place passes
/// 2. Otherwise a place passes if any of its keyword ids is selected
///
/// Keywords are compared by id, never by label, so two keywords sharing
/// a label stay distinct.
pub struct KeywordFilter {
    selected: Vec<KeywordId>,
}

impl KeywordFilter {
    pub fn new(selected: &[Keyword]) -> Self {
        Self {
            selected: selected.iter().map(|k| k.id).collect(),
        }
    }
}

impl Filter for KeywordFilter {
    fn name(&self) -> &str {
        "KeywordFilter"
    }

    fn matches(&self, place: &Place, _context: &EvalContext) -> bool {
        if self.selected.is_empty() {
            return true;
        }
        self.selected.iter().any(|&id| place.has_keyword(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use place_store::{OpeningHours, Position};
    use uuid::Uuid;

    fn context() -> EvalContext {
        EvalContext::at(
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn place_with(keywords: Vec<Keyword>) -> Place {
        Place {
            id: Uuid::new_v4(),
            title: "Library".to_string(),
            description: String::new(),
            position: Position { lat: 60.17, lng: 24.94 },
            opening_hours: OpeningHours::new("08:00", "20:00"),
            keywords,
        }
    }

    #[test]
    fn test_any_selected_keyword_passes() {
        let k1 = Keyword::new("books");
        let k2 = Keyword::new("quiet");
        let filter = KeywordFilter::new(&[k1, k2.clone()]);

        assert!(filter.matches(&place_with(vec![k2]), &context()));
    }

    #[test]
    fn test_untagged_place_fails() {
        let filter = KeywordFilter::new(&[Keyword::new("books")]);

        assert!(!filter.matches(&place_with(vec![]), &context()));
    }

    #[test]
    fn test_empty_selection_passes_all() {
        let filter = KeywordFilter::new(&[]);

        assert!(filter.matches(&place_with(vec![]), &context()));
        assert!(filter.matches(&place_with(vec![Keyword::new("books")]), &context()));
    }

    #[test]
    fn test_same_label_different_id_fails() {
        let selected = Keyword::new("vegan");
        let lookalike = Keyword::new("vegan");
        let filter = KeywordFilter::new(&[selected]);

        assert!(!filter.matches(&place_with(vec![lookalike]), &context()));
    }
}
