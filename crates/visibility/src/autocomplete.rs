//! Keyword suggestions for search-as-you-type inputs.

use crate::filters::TitlePattern;
use place_store::Keyword;

/// Keywords whose label contains `input`, case-insensitively.
///
/// Empty input suggests nothing. Keywords for which `exclude` returns
/// true (already selected, already attached, ...) are skipped. The
/// result keeps the order of `keywords`.
pub fn suggest_keywords<'a, F>(keywords: &'a [Keyword], input: &str, exclude: F) -> Vec<&'a Keyword>
where
    F: Fn(&Keyword) -> bool,
{
    let Some(pattern) = TitlePattern::new(input) else {
        return Vec::new();
    };

    keywords
        .iter()
        .filter(|keyword| !exclude(*keyword) && pattern.matches(&keyword.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<Keyword> {
        vec![
            Keyword::new("Coffee"),
            Keyword::new("coffee roastery"),
            Keyword::new("Bakery"),
            Keyword::new("c++ meetup"),
        ]
    }

    #[test]
    fn test_empty_input_suggests_nothing() {
        let all = keywords();
        assert!(suggest_keywords(&all, "", |_| false).is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = keywords();
        let labels: Vec<&str> = suggest_keywords(&all, "COF", |_| false)
            .iter()
            .map(|k| k.label.as_str())
            .collect();

        assert_eq!(labels, vec!["Coffee", "coffee roastery"]);
    }

    #[test]
    fn test_excluded_keywords_are_skipped() {
        let all = keywords();
        let selected = all[0].id;
        let suggestions = suggest_keywords(&all, "coffee", |k| k.id == selected);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label, "coffee roastery");
    }

    #[test]
    fn test_literal_metacharacters() {
        let all = keywords();
        let suggestions = suggest_keywords(&all, "c+", |_| false);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label, "c++ meetup");
    }
}
