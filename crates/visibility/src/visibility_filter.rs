//! The VisibilityFilter decides which places are shown.
//!
//! This module provides the VisibilityFilter struct that chains filters
//! with AND semantics, either built from a FilterConfig or assembled by
//! hand with the builder pattern.

use crate::config::FilterConfig;
use crate::filters::{KeywordFilter, OpenNowFilter, TitleFilter};
use crate::traits::{EvalContext, Filter};
use place_store::{Place, PlaceId};

/// The visibility decision for one place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub place_id: PlaceId,
    pub visible: bool,
}

/// Chains filters together; a place is visible if every filter keeps it.
///
/// ## Usage
/// ```ignore
/// let config = FilterConfig::new()
///     .with_title_search("cafe")
///     .with_open_only(true);
///
/// let filter = VisibilityFilter::from_config(&config);
/// let shown = filter.visible(&places, &EvalContext::now_local());
/// ```
pub struct VisibilityFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl VisibilityFilter {
    /// Create a VisibilityFilter with no filters; every place is visible.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the filter for a FilterConfig.
    ///
    /// Only active criteria contribute a filter:
    /// - a title pattern adds a TitleFilter
    /// - a non-empty keyword selection adds a KeywordFilter
    /// - the open-only toggle adds an OpenNowFilter
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut filter = Self::new();
        if let Some(pattern) = &config.title_pattern {
            filter = filter.add_filter(TitleFilter::new(pattern.clone()));
        }
        if !config.selected_keywords.is_empty() {
            filter = filter.add_filter(KeywordFilter::new(&config.selected_keywords));
        }
        if config.open_only {
            filter = filter.add_filter(OpenNowFilter);
        }
        filter
    }

    /// Add a filter (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the active filters, in evaluation order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Whether a single place is visible
    pub fn is_visible(&self, place: &Place, context: &EvalContext) -> bool {
        self.filters.iter().all(|f| f.matches(place, context))
    }

    /// Decide visibility for every place.
    ///
    /// ## Algorithm
    /// 1. Start with every place visible
    /// 2. For each filter in order:
    ///    a. Test the places still visible
    ///    b. Log filter name with input and output counts
    /// 3. Return one decision per place, in input order
    ///
    /// This is always a full pass over `places`.
    pub fn apply(&self, places: &[Place], context: &EvalContext) -> Vec<Visibility> {
        let mut visible = vec![true; places.len()];

        for filter in &self.filters {
            let input_count = visible.iter().filter(|&&v| v).count();
            for (place, flag) in places.iter().zip(visible.iter_mut()) {
                if *flag {
                    *flag = filter.matches(place, context);
                }
            }
            tracing::debug!(
                "Filter applied: {} ({} -> {} places)",
                filter.name(),
                input_count,
                visible.iter().filter(|&&v| v).count()
            );
        }

        places
            .iter()
            .zip(visible)
            .map(|(place, visible)| Visibility {
                place_id: place.id,
                visible,
            })
            .collect()
    }

    /// The visible places, in input order
    pub fn visible<'a>(&self, places: &'a [Place], context: &EvalContext) -> Vec<&'a Place> {
        places
            .iter()
            .zip(self.apply(places, context))
            .filter(|(_, decision)| decision.visible)
            .map(|(place, _)| place)
            .collect()
    }
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        Self::new()
    }
}
