//! Filter places by whether they are open at the evaluation instant.

use crate::time_window::OpeningWindow;
use crate::traits::{EvalContext, Filter};
use place_store::Place;

/// Keeps places whose opening window contains `context.now`.
///
/// A place with malformed opening hours cannot be shown to be open, so
/// it is dropped and a warning is logged.
pub struct OpenNowFilter;

impl Filter for OpenNowFilter {
    fn name(&self) -> &str {
        "OpenNowFilter"
    }

    fn matches(&self, place: &Place, context: &EvalContext) -> bool {
        match OpeningWindow::from_hours(&place.opening_hours) {
            Ok(window) => window.is_open_at(context.now),
            Err(e) => {
                tracing::warn!("Place {} ({}) treated as closed: {}", place.id, place.title, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use place_store::{OpeningHours, Position};
    use uuid::Uuid;

    fn place(start: &str, end: &str) -> Place {
        Place {
            id: Uuid::new_v4(),
            title: "Sauna".to_string(),
            description: String::new(),
            position: Position { lat: 60.16, lng: 24.95 },
            opening_hours: OpeningHours::new(start, end),
            keywords: vec![],
        }
    }

    fn at(hour: u32, minute: u32) -> EvalContext {
        EvalContext::at(
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_open_now_filter() {
        let night = place("22:00", "06:00");

        assert!(OpenNowFilter.matches(&night, &at(23, 30)));
        assert!(OpenNowFilter.matches(&night, &at(2, 0)));
        assert!(!OpenNowFilter.matches(&night, &at(12, 0)));
    }

    #[test]
    fn test_malformed_hours_are_closed() {
        let broken = place("noon", "20:00");

        assert!(!OpenNowFilter.matches(&broken, &at(14, 0)));
    }
}
