//! Visibility filtering for map places.
//!
//! This crate decides, for a collection of places and the user's current
//! filter criteria, which places should be shown on the map.
//!
//! It provides:
//! - Filter trait and the title, keyword and open-now filters
//! - Opening-hours window math, including windows that cross midnight
//! - FilterConfig holding the active criteria
//! - VisibilityFilter composing the active filters with AND semantics
//! - Keyword suggestions for autocomplete inputs
//!
//! Everything here is pure: no I/O, no clock reads inside filters, and
//! no state carried between passes.
//!
//! ## Example Usage
//! ```ignore
//! use visibility::{EvalContext, FilterConfig, VisibilityFilter};
//!
//! let mut config = FilterConfig::new();
//! config.set_title_search("sauna");
//! config.select_keyword(public_sauna);
//! config.set_open_only(true);
//!
//! let filter = VisibilityFilter::from_config(&config);
//! for decision in filter.apply(&places, &EvalContext::now_local()) {
//!     marker(decision.place_id).set_visible(decision.visible);
//! }
//! ```

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod filters;
pub mod time_window;
pub mod traits;
pub mod visibility_filter;

// Re-export main types
pub use autocomplete::suggest_keywords;
pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use filters::TitlePattern;
pub use time_window::{OpeningWindow, open_now};
pub use traits::{EvalContext, Filter};
pub use visibility_filter::{Visibility, VisibilityFilter};
