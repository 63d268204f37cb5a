//! Filter implementations for the visibility pass.
//!
//! This module contains the concrete filters that a VisibilityFilter
//! composes with AND semantics.

pub mod keyword;
pub mod open_now;
pub mod title;

// Re-export for convenience
pub use keyword::KeywordFilter;
pub use open_now::OpenNowFilter;
pub use title::{TitleFilter, TitlePattern};
