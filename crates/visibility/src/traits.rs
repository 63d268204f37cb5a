//! Core traits for the visibility filter.
//!
//! This module defines the Filter trait that every visibility criterion
//! implements, and the evaluation context passed to each of them.

use chrono::{Local, NaiveDateTime};
use place_store::Place;

/// Inputs shared by every filter during one evaluation pass.
///
/// The wall-clock instant is injected rather than read inside filters,
/// so a pass can be evaluated at any fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    pub now: NaiveDateTime,
}

impl EvalContext {
    /// Evaluate at a fixed local wall-clock instant
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Evaluate at the current local wall-clock instant
    pub fn now_local() -> Self {
        Self::at(Local::now().naive_local())
    }
}

/// Core trait for deciding whether a place passes one criterion.
///
/// All filters must implement this trait to be used in the VisibilityFilter.
///
/// ## Design Note
/// - `Send + Sync` allows a built VisibilityFilter to be shared
/// - Filters are pure: the same place and context always give the same answer
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `place` passes this filter.
    ///
    /// # Arguments
    /// * `place` - The place to test
    /// * `context` - Evaluation inputs, including the current instant
    fn matches(&self, place: &Place, context: &EvalContext) -> bool;
}
