//! Error types for the visibility crate.

use thiserror::Error;

/// Errors surfaced while evaluating filters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// An opening-hours end is not a well-formed "HH:MM" time.
    ///
    /// This is a contract violation by whoever supplied the place; the
    /// open-now filter treats such a place as closed.
    #[error("Invalid time format: {value:?} (expected HH:MM)")]
    InvalidTimeFormat { value: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;
