//! Error types for the place-store crate.
//!
//! Every fallible operation in this crate returns [`Result<T>`], which
//! wraps a [`StoreError`]. The variants carry enough context (file name,
//! offending value, missing id) to produce a useful message without the
//! caller having to re-wrap it.

use thiserror::Error;

/// Errors that can occur while loading, validating or mutating the store
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error occurred while reading or writing a data file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A data file could not be decoded
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// An opening-hours value is not a well-formed "HH:MM" wall-clock time
    #[error("Invalid time format: {value:?} (expected HH:MM)")]
    InvalidTimeFormat { value: String },

    /// Referenced entity doesn't exist (e.g. association row for a deleted place)
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },

    /// The same id appears twice in one data file
    #[error("Duplicate {entity} id {id} in {file}")]
    DuplicateId {
        entity: String,
        id: String,
        file: String,
    },

    /// Data could not be serialized for writing
    #[error("Serialization failed: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
