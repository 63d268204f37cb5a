//! Error types for catalog operations.

use place_store::StoreError;
use thiserror::Error;

/// Errors returned by PlaceCatalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested place or keyword doesn't exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A create or update request failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub(crate) fn place_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "place",
            id: id.to_string(),
        }
    }

    pub(crate) fn keyword_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "keyword",
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
