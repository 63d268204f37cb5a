//! Catalog crate for the places map.
//!
//! This crate contains the service that coordinates the store and the
//! visibility filter: validated CRUD for places and keywords, the
//! keyword/place association, and filtered listings.

pub mod service;
pub mod error;
pub mod request;

pub use service::PlaceCatalog;
pub use error::{CatalogError, Result};
pub use request::{KeywordRequest, PlaceRequest};
