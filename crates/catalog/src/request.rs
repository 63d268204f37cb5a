//! Request bodies for creating and updating places and keywords.
//!
//! Both carry the JSON shape the REST API accepted, and both are
//! validated before anything touches the store.

use crate::error::{CatalogError, Result};
use place_store::{OpeningHours, PlaceId, PlaceRecord, Position, parse_clock_time};
use serde::{Deserialize, Serialize};

/// Longest accepted place title, in characters
pub const MAX_TITLE_LEN: usize = 512;

/// Body of a create or update place request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRequest {
    pub title: String,
    pub description: String,
    pub position: Position,
    pub opening_hours: OpeningHours,
}

impl PlaceRequest {
    /// Check every field.
    ///
    /// Rules:
    /// - title non-empty, at most [`MAX_TITLE_LEN`] characters
    /// - description non-empty
    /// - lat and lng finite and non-zero
    /// - opening hours start and end in "HH:MM" form
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(invalid("title is required"));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(invalid(format!(
                "title is longer than {} characters",
                MAX_TITLE_LEN
            )));
        }
        if self.description.is_empty() {
            return Err(invalid("description is required"));
        }

        // A zero coordinate is how an unset form field arrives
        for (name, value) in [("lat", self.position.lat), ("lng", self.position.lng)] {
            if !value.is_finite() || value == 0.0 {
                return Err(invalid(format!("position.{} is required", name)));
            }
        }

        for (name, value) in [
            ("start", &self.opening_hours.start),
            ("end", &self.opening_hours.end),
        ] {
            parse_clock_time(value).map_err(|e| invalid(format!("openingHours.{}: {}", name, e)))?;
        }
        Ok(())
    }

    pub(crate) fn into_record(self, id: PlaceId) -> PlaceRecord {
        PlaceRecord {
            id,
            title: self.title,
            description: self.description,
            position: self.position,
            opening_hours: self.opening_hours,
        }
    }
}

/// Body of a create or update keyword request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRequest {
    pub label: String,
}

impl KeywordRequest {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            return Err(invalid("label is required"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> CatalogError {
    CatalogError::InvalidRequest(reason.into())
}
