//! Core domain types for the places catalog.
//!
//! This module defines the data structures shared by every other crate:
//! places, keywords, the association rows that link them, and the
//! [`PlaceStore`] that owns all three.
//!
//! The JSON shape of [`Place`] is the one the REST API exchanged
//! (`openingHours`, `position.lat`, `position.lng`), so data files written
//! by the original service load unchanged.

use crate::error::{Result, StoreError};
use crate::parser::parse_clock_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a place
pub type PlaceId = Uuid;

/// Unique identifier for a keyword
pub type KeywordId = Uuid;

// =============================================================================
// Value Types
// =============================================================================

/// Geographic position of a place marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// Daily recurring opening window.
///
/// Both ends are kept as the raw "HH:MM" strings exchanged with clients.
/// A window whose `start` is later than its `end` crosses midnight
/// (e.g. 22:00 - 06:00).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub start: String,
    pub end: String,
}

impl OpeningHours {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parse both ends into wall-clock times.
    ///
    /// Fails with [`StoreError::InvalidTimeFormat`] naming the first
    /// malformed end.
    pub fn parse(&self) -> Result<(NaiveTime, NaiveTime)> {
        Ok((parse_clock_time(&self.start)?, parse_clock_time(&self.end)?))
    }
}

// =============================================================================
// Keyword
// =============================================================================

/// A user-defined tag attachable to many places.
///
/// Labels are not unique: two keywords may share a label, so equality
/// across the system is always decided by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: KeywordId,
    pub label: String,
}

impl Keyword {
    /// Create a keyword with a fresh v4 id
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }
}

/// One row of the many-to-many keyword/place association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordPlace {
    pub keyword_id: KeywordId,
    pub place_id: PlaceId,
}

// =============================================================================
// Place
// =============================================================================

/// A place as it is stored, without its keywords.
///
/// Keywords are never embedded by value; they are resolved through the
/// association rows when a [`Place`] is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceRecord {
    pub id: PlaceId,
    pub title: String,
    pub description: String,
    pub position: Position,
    pub opening_hours: OpeningHours,
}

impl PlaceRecord {
    pub fn into_place(self, keywords: Vec<Keyword>) -> Place {
        Place {
            id: self.id,
            title: self.title,
            description: self.description,
            position: self.position,
            opening_hours: self.opening_hours,
            keywords,
        }
    }
}

/// A point of interest with its resolved keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    pub description: String,
    pub position: Position,
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

impl Place {
    /// Whether this place carries the keyword with the given id
    pub fn has_keyword(&self, keyword_id: KeywordId) -> bool {
        self.keywords.iter().any(|k| k.id == keyword_id)
    }
}

// =============================================================================
// PlaceStore - The In-Memory Database
// =============================================================================

/// Owns every place, keyword and association row.
///
/// Collections are kept in insertion order so listings are stable.
/// Scans are linear; the catalog holds tens to low hundreds of places.
#[derive(Debug, Default)]
pub struct PlaceStore {
    pub(crate) places: Vec<PlaceRecord>,
    pub(crate) keywords: Vec<Keyword>,
    pub(crate) keyword_places: Vec<KeywordPlace>,
}

impl PlaceStore {
    /// Creates a new, empty PlaceStore
    pub fn new() -> Self {
        Self::default()
    }

    // Places

    pub fn contains_place(&self, id: PlaceId) -> bool {
        self.places.iter().any(|p| p.id == id)
    }

    pub fn get_place_record(&self, id: PlaceId) -> Option<&PlaceRecord> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Get a place with its keywords resolved
    pub fn get_place(&self, id: PlaceId) -> Option<Place> {
        self.get_place_record(id)
            .map(|record| record.clone().into_place(self.keywords_for_place(id)))
    }

    /// All places with their keywords, in insertion order
    pub fn all_places(&self) -> Vec<Place> {
        self.places
            .iter()
            .map(|record| record.clone().into_place(self.keywords_for_place(record.id)))
            .collect()
    }

    /// Insert a place, replacing any existing place with the same id
    pub fn insert_place(&mut self, record: PlaceRecord) {
        match self.places.iter_mut().find(|p| p.id == record.id) {
            Some(existing) => *existing = record,
            None => self.places.push(record),
        }
    }

    /// Overwrite the stored fields of an existing place.
    ///
    /// Keyword associations are untouched. Returns `false` if no place
    /// has the record's id.
    pub fn update_place(&mut self, record: PlaceRecord) -> bool {
        match self.places.iter_mut().find(|p| p.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    /// Remove a place and every association row that references it
    pub fn remove_place(&mut self, id: PlaceId) -> bool {
        let before = self.places.len();
        self.places.retain(|p| p.id != id);
        self.keyword_places.retain(|row| row.place_id != id);
        self.places.len() != before
    }

    // Keywords

    pub fn get_keyword(&self, id: KeywordId) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.id == id)
    }

    pub fn all_keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// First keyword whose label is exactly `label`
    pub fn find_keyword_by_label(&self, label: &str) -> Option<&Keyword> {
        self.keywords.iter().find(|k| k.label == label)
    }

    pub fn insert_keyword(&mut self, keyword: Keyword) {
        match self.keywords.iter_mut().find(|k| k.id == keyword.id) {
            Some(existing) => *existing = keyword,
            None => self.keywords.push(keyword),
        }
    }

    pub fn rename_keyword(&mut self, id: KeywordId, label: impl Into<String>) -> bool {
        match self.keywords.iter_mut().find(|k| k.id == id) {
            Some(keyword) => {
                keyword.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Remove a keyword and every association row that references it
    pub fn remove_keyword(&mut self, id: KeywordId) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k.id != id);
        self.keyword_places.retain(|row| row.keyword_id != id);
        self.keywords.len() != before
    }

    // Association

    /// Attach a keyword to a place.
    ///
    /// Returns `Ok(false)` if the pairing already exists; each pairing is
    /// stored at most once.
    pub fn attach(&mut self, keyword_id: KeywordId, place_id: PlaceId) -> Result<bool> {
        if self.get_keyword(keyword_id).is_none() {
            return Err(StoreError::MissingReference {
                entity: "Keyword".to_string(),
                id: keyword_id.to_string(),
            });
        }
        if !self.contains_place(place_id) {
            return Err(StoreError::MissingReference {
                entity: "Place".to_string(),
                id: place_id.to_string(),
            });
        }

        let row = KeywordPlace {
            keyword_id,
            place_id,
        };
        if self.keyword_places.contains(&row) {
            return Ok(false);
        }
        self.keyword_places.push(row);
        Ok(true)
    }

    /// Detach a keyword from a place. Returns `false` if they were not linked.
    pub fn detach(&mut self, keyword_id: KeywordId, place_id: PlaceId) -> bool {
        let before = self.keyword_places.len();
        self.keyword_places
            .retain(|row| !(row.keyword_id == keyword_id && row.place_id == place_id));
        self.keyword_places.len() != before
    }

    /// Keywords attached to a place, in attachment order
    pub fn keywords_for_place(&self, place_id: PlaceId) -> Vec<Keyword> {
        self.keyword_places
            .iter()
            .filter(|row| row.place_id == place_id)
            .filter_map(|row| self.get_keyword(row.keyword_id).cloned())
            .collect()
    }

    /// Ids of the places a keyword is attached to
    pub fn places_for_keyword(&self, keyword_id: KeywordId) -> Vec<PlaceId> {
        self.keyword_places
            .iter()
            .filter(|row| row.keyword_id == keyword_id)
            .map(|row| row.place_id)
            .collect()
    }

    /// Get counts for debugging/validation: (places, keywords, associations)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.places.len(),
            self.keywords.len(),
            self.keyword_places.len(),
        )
    }
}
