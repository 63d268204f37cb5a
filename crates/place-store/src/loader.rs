//! Loading, saving and validating a PlaceStore on disk.
//!
//! A data directory holds three JSON files mirroring the tables of the
//! relational store the catalog was originally backed by:
//! - places.json
//! - keywords.json
//! - keyword_places.json

use crate::error::{Result, StoreError};
use crate::parser;
use crate::types::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const PLACES_FILE: &str = "places.json";
pub const KEYWORDS_FILE: &str = "keywords.json";
pub const KEYWORD_PLACES_FILE: &str = "keyword_places.json";

impl PlaceStore {
    /// Load a store from a data directory
    ///
    /// Steps:
    /// 1. Parse all three files (in parallel)
    /// 2. Reject files that repeat a place or keyword id
    /// 3. Insert places, keywords and association rows
    /// 4. Validate references and opening hours
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        tracing::info!("Loading places from {:?}", data_dir);

        let places_path = data_dir.join(PLACES_FILE);
        let keywords_path = data_dir.join(KEYWORDS_FILE);
        let keyword_places_path = data_dir.join(KEYWORD_PLACES_FILE);

        // Nested joins give three-way parallelism
        let ((places, keywords), keyword_places) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_places(&places_path),
                    || parser::parse_keywords(&keywords_path),
                )
            },
            || parser::parse_keyword_places(&keyword_places_path),
        );

        let places = places?;
        let keywords = keywords?;
        let keyword_places = keyword_places?;

        check_unique_ids("Place", PLACES_FILE, places.iter().map(|p| p.id))?;
        check_unique_ids("Keyword", KEYWORDS_FILE, keywords.iter().map(|k| k.id))?;

        let mut store = PlaceStore::new();
        for place in places {
            store.insert_place(place);
        }
        for keyword in keywords {
            store.insert_keyword(keyword);
        }
        for row in keyword_places {
            // Rows are checked by validate() below, duplicates collapse here
            if !store.keyword_places.contains(&row) {
                store.keyword_places.push(row);
            }
        }

        store.validate()?;

        let (places, keywords, associations) = store.counts();
        tracing::info!(
            "Loaded {} places, {} keywords, {} keyword associations",
            places,
            keywords,
            associations
        );
        Ok(store)
    }

    /// Write the store to a data directory, creating it if needed
    pub fn save_to_dir(&self, data_dir: &Path) -> Result<()> {
        fs::create_dir_all(data_dir)?;

        write_json(&data_dir.join(PLACES_FILE), &self.places)?;
        write_json(&data_dir.join(KEYWORDS_FILE), &self.keywords)?;
        write_json(&data_dir.join(KEYWORD_PLACES_FILE), &self.keyword_places)?;

        tracing::info!("Saved places to {:?}", data_dir);
        Ok(())
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - every association row references an existing place and keyword
    /// - every place has well-formed opening hours
    pub fn validate(&self) -> Result<()> {
        for row in &self.keyword_places {
            if self.get_keyword(row.keyword_id).is_none() {
                return Err(StoreError::MissingReference {
                    entity: "Keyword".to_string(),
                    id: row.keyword_id.to_string(),
                });
            }
            if !self.contains_place(row.place_id) {
                return Err(StoreError::MissingReference {
                    entity: "Place".to_string(),
                    id: row.place_id.to_string(),
                });
            }
        }

        for place in &self.places {
            place.opening_hours.parse()?;
        }
        Ok(())
    }
}

fn check_unique_ids(
    entity: &str,
    file: &str,
    ids: impl Iterator<Item = uuid::Uuid>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                entity: entity.to_string(),
                id: id.to_string(),
                file: file.to_string(),
            });
        }
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
