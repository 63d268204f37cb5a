//! # Place Catalog
//!
//! This module exposes every operation the places REST API offered, as
//! plain method calls over a [`PlaceStore`]:
//!
//! | endpoint                                  | method                |
//! |-------------------------------------------|-----------------------|
//! | `GET /places`                             | `list_places`         |
//! | `GET /places/:id`                         | `get_place`           |
//! | `POST /places`                            | `create_place`        |
//! | `PUT /places/:id`                         | `update_place`        |
//! | `DELETE /places/:id`                      | `delete_place`        |
//! | `GET /keywords`                           | `list_keywords`       |
//! | `GET /keywords/:id`                       | `get_keyword`         |
//! | `POST /keywords`                          | `create_keyword`      |
//! | `PUT /keywords/:id`                       | `update_keyword`      |
//! | `DELETE /keywords/:id`                    | `delete_keyword`      |
//! | `POST /keywords/:id/places/:placeId`      | `attach_keyword`      |
//! | `DELETE /keywords/:id/places/:placeId`    | `detach_keyword`      |
//!
//! On top of those it offers the client-side flows that were built from
//! them: tagging a place by label, filtered listing, and keyword
//! suggestions.

use std::path::Path;

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::request::{KeywordRequest, PlaceRequest};
use place_store::{Keyword, KeywordId, Place, PlaceId, PlaceStore};
use visibility::{EvalContext, FilterConfig, VisibilityFilter};

/// CRUD service over places, keywords and their association
#[derive(Debug, Default)]
pub struct PlaceCatalog {
    store: PlaceStore,
}

impl PlaceCatalog {
    pub fn new(store: PlaceStore) -> Self {
        Self { store }
    }

    /// Load the catalog from a data directory
    pub fn open(data_dir: &Path) -> Result<Self> {
        Ok(Self::new(PlaceStore::load_from_dir(data_dir)?))
    }

    /// Write the catalog back to a data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        self.store.save_to_dir(data_dir)?;
        Ok(())
    }

    pub fn store(&self) -> &PlaceStore {
        &self.store
    }

    // =========================================================================
    // Places
    // =========================================================================

    pub fn list_places(&self) -> Vec<Place> {
        self.store.all_places()
    }

    pub fn get_place(&self, id: PlaceId) -> Result<Place> {
        self.store
            .get_place(id)
            .ok_or_else(|| CatalogError::place_not_found(id))
    }

    /// Create a place with a fresh id and no keywords
    pub fn create_place(&mut self, request: PlaceRequest) -> Result<Place> {
        request.validate()?;

        let id = Uuid::new_v4();
        self.store.insert_place(request.into_record(id));
        info!("Created place {}", id);

        self.get_place(id)
    }

    /// Replace the fields of an existing place; its keywords are kept.
    ///
    /// Existence is checked before the request is validated, so an
    /// unknown id is reported as `NotFound` even for a bad body.
    pub fn update_place(&mut self, id: PlaceId, request: PlaceRequest) -> Result<Place> {
        if !self.store.contains_place(id) {
            return Err(CatalogError::place_not_found(id));
        }
        request.validate()?;

        self.store.update_place(request.into_record(id));
        info!("Updated place {}", id);

        self.get_place(id)
    }

    /// Delete a place and its keyword associations.
    ///
    /// Deleting an unknown id is not an error; returns whether anything
    /// was removed.
    pub fn delete_place(&mut self, id: PlaceId) -> bool {
        let removed = self.store.remove_place(id);
        if removed {
            info!("Deleted place {}", id);
        } else {
            debug!("Delete of unknown place {} ignored", id);
        }
        removed
    }

    // =========================================================================
    // Keywords
    // =========================================================================

    pub fn list_keywords(&self) -> Vec<Keyword> {
        self.store.all_keywords().to_vec()
    }

    pub fn get_keyword(&self, id: KeywordId) -> Result<Keyword> {
        self.store
            .get_keyword(id)
            .cloned()
            .ok_or_else(|| CatalogError::keyword_not_found(id))
    }

    /// Create a keyword. Labels are not required to be unique.
    pub fn create_keyword(&mut self, request: KeywordRequest) -> Result<Keyword> {
        request.validate()?;

        let keyword = Keyword::new(request.label);
        self.store.insert_keyword(keyword.clone());
        info!("Created keyword {} ({})", keyword.id, keyword.label);
        Ok(keyword)
    }

    pub fn update_keyword(&mut self, id: KeywordId, request: KeywordRequest) -> Result<Keyword> {
        if self.store.get_keyword(id).is_none() {
            return Err(CatalogError::keyword_not_found(id));
        }
        request.validate()?;

        self.store.rename_keyword(id, request.label);
        self.get_keyword(id)
    }

    /// Delete a keyword and detach it from every place.
    pub fn delete_keyword(&mut self, id: KeywordId) -> bool {
        let removed = self.store.remove_keyword(id);
        if removed {
            info!("Deleted keyword {}", id);
        }
        removed
    }

    // =========================================================================
    // Keyword <-> Place
    // =========================================================================

    /// Attach a keyword to a place.
    ///
    /// Returns `Ok(false)` if they were already linked.
    pub fn attach_keyword(&mut self, keyword_id: KeywordId, place_id: PlaceId) -> Result<bool> {
        if self.store.get_keyword(keyword_id).is_none() {
            return Err(CatalogError::keyword_not_found(keyword_id));
        }
        if !self.store.contains_place(place_id) {
            return Err(CatalogError::place_not_found(place_id));
        }
        Ok(self.store.attach(keyword_id, place_id)?)
    }

    /// Detach a keyword from a place. Returns whether they were linked.
    pub fn detach_keyword(&mut self, keyword_id: KeywordId, place_id: PlaceId) -> bool {
        self.store.detach(keyword_id, place_id)
    }

    /// Tag a place by keyword label.
    ///
    /// ## Algorithm
    /// 1. Look for an existing keyword with exactly this label
    /// 2. If none exists, create it
    /// 3. Attach it to the place unless it is already attached
    ///
    /// Returns the keyword that is now attached.
    pub fn tag_place_with_label(&mut self, place_id: PlaceId, label: &str) -> Result<Keyword> {
        if !self.store.contains_place(place_id) {
            return Err(CatalogError::place_not_found(place_id));
        }

        let keyword = match self.store.find_keyword_by_label(label) {
            Some(existing) => existing.clone(),
            None => self.create_keyword(KeywordRequest::new(label))?,
        };

        if self.store.attach(keyword.id, place_id)? {
            info!("Tagged place {} with {}", place_id, keyword.label);
        } else {
            debug!("Place {} already tagged with {}", place_id, keyword.label);
        }
        Ok(keyword)
    }

    /// Resolve keyword labels to keywords, failing on the first unknown label.
    ///
    /// Labels are not unique, so one label can resolve to several keywords.
    /// All of them are returned, in catalog order per label.
    pub fn keywords_by_labels<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<Keyword>> {
        let mut resolved = Vec::new();
        for label in labels {
            let label = label.as_ref();
            let matching: Vec<Keyword> = self
                .store
                .all_keywords()
                .iter()
                .filter(|k| k.label == label)
                .cloned()
                .collect();
            if matching.is_empty() {
                return Err(CatalogError::keyword_not_found(label));
            }
            resolved.extend(matching);
        }
        Ok(resolved)
    }

    // =========================================================================
    // Filtering
    // =========================================================================

    /// Places visible under `config` at `context.now`, in catalog order
    pub fn visible_places(&self, config: &FilterConfig, context: &EvalContext) -> Vec<Place> {
        let places = self.store.all_places();
        let filter = VisibilityFilter::from_config(config);
        let visible: Vec<Place> = filter
            .visible(&places, context)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            "Visibility pass at {}: {} of {} places shown",
            context.now,
            visible.len(),
            places.len()
        );
        visible
    }

    /// Autocomplete keyword labels, skipping keywords already selected in `config`
    pub fn suggest_keywords(&self, input: &str, config: &FilterConfig) -> Vec<Keyword> {
        visibility::suggest_keywords(self.store.all_keywords(), input, |k| {
            config.is_keyword_selected(k.id)
        })
        .into_iter()
        .cloned()
        .collect()
    }
}
