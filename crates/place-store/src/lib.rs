//! # Place Store Crate
//!
//! This crate holds the places catalog data: places, keywords, and the
//! many-to-many association between them.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Place, Keyword, OpeningHours, PlaceStore)
//! - **parser**: "HH:MM" times and the JSON data files
//! - **loader**: Load, save and validate a store in a data directory
//! - **error**: Error types for the store
//!
//! ## Example Usage
//!
//! ```ignore
//! use place_store::PlaceStore;
//! use std::path::Path;
//!
//! let mut store = PlaceStore::load_from_dir(Path::new("data"))?;
//!
//! for place in store.all_places() {
//!     println!("{} ({} keywords)", place.title, place.keywords.len());
//! }
//!
//! store.save_to_dir(Path::new("data"))?;
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use parser::parse_clock_time;
pub use types::{
    // Type aliases
    PlaceId,
    KeywordId,
    // Core types
    Place,
    PlaceRecord,
    Keyword,
    KeywordPlace,
    Position,
    OpeningHours,
    PlaceStore,
};

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn cafe() -> PlaceRecord {
        PlaceRecord {
            id: Uuid::new_v4(),
            title: "Cafe Regatta".to_string(),
            description: "Cinnamon buns by the sea".to_string(),
            position: Position {
                lat: 60.183,
                lng: 24.909,
            },
            opening_hours: OpeningHours::new("09:00", "21:00"),
        }
    }

    #[test]
    fn test_store_creation() {
        let store = PlaceStore::new();
        assert_eq!(store.counts(), (0, 0, 0));
    }

    #[test]
    fn test_insert_place() {
        let mut store = PlaceStore::new();
        let record = cafe();
        store.insert_place(record.clone());

        let place = store.get_place(record.id).unwrap();
        assert_eq!(place.title, "Cafe Regatta");
        assert!(place.keywords.is_empty());
    }

    #[test]
    fn test_update_place_keeps_keywords() {
        let mut store = PlaceStore::new();
        let record = cafe();
        let coffee = Keyword::new("coffee");
        store.insert_place(record.clone());
        store.insert_keyword(coffee.clone());
        store.attach(coffee.id, record.id).unwrap();

        let mut updated = record.clone();
        updated.title = "Regatta".to_string();
        assert!(store.update_place(updated));

        let place = store.get_place(record.id).unwrap();
        assert_eq!(place.title, "Regatta");
        assert_eq!(place.keywords, vec![coffee]);

        assert!(!store.update_place(cafe()));
    }

    #[test]
    fn test_attach_is_unique() {
        let mut store = PlaceStore::new();
        let record = cafe();
        let coffee = Keyword::new("coffee");
        store.insert_place(record.clone());
        store.insert_keyword(coffee.clone());

        assert!(store.attach(coffee.id, record.id).unwrap());
        assert!(!store.attach(coffee.id, record.id).unwrap());
        assert_eq!(store.counts(), (1, 1, 1));
        assert_eq!(store.places_for_keyword(coffee.id), vec![record.id]);
    }

    #[test]
    fn test_attach_missing_reference() {
        let mut store = PlaceStore::new();
        let coffee = Keyword::new("coffee");
        store.insert_keyword(coffee.clone());

        let err = store.attach(coffee.id, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, StoreError::MissingReference { ref entity, .. } if entity == "Place"));
    }

    #[test]
    fn test_delete_cascades_association() {
        let mut store = PlaceStore::new();
        let first = cafe();
        let second = cafe();
        let coffee = Keyword::new("coffee");
        let brunch = Keyword::new("brunch");
        store.insert_place(first.clone());
        store.insert_place(second.clone());
        store.insert_keyword(coffee.clone());
        store.insert_keyword(brunch.clone());
        store.attach(coffee.id, first.id).unwrap();
        store.attach(coffee.id, second.id).unwrap();
        store.attach(brunch.id, first.id).unwrap();

        assert!(store.remove_place(first.id));
        assert_eq!(store.counts(), (1, 2, 1));

        assert!(store.remove_keyword(coffee.id));
        assert_eq!(store.counts(), (1, 1, 0));
        assert!(store.get_place(second.id).unwrap().keywords.is_empty());

        // Deleting again is a no-op
        assert!(!store.remove_place(first.id));
        assert!(!store.remove_keyword(coffee.id));
    }

    #[test]
    fn test_detach() {
        let mut store = PlaceStore::new();
        let record = cafe();
        let coffee = Keyword::new("coffee");
        store.insert_place(record.clone());
        store.insert_keyword(coffee.clone());
        store.attach(coffee.id, record.id).unwrap();

        assert!(store.detach(coffee.id, record.id));
        assert!(!store.detach(coffee.id, record.id));
        assert!(store.keywords_for_place(record.id).is_empty());
    }

    #[test]
    fn test_keywords_with_duplicate_labels() {
        let mut store = PlaceStore::new();
        let first = Keyword::new("vegan");
        let second = Keyword::new("vegan");
        store.insert_keyword(first.clone());
        store.insert_keyword(second.clone());

        assert_eq!(store.all_keywords().len(), 2);
        assert_eq!(store.find_keyword_by_label("vegan"), Some(&first));

        assert!(store.rename_keyword(second.id, "plant-based"));
        assert_eq!(store.get_keyword(second.id).unwrap().label, "plant-based");
    }

    #[test]
    fn test_empty_queries() {
        let store = PlaceStore::new();

        assert!(store.get_place(Uuid::new_v4()).is_none());
        assert!(store.get_keyword(Uuid::new_v4()).is_none());
        assert!(store.find_keyword_by_label("anything").is_none());
        assert!(store.keywords_for_place(Uuid::new_v4()).is_empty());
        assert!(store.all_places().is_empty());
    }

    #[test]
    fn test_place_json_shape() {
        let place = cafe().into_place(vec![]);
        let json = serde_json::to_value(&place).unwrap();

        assert_eq!(json["openingHours"]["start"], "09:00");
        assert_eq!(json["position"]["lat"], 60.183);
        assert!(json["keywords"].as_array().unwrap().is_empty());
    }
}
