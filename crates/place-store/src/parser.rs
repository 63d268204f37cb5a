//! Parsers for the place-store data formats.
//!
//! Two kinds of input are handled here:
//! - wall-clock times in the fixed "HH:MM" form used by opening hours
//! - the JSON data files a store is loaded from:
//!   - places.json: array of place records
//!   - keywords.json: array of keywords
//!   - keyword_places.json: array of `{ keyword_id, place_id }` rows
//!
//! A missing data file is read as an empty collection, so a fresh data
//! directory is a valid (empty) store.

use crate::error::{Result, StoreError};
use crate::types::*;
use chrono::NaiveTime;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Parse a "HH:MM" wall-clock time.
///
/// Exactly five characters: a two-digit hour (00-23), a colon and a
/// two-digit minute (00-59). Seconds are always zero.
///
/// Example: "09:30" -> Ok(09:30:00)
///          "9:30"  -> Err(InvalidTimeFormat)
pub fn parse_clock_time(s: &str) -> Result<NaiveTime> {
    let invalid = || StoreError::InvalidTimeFormat {
        value: s.to_string(),
    };

    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }

    let hour = parse_two_digits(&bytes[0..2]).ok_or_else(invalid)?;
    let minute = parse_two_digits(&bytes[3..5]).ok_or_else(invalid)?;

    // from_hms_opt rejects hour > 23 and minute > 59
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

fn parse_two_digits(digits: &[u8]) -> Option<u32> {
    if !digits.iter().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0'))
}

/// Read a JSON array from `path`, or an empty Vec if the file doesn't exist
fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        tracing::debug!("{} not found, starting empty", path.display());
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| StoreError::ParseError {
        file: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        reason: e.to_string(),
    })
}

/// Parse the places.json file
pub fn parse_places(path: &Path) -> Result<Vec<PlaceRecord>> {
    read_json_array(path)
}

/// Parse the keywords.json file
pub fn parse_keywords(path: &Path) -> Result<Vec<Keyword>> {
    read_json_array(path)
}

/// Parse the keyword_places.json file
pub fn parse_keyword_places(path: &Path) -> Result<Vec<KeywordPlace>> {
    read_json_array(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(
            parse_clock_time("00:00").unwrap(),
            NaiveTime::from_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("23:59").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_clock_time_rejects_malformed() {
        let malformed = [
            "", "9:30", "09:3", "0930", "09-30", "24:00", "12:60", "ab:cd", "09:30:00", " 9:30",
        ];
        for value in malformed {
            let err = parse_clock_time(value).unwrap_err();
            assert!(
                matches!(err, StoreError::InvalidTimeFormat { value: ref v } if v == value),
                "expected InvalidTimeFormat for {:?}, got {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let places = parse_places(&dir.path().join("places.json")).unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_parse_places_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("places.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"[{{
                "id": "6f1c2a52-2f64-4c47-9d4e-1f0c8f3b7a10",
                "title": "Night Cafe",
                "description": "Open late",
                "position": {{ "lat": 60.171, "lng": 24.941 }},
                "openingHours": {{ "start": "22:00", "end": "06:00" }}
            }}]"#
        )
        .unwrap();

        let places = parse_places(&path).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].title, "Night Cafe");
        assert_eq!(places[0].opening_hours, OpeningHours::new("22:00", "06:00"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        fs::write(&path, "not json").unwrap();

        match parse_keywords(&path) {
            Err(StoreError::ParseError { file, .. }) => assert_eq!(file, "keywords.json"),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }
}
