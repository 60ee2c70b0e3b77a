use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::core::types::Letter;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse reference table: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Reference table has no letters")]
    Empty,

    #[error("Letter '{0}' appears more than once in the reference table")]
    DuplicateLetter(Letter),

    #[error("Letter '{letter}' has invalid frequency {frequency}")]
    InvalidFrequency { letter: Letter, frequency: f64 },
}

/// Table format version for compatibility checking
pub const TABLE_VERSION: &str = "1.0.0";

/// A letter and its expected percentage in the target language
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub letter: Letter,
    pub frequency: f64,
}

/// Serializable table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    pub version: String,
    pub language: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub letters: Vec<ReferenceEntry>,
}

/// Expected letter frequencies for a natural language
///
/// Entries keep the order of the source document, which is also the order
/// the matcher scans candidates in. The table is read-only once built and is
/// meant to be constructed once and shared by reference.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    /// ISO language code (e.g. "es")
    pub language: String,

    /// Human-readable language name
    pub display_name: String,

    entries: Vec<ReferenceEntry>,

    /// Index: letter -> position in entries
    letter_to_index: HashMap<Letter, usize>,
}

impl ReferenceTable {
    /// Load the embedded Spanish table
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Embedded at compile time, validated by build.rs
        const EMBEDDED_TABLE: &str = include_str!("../../catalogs/spanish_frequencies.json");
        Self::from_json(EMBEDDED_TABLE)
    }

    /// Parse a table from its JSON document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: TableData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != TABLE_VERSION {
            tracing::warn!(
                expected = TABLE_VERSION,
                found = %data.version,
                "Reference table version mismatch"
            );
        }

        Self::from_entries(data.language, data.display_name, data.letters)
    }

    /// Build a table from entries, rejecting duplicates and bad frequencies
    pub fn from_entries(
        language: impl Into<String>,
        display_name: impl Into<String>,
        entries: Vec<ReferenceEntry>,
    ) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut letter_to_index = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if !entry.frequency.is_finite() || entry.frequency < 0.0 {
                return Err(CatalogError::InvalidFrequency {
                    letter: entry.letter,
                    frequency: entry.frequency,
                });
            }
            if letter_to_index.insert(entry.letter, index).is_some() {
                return Err(CatalogError::DuplicateLetter(entry.letter));
            }
        }

        Ok(Self {
            language: language.into(),
            display_name: display_name.into(),
            entries,
            letter_to_index,
        })
    }

    /// Reference percentage for a letter
    #[must_use]
    pub fn frequency(&self, letter: Letter) -> Option<f64> {
        self.letter_to_index
            .get(&letter)
            .map(|&idx| self.entries[idx].frequency)
    }

    /// Is `letter` part of this table's alphabet?
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letter_to_index.contains_key(&letter)
    }

    /// Entries in table order
    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Sum of all reference percentages
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.frequency).sum()
    }

    /// Export table to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = TableData {
            version: TABLE_VERSION.to_string(),
            language: self.language.clone(),
            display_name: self.display_name.clone(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            letters: self.entries.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of letters in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a successfully built table
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_load_embedded_table() {
        let table = ReferenceTable::load_embedded().unwrap();
        assert_eq!(table.len(), 27);
        assert_eq!(table.language, "es");
        assert!(!table.is_empty());
    }

    #[test]
    fn test_embedded_table_values() {
        let table = ReferenceTable::load_embedded().unwrap();
        assert_eq!(table.frequency(letter('E')), Some(16.78));
        assert_eq!(table.frequency(letter('A')), Some(11.96));
        assert_eq!(table.frequency(letter('P')), Some(2.776));
        assert_eq!(table.frequency(letter('Ñ')), Some(0.29));
        assert_eq!(table.frequency(letter('W')), Some(0.0));
        assert!((table.total() - 99.896).abs() < 1e-6);
    }

    #[test]
    fn test_embedded_table_order() {
        let table = ReferenceTable::load_embedded().unwrap();
        let order: String = table
            .entries()
            .iter()
            .map(|e| e.letter.as_char())
            .collect();
        assert_eq!(order, "EAOLSNDRUITCPMYQBHGFVJÑZXKW");
    }

    #[test]
    fn test_embedded_table_covers_latin_alphabet() {
        let table = ReferenceTable::load_embedded().unwrap();
        for c in 'A'..='Z' {
            assert!(table.contains(letter(c)), "missing {c}");
        }
        assert!(table.contains(letter('Ñ')));
        assert!(!table.contains(letter('É')));
    }

    #[test]
    fn test_duplicate_letter_rejected() {
        let json = r#"{"version":"1.0.0","language":"xx","display_name":"Test",
            "letters":[{"letter":"A","frequency":50.0},{"letter":"A","frequency":50.0}]}"#;
        assert!(matches!(
            ReferenceTable::from_json(json),
            Err(CatalogError::DuplicateLetter(l)) if l.as_char() == 'A'
        ));
    }

    #[test]
    fn test_negative_frequency_rejected() {
        let json = r#"{"version":"1.0.0","language":"xx","display_name":"Test",
            "letters":[{"letter":"A","frequency":-1.0}]}"#;
        assert!(matches!(
            ReferenceTable::from_json(json),
            Err(CatalogError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn test_lowercase_letter_rejected() {
        let json = r#"{"version":"1.0.0","language":"xx","display_name":"Test",
            "letters":[{"letter":"a","frequency":1.0}]}"#;
        assert!(matches!(
            ReferenceTable::from_json(json),
            Err(CatalogError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let json = r#"{"version":"1.0.0","language":"xx","display_name":"Test","letters":[]}"#;
        assert!(matches!(
            ReferenceTable::from_json(json),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_to_json_round_trips() {
        let table = ReferenceTable::load_embedded().unwrap();
        let json = table.to_json().unwrap();

        assert!(json.contains("\"version\""));
        assert!(json.contains("\"created_at\""));
        assert!(json.contains("\"Ñ\""));

        let reloaded = ReferenceTable::from_json(&json).unwrap();
        assert_eq!(reloaded.entries(), table.entries());
    }
}
