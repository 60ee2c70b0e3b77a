//! Reference letter-frequency tables.
//!
//! A reference table lists each letter of a language's alphabet with its
//! expected percentage in ordinary text. The Spanish table (26 Latin letters
//! plus `Ñ`) is embedded in the binary and checked by `build.rs`; it is not
//! user-configurable.
//!
//! ## Example
//!
//! ```rust
//! use freq_solver::ReferenceTable;
//! use freq_solver::core::types::Letter;
//!
//! let table = ReferenceTable::load_embedded().unwrap();
//! assert_eq!(table.len(), 27);
//!
//! let e = Letter::new('E').unwrap();
//! assert_eq!(table.frequency(e), Some(16.78));
//!
//! // Export, e.g. for documentation
//! let json = table.to_json().unwrap();
//! assert!(json.contains("\"letters\""));
//! ```

pub mod store;
