//! # freq-solver
//!
//! A library for breaking monoalphabetic substitution ciphers by letter
//! frequency.
//!
//! Every letter of a natural language shows up at a fairly stable rate. A
//! substitution cipher swaps the letters but keeps those rates, so pairing
//! each ciphertext letter with the reference letter of the closest rate gives
//! a first guess at the plaintext.
//!
//! `freq-solver` measures the ciphertext, greedily pairs letters with an
//! embedded Spanish frequency table, and applies the resulting substitution.
//!
//! ## Features
//!
//! - **Greedy proximity matching**: Most frequent cipher letter chooses first
//! - **Injective substitution**: No plaintext letter is ever used twice
//! - **Deterministic tie-breaks**: Alphabetical for cipher letters, table
//!   order for reference letters
//! - **Diagnostics**: Observed frequencies, the substitution, and a fit
//!   summary are returned alongside the decoded text
//!
//! ## Example
//!
//! ```rust
//! use freq_solver::{FrequencySolver, ReferenceTable};
//!
//! // Build the table once and share it
//! let table = ReferenceTable::load_embedded().unwrap();
//! let solver = FrequencySolver::new(&table);
//!
//! let decoding = solver.solve("E").unwrap();
//! assert_eq!(decoding.text, "E");
//!
//! // Or in one call
//! assert_eq!(freq_solver::decode("AAAA BBBB").unwrap(), "EEEE AAAA");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Reference frequency tables
//! - [`core`]: Letters, observed frequencies, and substitution maps
//! - [`matching`]: Proximity matcher and solver
//! - [`parsing`]: Input acquisition and normalization
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::ReferenceTable;
pub use crate::core::frequencies::{AnalysisError, ObservedFrequencies};
pub use crate::core::substitution::{Assignment, SubstitutionMap};
pub use crate::core::types::Letter;
pub use crate::matching::engine::{Decoding, FrequencySolver, SolverError};

/// Decode `ciphertext` against the embedded Spanish table.
///
/// # Errors
///
/// Returns `SolverError::Analysis(AnalysisError::NoLetters)` when the
/// ciphertext has no letters to analyze.
pub fn decode(ciphertext: &str) -> Result<String, SolverError> {
    let table = ReferenceTable::load_embedded()?;
    let decoding = FrequencySolver::new(&table).solve(ciphertext)?;
    Ok(decoding.text)
}
