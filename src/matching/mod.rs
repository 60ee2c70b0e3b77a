//! Frequency-proximity matching and decoding.
//!
//! - [`FrequencySolver`]: Main entry point; normalizes, counts, matches and
//!   applies the substitution to produce a [`Decoding`]
//! - [`ProximityMatcher`]: The greedy nearest-frequency assignment
//! - [`FitSummary`]: Descriptive statistics of a finished substitution
//!
//! ## Matching Algorithm
//!
//! 1. **Rank**: Observed letters are sorted by descending percentage; equal
//!    percentages are taken in alphabetical order
//! 2. **Scan**: Each letter looks at every unclaimed reference letter, in
//!    table order, and keeps the one with the smallest absolute difference
//!    (the first one on a tie)
//! 3. **Claim**: The chosen reference letter leaves the pool for good
//!
//! If the pool runs dry, the remaining cipher letters stay unmapped and pass
//! through unchanged.
//!
//! ## Example
//!
//! ```rust
//! use freq_solver::{FrequencySolver, ReferenceTable};
//!
//! let table = ReferenceTable::load_embedded().unwrap();
//! let solver = FrequencySolver::new(&table);
//!
//! let decoding = solver.solve("AAAA BBBB").unwrap();
//! assert_eq!(decoding.text, "EEEE AAAA");
//!
//! for a in decoding.substitution.assignments() {
//!     println!("{} -> {} ({:.2}% vs {:.2}%)", a.cipher, a.plain, a.observed, a.reference);
//! }
//! ```

pub mod engine;
pub mod scoring;
