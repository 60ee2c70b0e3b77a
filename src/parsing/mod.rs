//! Turning raw input into the letter stream used for statistics.
//!
//! - [`input`]: Acquire ciphertext from a file, stdin, an argument, or an
//!   interactive prompt
//! - [`normalize`]: Uppercase and keep only letters of the reference alphabet
//!
//! ## Example
//!
//! ```rust
//! use freq_solver::catalog::store::ReferenceTable;
//! use freq_solver::parsing::normalize::normalize;
//!
//! let table = ReferenceTable::load_embedded().unwrap();
//! let letters = normalize("¡Hola, niño!", &table);
//! assert_eq!(letters.len(), 8);
//! ```

pub mod input;
pub mod normalize;
