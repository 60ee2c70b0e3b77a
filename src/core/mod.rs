//! Core data types for frequency-based substitution solving.
//!
//! - [`Letter`]: A single uppercase alphabetic symbol
//! - [`ObservedFrequencies`]: Letter percentages measured in a ciphertext
//! - [`SubstitutionMap`]: Injective cipher → plain letter mapping, and the
//!   routine that applies it to text
//! - [`AnalysisError`]: The "no letters to analyze" outcome
//!
//! [`Letter`]: types::Letter
//! [`ObservedFrequencies`]: frequencies::ObservedFrequencies
//! [`SubstitutionMap`]: substitution::SubstitutionMap
//! [`AnalysisError`]: frequencies::AnalysisError

pub mod frequencies;
pub mod substitution;
pub mod types;
