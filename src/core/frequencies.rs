use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::types::Letter;

/// Helper function to convert usize count to f64 with explicit precision loss allowance
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The cleaned ciphertext is empty; there is nothing to count.
    #[error("ciphertext contains no letters to analyze")]
    NoLetters,
}

/// Letter frequencies measured in a normalized ciphertext
///
/// Percentages are relative to the total number of letters, so they sum to
/// 100 (within floating-point tolerance). The value is built once per
/// analysis and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedFrequencies {
    /// Raw occurrence count per letter
    counts: BTreeMap<Letter, usize>,

    /// Percentage of total letters per letter
    percentages: BTreeMap<Letter, f64>,

    /// Number of letters in the normalized text
    total: usize,
}

impl ObservedFrequencies {
    /// Count the letters of a normalized sequence.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoLetters`] when `letters` is empty.
    pub fn from_letters(letters: &[Letter]) -> Result<Self, AnalysisError> {
        if letters.is_empty() {
            return Err(AnalysisError::NoLetters);
        }

        let mut counts: BTreeMap<Letter, usize> = BTreeMap::new();
        for &letter in letters {
            *counts.entry(letter).or_default() += 1;
        }

        let total = letters.len();
        let percentages = counts
            .iter()
            .map(|(&letter, &count)| {
                (letter, count_to_f64(count) / count_to_f64(total) * 100.0)
            })
            .collect();

        Ok(Self {
            counts,
            percentages,
            total,
        })
    }

    /// Percentage of `letter`, if it occurs at all
    #[must_use]
    pub fn percentage(&self, letter: Letter) -> Option<f64> {
        self.percentages.get(&letter).copied()
    }

    #[must_use]
    pub fn count(&self, letter: Letter) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total_letters(&self) -> usize {
        self.total
    }

    /// Number of distinct letters observed
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.percentages.len()
    }

    /// Iterate `(letter, percentage)` in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (Letter, f64)> + '_ {
        self.percentages.iter().map(|(&l, &p)| (l, p))
    }

    /// Letters ordered by descending percentage.
    ///
    /// Equal percentages are ordered alphabetically, which makes the
    /// processing order of the matcher independent of hashing or insertion.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Letter, f64)> {
        let mut ranked: Vec<(Letter, f64)> = self.iter().collect();
        // Stable sort over an alphabetical sequence keeps ties alphabetical
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Sum of all percentages (≈100)
    #[must_use]
    pub fn percentage_sum(&self) -> f64 {
        self.percentages.values().sum()
    }
}
