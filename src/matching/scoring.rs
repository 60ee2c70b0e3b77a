use crate::core::substitution::SubstitutionMap;

/// Safely convert usize to f64 for averaging
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Distance between an observed and a reference percentage
#[inline]
#[must_use]
pub fn frequency_distance(observed: f64, reference: f64) -> f64 {
    (observed - reference).abs()
}

/// How closely the chosen substitution follows the reference table
///
/// Purely descriptive: it reports on the greedy assignment, it does not
/// influence it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSummary {
    /// Mean absolute percentage difference over all assignments
    pub mean_abs_difference: f64,

    /// Largest absolute percentage difference of any assignment
    pub max_abs_difference: f64,

    /// Observed letters that received a plaintext letter
    pub mapped_letters: usize,

    /// Observed letters left without a plaintext letter
    pub unmapped_letters: usize,
}

impl FitSummary {
    /// Summarize `map`, given how many distinct letters were observed
    #[must_use]
    pub fn calculate(map: &SubstitutionMap, distinct_letters: usize) -> Self {
        let differences: Vec<f64> = map.assignments().iter().map(|a| a.difference()).collect();

        let mean_abs_difference = if differences.is_empty() {
            0.0
        } else {
            differences.iter().sum::<f64>() / count_to_f64(differences.len())
        };

        let max_abs_difference = differences.iter().copied().fold(0.0, f64::max);

        Self {
            mean_abs_difference,
            max_abs_difference,
            mapped_letters: map.len(),
            unmapped_letters: distinct_letters.saturating_sub(map.len()),
        }
    }
}
