use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::store::{CatalogError, ReferenceEntry, ReferenceTable};
use crate::core::frequencies::{AnalysisError, ObservedFrequencies};
use crate::core::substitution::{Assignment, SubstitutionMap};
use crate::matching::scoring::{frequency_distance, FitSummary};
use crate::parsing::normalize::normalize;

/// Any failure of the one-call [`decode`](crate::decode) entry point
#[derive(Error, Debug)]
pub enum SolverError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Greedy nearest-frequency matcher
///
/// Cipher letters are visited from most to least frequent. Each one takes the
/// still-unclaimed reference letter whose percentage is closest to its own,
/// and that reference letter is then removed from the pool. This is a
/// heuristic, not a minimum-cost matching: an earlier letter is never asked
/// to give up its choice for a later one.
pub struct ProximityMatcher<'a> {
    table: &'a ReferenceTable,
}

impl<'a> ProximityMatcher<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Build the substitution map for `observed`
    #[must_use]
    pub fn build_map(&self, observed: &ObservedFrequencies) -> SubstitutionMap {
        let mut available: Vec<ReferenceEntry> = self.table.entries().to_vec();
        let mut map = SubstitutionMap::new();

        for (cipher, percentage) in observed.ranked() {
            let Some(index) = nearest_available(&available, percentage) else {
                warn!(
                    cipher = %cipher,
                    "Reference letters exhausted; leaving letter unmapped"
                );
                continue;
            };

            let entry = available.remove(index);
            let assignment = Assignment {
                cipher,
                observed: percentage,
                plain: entry.letter,
                reference: entry.frequency,
            };

            debug!(
                cipher = %cipher,
                plain = %entry.letter,
                observed = percentage,
                reference = entry.frequency,
                "Assigned letter"
            );

            // The pool never holds a claimed letter, so this cannot conflict
            map.insert(assignment);
        }

        map
    }
}

/// Position of the entry closest to `percentage`.
///
/// The scan follows table order and only a strictly smaller distance replaces
/// the current best, so among equally close entries the first one wins.
fn nearest_available(available: &[ReferenceEntry], percentage: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, entry) in available.iter().enumerate() {
        let distance = frequency_distance(percentage, entry.frequency);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

/// Result of solving one ciphertext
#[derive(Debug, Clone)]
pub struct Decoding {
    /// Uppercased ciphertext with the substitution applied
    pub text: String,

    /// Letter percentages measured in the ciphertext
    pub observed: ObservedFrequencies,

    /// The substitution that produced `text`
    pub substitution: SubstitutionMap,

    /// Descriptive statistics of the substitution
    pub fit: FitSummary,
}

/// Normalize, count, match and apply in one pass
pub struct FrequencySolver<'a> {
    table: &'a ReferenceTable,
}

impl<'a> FrequencySolver<'a> {
    pub fn new(table: &'a ReferenceTable) -> Self {
        Self { table }
    }

    /// Decode `ciphertext`
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoLetters`] when the ciphertext contains no
    /// letter of the reference alphabet.
    pub fn solve(&self, ciphertext: &str) -> Result<Decoding, AnalysisError> {
        let letters = normalize(ciphertext, self.table);
        let observed = ObservedFrequencies::from_letters(&letters)?;

        debug!(
            total = observed.total_letters(),
            distinct = observed.distinct_letters(),
            "Counted ciphertext letters"
        );

        let substitution = ProximityMatcher::new(self.table).build_map(&observed);
        let fit = FitSummary::calculate(&substitution, observed.distinct_letters());
        let text = substitution.apply(ciphertext);

        Ok(Decoding {
            text,
            observed,
            substitution,
            fit,
        })
    }
}
