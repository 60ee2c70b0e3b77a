use std::collections::{BTreeMap, BTreeSet};

use crate::core::types::Letter;

/// One ciphertext letter paired with the plaintext letter it decodes to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assignment {
    /// Ciphertext letter
    pub cipher: Letter,

    /// Percentage of `cipher` in the ciphertext
    pub observed: f64,

    /// Plaintext letter chosen from the reference table
    pub plain: Letter,

    /// Reference percentage of `plain`
    pub reference: f64,
}

impl Assignment {
    /// Absolute gap between the observed and reference percentages
    #[must_use]
    pub fn difference(&self) -> f64 {
        (self.observed - self.reference).abs()
    }
}

/// Partial bijection from ciphertext letters to plaintext letters
///
/// Assignments are kept in the order they were made (most frequent cipher
/// letter first). A plaintext letter can be claimed at most once, so the map
/// stays injective no matter how it is populated.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionMap {
    assignments: Vec<Assignment>,
    forward: BTreeMap<Letter, Letter>,
    claimed: BTreeSet<Letter>,
}

impl SubstitutionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an assignment.
    ///
    /// Returns `false`, leaving the map untouched, if either the cipher
    /// letter is already mapped or the plaintext letter is already claimed.
    pub fn insert(&mut self, assignment: Assignment) -> bool {
        if self.forward.contains_key(&assignment.cipher) || self.claimed.contains(&assignment.plain)
        {
            return false;
        }

        self.forward.insert(assignment.cipher, assignment.plain);
        self.claimed.insert(assignment.plain);
        self.assignments.push(assignment);
        true
    }

    /// Plaintext letter for a ciphertext letter
    #[must_use]
    pub fn get(&self, cipher: Letter) -> Option<Letter> {
        self.forward.get(&cipher).copied()
    }

    #[must_use]
    pub fn is_claimed(&self, plain: Letter) -> bool {
        self.claimed.contains(&plain)
    }

    /// Assignments in matching order
    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// No two cipher letters share a plaintext letter
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let images: BTreeSet<Letter> = self.forward.values().copied().collect();
        images.len() == self.forward.len()
    }

    /// Decode `text` with this map.
    ///
    /// The text is uppercased first and then rewritten one character at a
    /// time: mapped letters are replaced, everything else (punctuation,
    /// digits, whitespace, unmapped letters) is copied through. The output
    /// has exactly as many characters as the uppercased input.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        text.to_uppercase()
            .chars()
            .map(|c| {
                Letter::new(c)
                    .and_then(|letter| self.get(letter))
                    .map_or(c, Letter::as_char)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn assignment(cipher: char, plain: char) -> Assignment {
        Assignment {
            cipher: letter(cipher),
            observed: 10.0,
            plain: letter(plain),
            reference: 7.5,
        }
    }

    #[test]
    fn test_insert_rejects_reused_plain_letter() {
        let mut map = SubstitutionMap::new();
        assert!(map.insert(assignment('X', 'E')));
        assert!(!map.insert(assignment('Y', 'E')));
        assert_eq!(map.len(), 1);
        assert!(map.get(letter('Y')).is_none());
        assert!(map.is_injective());
    }

    #[test]
    fn test_insert_rejects_remapped_cipher_letter() {
        let mut map = SubstitutionMap::new();
        assert!(map.insert(assignment('X', 'E')));
        assert!(!map.insert(assignment('X', 'A')));
        assert_eq!(map.get(letter('X')), Some(letter('E')));
        assert!(!map.is_claimed(letter('A')));
    }

    #[test]
    fn test_assignments_keep_insertion_order() {
        let mut map = SubstitutionMap::new();
        map.insert(assignment('Q', 'E'));
        map.insert(assignment('B', 'A'));
        let order: Vec<char> = map.assignments().iter().map(|a| a.cipher.as_char()).collect();
        assert_eq!(order, vec!['Q', 'B']);
    }

    #[test]
    fn test_difference_is_absolute() {
        let a = assignment('X', 'E');
        assert!((a.difference() - 2.5).abs() < 1e-9);

        let b = Assignment {
            reference: 12.5,
            ..a
        };
        assert!((b.difference() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_apply_uppercases_and_passes_through_unmapped() {
        let mut map = SubstitutionMap::new();
        map.insert(assignment('X', 'E'));
        map.insert(assignment('Q', 'L'));

        assert_eq!(map.apply("xq, zq!"), "EL, ZL!");
    }

    #[test]
    fn test_apply_preserves_uppercased_length() {
        let mut map = SubstitutionMap::new();
        map.insert(assignment('S', 'A'));

        for input in ["straße", "ñandú 42", "", "...", "Ss"] {
            let decoded = map.apply(input);
            assert_eq!(
                decoded.chars().count(),
                input.to_uppercase().chars().count(),
                "length changed for {input:?}"
            );
        }
    }

    #[test]
    fn test_apply_with_empty_map_returns_uppercased_text() {
        let map = SubstitutionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.apply("Hola, mundo"), "HOLA, MUNDO");
    }
}
