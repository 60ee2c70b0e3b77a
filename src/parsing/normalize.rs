use crate::catalog::store::ReferenceTable;
use crate::core::types::Letter;

/// Reduce raw ciphertext to the letters used for statistics.
///
/// The text is uppercased, then every character that is not a letter of the
/// reference table's alphabet is dropped: digits, punctuation, whitespace,
/// and accented letters the table does not list (`É`, `Ü`, ...).
#[must_use]
pub fn normalize(text: &str, table: &ReferenceTable) -> Vec<Letter> {
    text.to_uppercase()
        .chars()
        .filter_map(Letter::new)
        .filter(|&letter| table.contains(letter))
        .collect()
}
