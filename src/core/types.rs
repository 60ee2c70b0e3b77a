use serde::{Deserialize, Serialize};

/// A single uppercase alphabetic symbol
///
/// Letters are the keys of every table in the crate (reference frequencies,
/// observed frequencies, and the substitution map). Ordering follows `char`
/// ordering, so `Ñ` sorts after `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Wrap `c` if it is an uppercase alphabetic character.
    ///
    /// # Examples
    ///
    /// ```
    /// use freq_solver::core::types::Letter;
    ///
    /// assert!(Letter::new('E').is_some());
    /// assert!(Letter::new('Ñ').is_some());
    /// assert!(Letter::new('e').is_none());
    /// assert!(Letter::new('4').is_none());
    /// ```
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        if c.is_alphabetic() && c.is_uppercase() {
            Some(Self(c))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidLetter;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(InvalidLetter(c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Pad through the formatter so table columns line up
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Rejected attempt to build a [`Letter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an uppercase letter")]
pub struct InvalidLetter(pub char);
