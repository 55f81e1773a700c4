//! Word representation
//!
//! A Word stores a normalized (uppercase) word along with its letters for
//! position-by-position comparison. Any non-empty length is accepted; the
//! secret word decides how long guesses must be.

use super::FrequencyCounter;
use std::fmt;
use thiserror::Error;

/// A normalized, non-empty alphabetic word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacters(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - It contains a non-alphabetic character
    ///
    /// # Examples
    /// ```
    /// use wordle_season::core::Word;
    ///
    /// let word = Word::new("great").unwrap();
    /// assert_eq!(word.text(), "GREAT");
    /// assert_eq!(word.letter_count(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("gr8").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters(bad));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// Count each letter of the word
    ///
    /// Used by feedback evaluation so repeated letters are only matched as
    /// often as they actually occur.
    #[must_use]
    pub fn letter_frequencies(&self) -> FrequencyCounter<char> {
        self.letters.iter().copied().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("HOVER").unwrap();
        assert_eq!(word.text(), "HOVER");
        assert_eq!(word.letters(), &['H', 'O', 'V', 'E', 'R']);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("great").unwrap();
        assert_eq!(word.text(), "GREAT");

        let word2 = Word::new("GrEaT").unwrap();
        assert_eq!(word2.text(), "GREAT");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        let word = Word::new("  delta\n").unwrap();
        assert_eq!(word.text(), "DELTA");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().letter_count(), 1);
        assert_eq!(Word::new("elephant").unwrap().letter_count(), 8);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("gr3at"), Err(WordError::InvalidCharacters('3')));
        assert!(Word::new("gr at").is_err());
        assert!(Word::new("great!").is_err());
    }

    #[test]
    fn word_letter_count_counts_chars_not_bytes() {
        let word = Word::new("über").unwrap();
        assert_eq!(word.text(), "ÜBER");
        assert_eq!(word.letter_count(), 4);
    }

    #[test]
    fn word_letter_frequencies() {
        let word = Word::new("groom").unwrap();
        let counts = word.letter_frequencies();
        assert_eq!(counts.count('O'), 2);
        assert_eq!(counts.count('G'), 1);
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display() {
        let word = Word::new("watch").unwrap();
        assert_eq!(format!("{word}"), "WATCH");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("bloom").unwrap();
        let word2 = Word::new("BLOOM").unwrap();
        let word3 = Word::new("broom").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
