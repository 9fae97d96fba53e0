//! Word representation
//!
//! A Word stores a 5-letter uppercase word along with a letter mask for membership checks.

use std::fmt;

/// Number of letters in every answer and guess
pub const WORD_LENGTH: usize = 5;

const VOWELS: &[u8] = b"AEIOU";

/// A 5-letter word, canonicalised to uppercase
///
/// Used both for secret answers and for submitted guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    /// Bit `n` set when letter `A + n` appears
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored form is uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordbook::core::Word;
    ///
    /// let word = Word::new("water").unwrap();
    /// assert_eq!(word.text(), "WATER");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        // Unicode case mapping can change length, so validate the raw text first
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        let letters = chars
            .iter()
            .fold(0u32, |mask, &ch| mask | (1 << (ch - b'A')));

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && (self.letters & (1 << (letter - b'A'))) != 0
    }

    /// Every vowel in the word, in position order, duplicates kept
    #[must_use]
    pub fn vowels(&self) -> Vec<u8> {
        self.chars
            .iter()
            .copied()
            .filter(|ch| VOWELS.contains(ch))
            .collect()
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
        let word = Word::new("WATER").unwrap();
        assert_eq!(word.text(), "WATER");
        assert_eq!(word.chars(), b"WATER");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("water").unwrap();
        assert_eq!(word.text(), "WATER");

        let word2 = Word::new("WaTeR").unwrap();
        assert_eq!(word2.text(), "WATER");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("wat3r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wat r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wat!r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wätr"), Err(WordError::NonAscii));
    }

    #[test]
    fn case_mapping_cannot_repair_bad_input() {
        // Both would uppercase to five ASCII letters
        assert_eq!(Word::new("watß"), Err(WordError::NonAscii));
        assert_eq!(Word::new("lıght"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(2), b'A');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter(b'C'));
        assert!(word.has_letter(b'N'));
        assert!(!word.has_letter(b'c'));
        assert!(!word.has_letter(b'Z'));
        assert!(!word.has_letter(b'1'));

        let word = Word::new("llama").unwrap();
        assert!(word.has_letter(b'L') && word.has_letter(b'M'));
        assert!(!word.has_letter(b'E'));
    }

    #[test]
    fn vowels_keep_duplicates() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.vowels(), vec![b'A', b'E']);

        let word = Word::new("llama").unwrap();
        assert_eq!(word.vowels(), vec![b'A', b'A']);
    }

    #[test]
    fn vowels_empty_for_consonant_words() {
        let word = Word::new("glyph").unwrap();
        assert!(word.vowels().is_empty());
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
