//! Per-letter guess evaluation
//!
//! Each guess position is classified against the answer:
//! - Exact: same letter in the same position
//! - Present: the letter occurs somewhere in the answer
//! - Absent: the letter does not occur in the answer
//!
//! Presence is decided by membership alone, so repeated letters in a guess are
//! all marked present when the answer holds the letter at least once.

use super::word::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterClass {
    Exact,
    Present,
    Absent,
}

/// Feedback for a whole guess, one class per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([LetterClass; WORD_LENGTH]);

impl Evaluation {
    /// Classify every letter of `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordbook::core::{Evaluation, LetterClass, Word};
    ///
    /// let guess = Word::new("later").unwrap();
    /// let answer = Word::new("water").unwrap();
    /// let evaluation = Evaluation::calculate(&guess, &answer);
    ///
    /// assert_eq!(evaluation.class_at(0), LetterClass::Absent);
    /// assert_eq!(evaluation.count_exact(), 4);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut classes = [LetterClass::Absent; WORD_LENGTH];

        for (i, class) in classes.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *class = if letter == answer.char_at(i) {
                LetterClass::Exact
            } else if answer.has_letter(letter) {
                LetterClass::Present
            } else {
                LetterClass::Absent
            };
        }

        Self(classes)
    }

    /// Classes in position order
    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[LetterClass; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn class_at(&self, position: usize) -> LetterClass {
        self.0[position]
    }

    /// Check if every letter was an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&class| class == LetterClass::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterClass::Exact)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterClass::Present)
    }

    fn count(&self, wanted: LetterClass) -> usize {
        self.0.iter().filter(|&&class| class == wanted).count()
    }

    /// Convert the evaluation to an emoji string like "⬜🟩🟩🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|class| match class {
                LetterClass::Exact => '🟩',
                LetterClass::Present => '🟨',
                LetterClass::Absent => '⬜',
            })
            .collect()
    }
}
