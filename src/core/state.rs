//! Mutable per-round guessing state
//!
//! `GuessState` is what the player has learned so far; `RoundState` bundles it
//! with the answer and the session's trigger bonus so book effects have a single
//! value to transform.

use super::evaluation::{Evaluation, LetterClass};
use super::word::{WORD_LENGTH, Word};
use std::collections::BTreeSet;

/// Knowledge accumulated during one round
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuessState {
    /// Revealed letters by position; `None` is an unrevealed placeholder
    pub current_guess: [Option<u8>; WORD_LENGTH],
    /// Submitted guesses with their feedback, oldest first
    pub guess_history: Vec<(Word, Evaluation)>,
    /// Letters known to be in the answer
    pub correct_letters: BTreeSet<u8>,
    /// Letters known to be absent from the answer
    pub incorrect_letters: BTreeSet<u8>,
    pub attempts_used: usize,
    /// Descriptions of effects applied during the current attempt
    pub active_effects: Vec<String>,
}

impl GuessState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an evaluated guess into the state
    ///
    /// Exact letters are revealed in `current_guess`, exact and present letters
    /// join `correct_letters`, absent letters join `incorrect_letters`. The guess
    /// is appended to the history and consumes one attempt.
    pub fn record(&mut self, guess: Word, evaluation: Evaluation) {
        for (i, class) in evaluation.classes().iter().enumerate() {
            let letter = guess.char_at(i);
            match class {
                LetterClass::Exact => {
                    self.current_guess[i] = Some(letter);
                    self.correct_letters.insert(letter);
                }
                LetterClass::Present => {
                    self.correct_letters.insert(letter);
                }
                LetterClass::Absent => {
                    self.incorrect_letters.insert(letter);
                }
            }
        }

        debug_assert!(
            self.correct_letters.is_disjoint(&self.incorrect_letters),
            "a letter was classified both present and absent"
        );

        self.guess_history.push((guess, evaluation));
        self.attempts_used += 1;
    }

    /// Reveal the answer's letter at `position`
    pub fn reveal(&mut self, answer: &Word, position: usize) {
        self.current_guess[position] = Some(answer.char_at(position));
    }

    /// Check whether every position is revealed and spells the answer
    #[must_use]
    pub fn is_solved(&self, answer: &Word) -> bool {
        self.current_guess
            .iter()
            .zip(answer.chars())
            .all(|(revealed, &letter)| *revealed == Some(letter))
    }

    /// The revealed word with `_` placeholders, e.g. "_ATER"
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.current_guess
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }
}

/// Everything a book effect may read or change
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    pub answer: Word,
    pub guess: GuessState,
    /// Session-wide bonus added to every book's trigger chance
    pub global_trigger_bonus: f64,
}

impl RoundState {
    #[must_use]
    pub fn new(answer: Word, global_trigger_bonus: f64) -> Self {
        Self {
            answer,
            guess: GuessState::new(),
            global_trigger_bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn submit(state: &mut GuessState, guess: &str, answer: &Word) {
        let guess = word(guess);
        let evaluation = Evaluation::calculate(&guess, answer);
        state.record(guess, evaluation);
    }

    #[test]
    fn later_reveals_ater() {
        let answer = word("water");
        let mut state = GuessState::new();
        submit(&mut state, "later", &answer);

        assert_eq!(state.revealed_text(), "_ATER");
        assert_eq!(state.attempts_used, 1);
        assert_eq!(state.guess_history.len(), 1);
        assert!(state.incorrect_letters.contains(&b'L'));
        for letter in *b"ATER" {
            assert!(state.correct_letters.contains(&letter));
        }
        assert!(!state.is_solved(&answer));
    }

    #[test]
    fn every_letter_in_exactly_one_set() {
        let answer = word("plant");
        let mut state = GuessState::new();
        for guess in ["storm", "grape", "lemon", "apple", "plant"] {
            submit(&mut state, guess, &answer);
        }

        assert!(state.correct_letters.is_disjoint(&state.incorrect_letters));
        for (guess, _) in &state.guess_history {
            for &letter in guess.chars() {
                let in_correct = state.correct_letters.contains(&letter);
                let in_incorrect = state.incorrect_letters.contains(&letter);
                assert!(in_correct ^ in_incorrect, "letter {}", letter as char);
            }
        }
    }

    #[test]
    fn current_guess_only_holds_answer_letters() {
        let answer = word("flame");
        let mut state = GuessState::new();
        submit(&mut state, "plant", &answer);
        submit(&mut state, "flock", &answer);

        for (i, slot) in state.current_guess.iter().enumerate() {
            if let Some(letter) = slot {
                assert_eq!(*letter, answer.char_at(i));
            }
        }
        assert_eq!(state.revealed_text(), "FLA__");
    }

    #[test]
    fn solved_by_exact_guess() {
        let answer = word("storm");
        let mut state = GuessState::new();
        submit(&mut state, "storm", &answer);
        assert!(state.is_solved(&answer));
    }

    #[test]
    fn solved_by_combining_reveals_and_guesses() {
        let answer = word("water");
        let mut state = GuessState::new();
        state.reveal(&answer, 0);
        submit(&mut state, "later", &answer);
        assert!(state.is_solved(&answer));
    }

    #[test]
    fn round_state_starts_empty() {
        let state = RoundState::new(word("grape"), 0.1);
        assert_eq!(state.guess.revealed_text(), "_____");
        assert_eq!(state.guess.attempts_used, 0);
        assert!((state.global_trigger_bonus - 0.1).abs() < f64::EPSILON);
    }
}
