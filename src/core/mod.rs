//! Core domain types for the word game
//!
//! Words, guess evaluation and the per-round guessing state.
//! All types here are pure and deterministic; randomness lives in the layers above.

mod evaluation;
mod state;
mod word;

pub use evaluation::{Evaluation, LetterClass};
pub use state::{GuessState, RoundState};
pub use word::{WORD_LENGTH, Word, WordError};
