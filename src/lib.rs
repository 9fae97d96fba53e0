//! Wordbook
//!
//! A five-letter word guessing game with a bag of probabilistic hint books and
//! a multi-round campaign against increasingly difficult enemies.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordbook::core::{Evaluation, Word};
//!
//! let guess = Word::new("later").unwrap();
//! let answer = Word::new("water").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &answer);
//! println!("{}", evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Hint books, modifiers and the bookbag
pub mod books;

// Rounds, sessions and the front-end seam
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;

pub use error::GameError;
