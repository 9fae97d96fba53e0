//! Game error taxonomy
//!
//! Validation errors are recovered locally by re-prompting, selection errors
//! mean "nothing was selected", and configuration errors end the session.

use crate::core::WordError;
use crate::wordlists::Tier;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A guess was not five ASCII letters
    InvalidGuess(WordError),
    /// A selection or count was not a number
    NotANumber(String),
    /// A 1-based selection fell outside the offered choices
    SelectionOutOfRange { selection: usize, available: usize },
    /// No words are configured for the requested tier
    InvalidTier(Tier),
    /// The bookbag has no free slot
    BagFull { capacity: usize },
    /// No book matches the given name or id
    UnknownBook(String),
    /// The input source was closed before the session finished
    InputClosed,
}

impl GameError {
    /// Whether the state machine recovers by asking again
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidGuess(_) | Self::NotANumber(_))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(e) => write!(f, "Invalid guess: {e}"),
            Self::NotANumber(input) => write!(f, "'{input}' is not a number"),
            Self::SelectionOutOfRange {
                selection,
                available,
            } => write!(
                f,
                "Selection {selection} is out of range (choose 1-{available})"
            ),
            Self::InvalidTier(tier) => write!(f, "No words configured for tier '{tier}'"),
            Self::BagFull { capacity } => {
                write!(f, "Bookbag is full ({capacity} books)")
            }
            Self::UnknownBook(name) => write!(f, "Unknown book '{name}'"),
            Self::InputClosed => write!(f, "Input closed before the game finished"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidGuess(e)
    }
}
