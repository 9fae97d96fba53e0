//! Session configuration

use crate::books::{BAG_CAPACITY, EvictionPolicy};
use crate::wordlists::Tier;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;

/// Campaign length when none (or nonsense) is given
pub const DEFAULT_ROUNDS: usize = 8;

/// Which variant of the game a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One round against a fixed tier; books may be reused every attempt
    Classic { tier: Tier },
    /// A run of rounds against the enemy ladder; each book once per round
    Campaign { rounds: usize },
}

impl Default for GameMode {
    fn default() -> Self {
        Self::Campaign {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub max_attempts: usize,
    pub bag_capacity: usize,
    pub eviction: EvictionPolicy,
    /// Book names or slugs placed in the bag before the first round
    pub starting_books: Vec<String>,
    /// `(book name or slug, bonus)` modifiers attached before the first round
    pub modifiers: Vec<(String, f64)>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            max_attempts: MAX_ATTEMPTS,
            bag_capacity: BAG_CAPACITY,
            eviction: EvictionPolicy::default(),
            starting_books: Vec::new(),
            modifiers: Vec::new(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn classic(tier: Tier) -> Self {
        Self {
            mode: GameMode::Classic { tier },
            ..Self::default()
        }
    }

    #[must_use]
    pub fn campaign(rounds: usize) -> Self {
        Self {
            mode: GameMode::Campaign { rounds },
            ..Self::default()
        }
    }

    /// Number of rounds the session will play at most
    #[must_use]
    pub const fn rounds(&self) -> usize {
        match self.mode {
            GameMode::Classic { .. } => 1,
            GameMode::Campaign { rounds } => rounds,
        }
    }

    /// Whether each book may only be used once per round
    #[must_use]
    pub const fn tracks_book_usage(&self) -> bool {
        matches!(self.mode, GameMode::Campaign { .. })
    }
}

/// Parse a round count, falling back to `DEFAULT_ROUNDS`
///
/// Absent, non-numeric and zero inputs all yield the default.
///
/// # Examples
/// ```
/// use wordbook::game::parse_rounds;
///
/// assert_eq!(parse_rounds(Some("3")), 3);
/// assert_eq!(parse_rounds(Some("lots")), 8);
/// assert_eq!(parse_rounds(None), 8);
/// ```
#[must_use]
pub fn parse_rounds(input: Option<&str>) -> usize {
    match input.map(str::trim).map(str::parse::<usize>) {
        Some(Ok(rounds)) if rounds > 0 => rounds,
        Some(_) => {
            log::warn!("invalid round count, using {DEFAULT_ROUNDS}");
            DEFAULT_ROUNDS
        }
        None => DEFAULT_ROUNDS,
    }
}
