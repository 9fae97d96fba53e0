//! Tiered word bank
//!
//! Answers are drawn uniformly from a difficulty tier. Enemies pick the tier
//! first, using their weighted tier table.

use super::embedded::{EASY, HARD, MEDIUM};
use super::loader::words_from_slice;
use crate::core::Word;
use crate::error::GameError;
use crate::game::Enemy;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Difficulty bucket of candidate answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Word lists partitioned by tier
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    tiers: FxHashMap<Tier, Vec<Word>>,
}

impl WordBank {
    /// An empty bank; every selection fails until tiers are added
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank built from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new()
            .with_tier(Tier::Easy, words_from_slice(EASY))
            .with_tier(Tier::Medium, words_from_slice(MEDIUM))
            .with_tier(Tier::Hard, words_from_slice(HARD))
    }

    /// Bank that serves the same custom list for every tier
    #[must_use]
    pub fn uniform(words: Vec<Word>) -> Self {
        Tier::ALL
            .into_iter()
            .fold(Self::new(), |bank, tier| bank.with_tier(tier, words.clone()))
    }

    /// Replace the word list for a tier
    #[must_use]
    pub fn with_tier(mut self, tier: Tier, words: Vec<Word>) -> Self {
        self.tiers.insert(tier, words);
        self
    }

    /// Words configured for a tier, if any
    #[must_use]
    pub fn words(&self, tier: Tier) -> Option<&[Word]> {
        self.tiers.get(&tier).map(Vec::as_slice)
    }

    /// Every word in the bank, tier by tier
    pub fn all_words(&self) -> impl Iterator<Item = &Word> {
        Tier::ALL
            .into_iter()
            .filter_map(|tier| self.tiers.get(&tier))
            .flatten()
    }

    /// Draw a word uniformly from a tier
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTier` if the tier has no words.
    pub fn select_word<R: Rng + ?Sized>(&self, tier: Tier, rng: &mut R) -> Result<&Word, GameError> {
        self.tiers
            .get(&tier)
            .and_then(|words| words.choose(rng))
            .ok_or(GameError::InvalidTier(tier))
    }

    /// Draw a tier from the enemy's weight table, then a word from that tier
    ///
    /// A tier is chosen with probability `weight / sum(weights)`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidTier` if the drawn tier has no words.
    pub fn select_word_for_enemy<R: Rng + ?Sized>(
        &self,
        enemy: Enemy,
        rng: &mut R,
    ) -> Result<(Tier, &Word), GameError> {
        let tier = draw_tier(enemy.tier_weights(), rng)?;
        let word = self.select_word(tier, rng)?;
        Ok((tier, word))
    }
}

/// Weighted choice over a `(tier, weight)` table
///
/// # Errors
///
/// Returns `GameError::InvalidTier` for an empty or all-zero table.
fn draw_tier<R: Rng + ?Sized>(weights: &[(Tier, u32)], rng: &mut R) -> Result<Tier, GameError> {
    weights
        .choose_weighted(rng, |&(_, weight)| weight)
        .map(|&(tier, _)| tier)
        .map_err(|_| GameError::InvalidTier(weights.first().map_or(Tier::Easy, |&(tier, _)| tier)))
}
