//! Seam between the game core and whatever displays it
//!
//! The core hands out immutable snapshots and events, and asks for raw input
//! lines. How they are shown or gathered is up to the implementor.

use super::enemy::Enemy;
use crate::books::Book;
use crate::core::GuessState;
use crate::error::GameError;
use crate::wordlists::Tier;

/// A held book as the front end should show it
#[derive(Debug, Clone, Copy)]
pub struct BagEntry<'a> {
    pub book: &'a Book,
    /// Effective trigger chance including every bonus
    pub chance: f64,
    /// `Some(true)` once used this round; `None` when usage is not tracked
    pub used_this_round: Option<bool>,
}

/// Immutable snapshot of a round for rendering
#[derive(Debug, Clone)]
pub struct RoundView<'a> {
    /// 1-based round number
    pub round: usize,
    pub total_rounds: usize,
    pub enemy: Option<Enemy>,
    pub state: &'a GuessState,
    pub last_book_used: Option<&'a Book>,
    pub triggered: Option<bool>,
    pub bag: Vec<BagEntry<'a>>,
    pub global_trigger_bonus: f64,
    pub max_attempts: usize,
}

/// Things that happened which the front end may want to report
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    RoundStarted {
        round: usize,
        total: usize,
        enemy: Option<Enemy>,
        tier: Tier,
    },
    BookResolved {
        book: String,
        triggered: bool,
    },
    NoBookUsed,
    /// Malformed input; the same question is asked again
    InvalidInput(GameError),
    /// A valid number that matched nothing; treated as no selection
    SelectionIgnored(GameError),
    RoundWon {
        answer: String,
        attempts: usize,
    },
    RoundLost {
        answer: String,
    },
    NoRewardsAvailable,
    BookAdded {
        book: String,
    },
    BookRemoved {
        book: String,
    },
    /// The reward could not be stored and was lost
    RewardForfeited {
        book: String,
    },
    SessionWon {
        rounds: usize,
    },
}

/// The question an input line answers
#[derive(Debug, Clone)]
pub enum Prompt<'a> {
    /// Yes/no: use a book this attempt?
    UseBook,
    /// 1-based pick among books usable right now
    SelectBook(Vec<&'a Book>),
    /// A 5-letter guess
    Guess { attempt: usize, max_attempts: usize },
    /// 1-based pick among offered rewards
    Reward(Vec<&'a Book>),
    /// 1-based pick of a held book to drop for the reward
    Evict(Vec<&'a Book>),
}

/// Render sink plus line source
pub trait GameInterface {
    /// Show the current state of the round
    fn render(&mut self, view: &RoundView<'_>);

    /// Report an event
    fn announce(&mut self, event: &GameEvent);

    /// Read one line answering `prompt`; `None` when input is exhausted
    fn read_line(&mut self, prompt: &Prompt<'_>) -> Option<String>;
}
