//! Single-round state machine
//!
//! A round moves through `AwaitingBookDecision -> AwaitingGuess` on every
//! attempt and lands in `Continuing`, `Won` or `Lost` after each guess.
//! Evaluation happens synchronously inside `submit_guess`.

use crate::books::{Book, BookId, Bookbag};
use crate::core::{Evaluation, GuessState, RoundState, Word};
use crate::error::GameError;
use rand::Rng;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Books are available; waiting for a use/skip decision
    AwaitingBookDecision,
    AwaitingGuess,
    /// The last guess neither won nor exhausted the attempts
    Continuing,
    Won,
    Lost,
}

/// Which held books were already used this round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundBookUsage(FxHashMap<BookId, bool>);

impl RoundBookUsage {
    /// Every held book starts unused
    #[must_use]
    pub fn new(held: &[BookId]) -> Self {
        Self(held.iter().map(|&id| (id, false)).collect())
    }

    #[must_use]
    pub fn is_used(&self, id: BookId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    pub fn mark_used(&mut self, id: BookId) {
        self.0.insert(id, true);
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    state: RoundState,
    max_attempts: usize,
    usage: Option<RoundBookUsage>,
    phase: RoundPhase,
    last_book_used: Option<BookId>,
    triggered: Option<bool>,
}

impl Round {
    /// Start a round; `usage` is `None` when books may be reused every attempt
    #[must_use]
    pub fn new(
        answer: Word,
        global_trigger_bonus: f64,
        max_attempts: usize,
        usage: Option<RoundBookUsage>,
    ) -> Self {
        Self {
            state: RoundState::new(answer, global_trigger_bonus),
            max_attempts,
            usage,
            phase: RoundPhase::AwaitingGuess,
            last_book_used: None,
            triggered: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub const fn guess_state(&self) -> &GuessState {
        &self.state.guess
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.state.answer
    }

    #[must_use]
    pub const fn global_trigger_bonus(&self) -> f64 {
        self.state.global_trigger_bonus
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub const fn usage(&self) -> Option<&RoundBookUsage> {
        self.usage.as_ref()
    }

    #[must_use]
    pub const fn last_book_used(&self) -> Option<BookId> {
        self.last_book_used
    }

    #[must_use]
    pub const fn triggered(&self) -> Option<bool> {
        self.triggered
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, RoundPhase::Won | RoundPhase::Lost)
    }

    /// Held books that may be used right now
    ///
    /// Empty before the first guess and, when usage is tracked, without the
    /// books already used this round.
    #[must_use]
    pub fn eligible_books(&self, bag: &Bookbag) -> Vec<BookId> {
        if self.state.guess.attempts_used == 0 {
            return Vec::new();
        }
        bag.list()
            .iter()
            .copied()
            .filter(|&id| !self.usage.as_ref().is_some_and(|usage| usage.is_used(id)))
            .collect()
    }

    /// Reset per-attempt bookkeeping and decide whether to offer a book
    pub fn begin_attempt(&mut self, bag: &Bookbag) -> RoundPhase {
        self.state.guess.active_effects.clear();
        self.last_book_used = None;
        self.triggered = None;

        self.phase = if self.eligible_books(bag).is_empty() {
            RoundPhase::AwaitingGuess
        } else {
            RoundPhase::AwaitingBookDecision
        };
        self.phase
    }

    /// Skip the book decision for this attempt
    pub fn decline_book(&mut self) {
        if self.phase == RoundPhase::AwaitingBookDecision {
            self.phase = RoundPhase::AwaitingGuess;
        }
    }

    /// Use a book: roll its trigger and apply the effect on success
    ///
    /// The use is consumed whether or not the effect fires.
    pub fn use_book<R: Rng + ?Sized>(&mut self, book: &Book, rng: &mut R) -> bool {
        debug_assert_eq!(self.phase, RoundPhase::AwaitingBookDecision);

        let triggered = book.roll(self.state.global_trigger_bonus, rng);
        if triggered {
            book.effect().apply(&mut self.state, rng);
        }

        if let Some(usage) = self.usage.as_mut() {
            usage.mark_used(book.id());
        }
        self.last_book_used = Some(book.id());
        self.triggered = Some(triggered);
        self.phase = RoundPhase::AwaitingGuess;
        triggered
    }

    /// Validate, evaluate and record a guess
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidGuess` for input that is not five letters;
    /// no attempt is consumed.
    pub fn submit_guess(&mut self, input: &str) -> Result<RoundPhase, GameError> {
        if self.is_over() {
            return Ok(self.phase);
        }

        let guess = Word::new(input.trim())?;
        let evaluation = Evaluation::calculate(&guess, &self.state.answer);
        self.state.guess.record(guess, evaluation);

        self.phase = if self.state.guess.is_solved(&self.state.answer) {
            RoundPhase::Won
        } else if self.state.guess.attempts_used >= self.max_attempts {
            RoundPhase::Lost
        } else {
            RoundPhase::Continuing
        };
        Ok(self.phase)
    }
}
