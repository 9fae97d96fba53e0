//! Multi-round session orchestration
//!
//! A `Session` owns everything that persists across rounds: the library, the
//! bookbag, the global trigger bonus and the random source. It drives each
//! round's state machine through a `GameInterface` and hands out rewards
//! between rounds.

use super::config::{GameMode, SessionConfig};
use super::enemy::{Enemy, EnemySequence};
use super::input::{parse_selection, parse_yes_no};
use super::interface::{BagEntry, GameEvent, GameInterface, Prompt, RoundView};
use super::round::{Round, RoundBookUsage, RoundPhase};
use crate::books::{Book, BookId, Bookbag, EvictionPolicy, Library};
use crate::core::Word;
use crate::error::GameError;
use crate::wordlists::{Tier, WordBank};
use rand::Rng;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every round was won
    Victory { rounds: usize },
    /// A round was lost; later rounds never ran
    Defeat { round: usize, answer: String },
}

impl SessionOutcome {
    #[must_use]
    pub const fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}

/// Counters collected while a session runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_won: usize,
    pub guesses: usize,
    pub books_used: usize,
    pub books_triggered: usize,
}

pub struct Session<'a, R: Rng> {
    config: SessionConfig,
    bank: &'a WordBank,
    library: Library,
    bag: Bookbag,
    enemies: EnemySequence,
    global_trigger_bonus: f64,
    stats: SessionStats,
    rng: R,
}

impl<'a, R: Rng> Session<'a, R> {
    /// Build a session with the standard library
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownBook` if a configured book or modifier
    /// target is not in the library, and `GameError::BagFull` if more
    /// starting books are configured than the bag holds.
    pub fn new(config: SessionConfig, bank: &'a WordBank, rng: R) -> Result<Self, GameError> {
        Self::with_library(config, bank, Library::standard(), rng)
    }

    /// Build a session around a caller-supplied library
    ///
    /// # Errors
    ///
    /// Same as [`Session::new`].
    pub fn with_library(
        config: SessionConfig,
        bank: &'a WordBank,
        mut library: Library,
        rng: R,
    ) -> Result<Self, GameError> {
        for (name, bonus) in &config.modifiers {
            library.attach_named_modifier(name, *bonus)?;
        }

        let mut bag = Bookbag::with_capacity(config.bag_capacity);
        for name in &config.starting_books {
            let id = library
                .find(name)
                .map(Book::id)
                .ok_or_else(|| GameError::UnknownBook(name.clone()))?;
            if bag.contains(id) {
                log::warn!("book '{name}' listed twice, ignoring the duplicate");
                continue;
            }
            bag.add(id)?;
        }

        let enemies = match config.mode {
            GameMode::Campaign { rounds } => EnemySequence::for_rounds(rounds),
            GameMode::Classic { .. } => EnemySequence::default(),
        };

        log::info!(
            "session ready: {} round(s), {} starting book(s), eviction {:?}",
            config.rounds(),
            bag.len(),
            config.eviction
        );

        Ok(Self {
            config,
            bank,
            library,
            bag,
            enemies,
            global_trigger_bonus: 0.0,
            stats: SessionStats::default(),
            rng,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    #[must_use]
    pub const fn bag(&self) -> &Bookbag {
        &self.bag
    }

    #[must_use]
    pub const fn enemies(&self) -> &EnemySequence {
        &self.enemies
    }

    #[must_use]
    pub const fn global_trigger_bonus(&self) -> f64 {
        self.global_trigger_bonus
    }

    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Play rounds until one is lost or all are won
    ///
    /// # Errors
    ///
    /// Returns `GameError::InputClosed` when the interface runs out of input,
    /// and `GameError::InvalidTier` when the word bank cannot supply a word.
    pub fn run(&mut self, ui: &mut dyn GameInterface) -> Result<SessionOutcome, GameError> {
        let total = self.config.rounds();

        for number in 1..=total {
            let enemy = self.enemies.get(number - 1);
            let (tier, answer) = self.pick_answer(enemy)?;
            log::info!("round {number}/{total}: tier {tier}, enemy {enemy:?}");
            log::debug!("answer for round {number} is {answer}");

            ui.announce(&GameEvent::RoundStarted {
                round: number,
                total,
                enemy,
                tier,
            });

            let round = self.play_round(number, enemy, answer, ui)?;
            if round.phase() == RoundPhase::Lost {
                log::info!("session lost in round {number}");
                return Ok(SessionOutcome::Defeat {
                    round: number,
                    answer: round.answer().text().to_string(),
                });
            }

            self.stats.rounds_won += 1;
            self.grant_reward(ui)?;
        }

        log::info!("session won after {total} round(s)");
        ui.announce(&GameEvent::SessionWon { rounds: total });
        Ok(SessionOutcome::Victory { rounds: total })
    }

    fn pick_answer(&mut self, enemy: Option<Enemy>) -> Result<(Tier, Word), GameError> {
        let bank = self.bank;
        match (enemy, self.config.mode) {
            (Some(enemy), _) => {
                let (tier, word) = bank.select_word_for_enemy(enemy, &mut self.rng)?;
                Ok((tier, word.clone()))
            }
            (None, GameMode::Classic { tier }) => {
                Ok((tier, bank.select_word(tier, &mut self.rng)?.clone()))
            }
            (None, GameMode::Campaign { .. }) => {
                Ok((Tier::Easy, bank.select_word(Tier::Easy, &mut self.rng)?.clone()))
            }
        }
    }

    /// Run one round to completion and carry its trigger bonus back out
    fn play_round(
        &mut self,
        number: usize,
        enemy: Option<Enemy>,
        answer: Word,
        ui: &mut dyn GameInterface,
    ) -> Result<Round, GameError> {
        let usage = self
            .config
            .tracks_book_usage()
            .then(|| RoundBookUsage::new(self.bag.list()));
        let mut round = Round::new(
            answer,
            self.global_trigger_bonus,
            self.config.max_attempts,
            usage,
        );

        loop {
            ui.render(&self.view(&round, number, enemy));

            if round.begin_attempt(&self.bag) == RoundPhase::AwaitingBookDecision
                && self.offer_book(&mut round, ui)?
            {
                ui.render(&self.view(&round, number, enemy));
            }

            match self.read_guess(&mut round, ui)? {
                RoundPhase::Won => {
                    ui.render(&self.view(&round, number, enemy));
                    ui.announce(&GameEvent::RoundWon {
                        answer: round.answer().text().to_string(),
                        attempts: round.guess_state().attempts_used,
                    });
                    break;
                }
                RoundPhase::Lost => {
                    ui.render(&self.view(&round, number, enemy));
                    ui.announce(&GameEvent::RoundLost {
                        answer: round.answer().text().to_string(),
                    });
                    break;
                }
                _ => {}
            }
        }

        self.global_trigger_bonus = round.global_trigger_bonus();
        Ok(round)
    }

    /// Ask whether to use a book and resolve it; `true` if one was used
    fn offer_book(&mut self, round: &mut Round, ui: &mut dyn GameInterface) -> Result<bool, GameError> {
        let answer = ui.read_line(&Prompt::UseBook).ok_or(GameError::InputClosed)?;
        if !parse_yes_no(&answer) {
            round.decline_book();
            ui.announce(&GameEvent::NoBookUsed);
            return Ok(false);
        }

        let eligible: Vec<&Book> = round
            .eligible_books(&self.bag)
            .into_iter()
            .filter_map(|id| self.library.get(id))
            .collect();

        let Some(index) = choose(ui, &Prompt::SelectBook(eligible.clone()), eligible.len())? else {
            round.decline_book();
            ui.announce(&GameEvent::NoBookUsed);
            return Ok(false);
        };

        let book = eligible[index];
        let chance = book.trigger_chance(round.global_trigger_bonus());
        let triggered = round.use_book(book, &mut self.rng);
        log::info!(
            "used '{}' (chance {chance:.2}): {}",
            book.name(),
            if triggered { "triggered" } else { "missed" }
        );

        self.stats.books_used += 1;
        if triggered {
            self.stats.books_triggered += 1;
        }
        ui.announce(&GameEvent::BookResolved {
            book: book.name().to_string(),
            triggered,
        });
        Ok(true)
    }

    fn read_guess(&mut self, round: &mut Round, ui: &mut dyn GameInterface) -> Result<RoundPhase, GameError> {
        loop {
            let prompt = Prompt::Guess {
                attempt: round.guess_state().attempts_used + 1,
                max_attempts: round.max_attempts(),
            };
            let line = ui.read_line(&prompt).ok_or(GameError::InputClosed)?;

            match round.submit_guess(&line) {
                Ok(phase) => {
                    self.stats.guesses += 1;
                    return Ok(phase);
                }
                Err(e) => {
                    log::debug!("rejected guess {:?}: {e}", line.trim());
                    ui.announce(&GameEvent::InvalidInput(e));
                }
            }
        }
    }

    /// Offer up to two unheld books and store the chosen one
    fn grant_reward(&mut self, ui: &mut dyn GameInterface) -> Result<Option<BookId>, GameError> {
        let offers = self.bag.reward_offers(&self.library, &mut self.rng);
        if offers.is_empty() {
            ui.announce(&GameEvent::NoRewardsAvailable);
            return Ok(None);
        }

        let books: Vec<&Book> = offers
            .iter()
            .filter_map(|&id| self.library.get(id))
            .collect();
        let Some(index) = choose(ui, &Prompt::Reward(books.clone()), books.len())? else {
            log::debug!("no reward selected");
            return Ok(None);
        };

        let id = books[index].id();
        self.store_reward(id, ui)
    }

    /// Put a reward in the bag, evicting per the configured policy when full
    fn store_reward(&mut self, id: BookId, ui: &mut dyn GameInterface) -> Result<Option<BookId>, GameError> {
        let name = self
            .library
            .get(id)
            .map(|book| book.name().to_string())
            .ok_or_else(|| GameError::UnknownBook(id.to_string()))?;

        if self.bag.is_full() {
            // A zero-capacity bag is full with nothing to evict
            let slot = match self.config.eviction {
                EvictionPolicy::Reject => None,
                _ if self.bag.is_empty() => None,
                EvictionPolicy::Oldest => Some(0),
                EvictionPolicy::Prompt => {
                    let held: Vec<&Book> = self
                        .bag
                        .list()
                        .iter()
                        .filter_map(|&held| self.library.get(held))
                        .collect();
                    choose(ui, &Prompt::Evict(held.clone()), held.len())?
                }
            };

            let Some(slot) = slot else {
                log::info!("bag full, reward '{name}' forfeited");
                ui.announce(&GameEvent::RewardForfeited { book: name });
                return Ok(None);
            };

            let removed = self.bag.remove_at(slot)?;
            let removed_name = self
                .library
                .get(removed)
                .map_or_else(|| removed.to_string(), |book| book.name().to_string());
            log::info!("evicted '{removed_name}' for '{name}'");
            ui.announce(&GameEvent::BookRemoved { book: removed_name });
        }

        self.bag.add(id)?;
        log::info!("added '{name}' to the bag ({}/{})", self.bag.len(), self.bag.capacity());
        ui.announce(&GameEvent::BookAdded { book: name });
        Ok(Some(id))
    }

    fn view<'s>(&'s self, round: &'s Round, number: usize, enemy: Option<Enemy>) -> RoundView<'s> {
        let bag = self
            .bag
            .list()
            .iter()
            .filter_map(|&id| self.library.get(id))
            .map(|book| BagEntry {
                book,
                chance: book.trigger_chance(round.global_trigger_bonus()),
                used_this_round: round.usage().map(|usage| usage.is_used(book.id())),
            })
            .collect();

        RoundView {
            round: number,
            total_rounds: self.config.rounds(),
            enemy,
            state: round.guess_state(),
            last_book_used: round.last_book_used().and_then(|id| self.library.get(id)),
            triggered: round.triggered(),
            bag,
            global_trigger_bonus: round.global_trigger_bonus(),
            max_attempts: round.max_attempts(),
        }
    }
}

/// Read a 1-based selection, re-prompting on non-numbers
///
/// Out-of-range numbers are announced and yield `None`.
fn choose(ui: &mut dyn GameInterface, prompt: &Prompt<'_>, available: usize) -> Result<Option<usize>, GameError> {
    loop {
        let line = ui.read_line(prompt).ok_or(GameError::InputClosed)?;
        match parse_selection(&line, available) {
            Ok(index) => return Ok(Some(index)),
            Err(e) if e.is_validation() => ui.announce(&GameEvent::InvalidInput(e)),
            Err(e) => {
                ui.announce(&GameEvent::SelectionIgnored(e));
                return Ok(None);
            }
        }
    }
}
