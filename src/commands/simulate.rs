//! Simulate command
//!
//! Plays many seeded campaign sessions with an automatic player and collects
//! statistics about how far they get and how often books fire.

use crate::core::{Evaluation, GuessState, Word};
use crate::error::GameError;
use crate::game::{GameEvent, GameInterface, Prompt, RoundView, Session, SessionConfig, SessionStats};
use crate::wordlists::WordBank;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Plays the game without a human
///
/// Always uses the first eligible book, takes the first reward and evicts the
/// oldest book. Guesses the first word that agrees with everything learned so
/// far.
pub struct AutoPlayer<'a> {
    candidates: &'a [Word],
    knowledge: GuessState,
}

impl<'a> AutoPlayer<'a> {
    #[must_use]
    pub fn new(candidates: &'a [Word]) -> Self {
        Self {
            candidates,
            knowledge: GuessState::new(),
        }
    }

    fn is_consistent(&self, candidate: &Word) -> bool {
        let known = &self.knowledge;
        let guessed_before = known
            .guess_history
            .iter()
            .any(|(guess, _)| guess == candidate);

        !guessed_before
            && known
                .guess_history
                .iter()
                .all(|(guess, evaluation)| Evaluation::calculate(guess, candidate) == *evaluation)
            && known
                .current_guess
                .iter()
                .zip(candidate.chars())
                .all(|(slot, &letter)| slot.is_none_or(|revealed| revealed == letter))
            && known
                .correct_letters
                .iter()
                .all(|&letter| candidate.has_letter(letter))
    }

    /// Next guess text
    #[must_use]
    pub fn next_guess(&self) -> String {
        self.candidates
            .iter()
            .find(|candidate| self.is_consistent(candidate))
            .or_else(|| self.candidates.first())
            .map_or_else(|| "AAAAA".to_string(), |word| word.text().to_string())
    }
}

impl GameInterface for AutoPlayer<'_> {
    fn render(&mut self, view: &RoundView<'_>) {
        self.knowledge = view.state.clone();
    }

    fn announce(&mut self, event: &GameEvent) {
        if let GameEvent::RoundStarted { .. } = event {
            self.knowledge = GuessState::new();
        }
    }

    fn read_line(&mut self, prompt: &Prompt<'_>) -> Option<String> {
        Some(match prompt {
            Prompt::UseBook => "y".to_string(),
            Prompt::SelectBook(_) | Prompt::Reward(_) | Prompt::Evict(_) => "1".to_string(),
            Prompt::Guess { .. } => self.next_guess(),
        })
    }
}

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub sessions: usize,
    /// Session `i` is seeded with `seed + i`
    pub seed: u64,
    pub session: SessionConfig,
    pub show_progress: bool,
}

/// Aggregate results of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub sessions: usize,
    pub victories: usize,
    /// Sessions keyed by rounds cleared
    pub rounds_cleared: FxHashMap<usize, usize>,
    pub total_rounds: usize,
    pub average_rounds_cleared: f64,
    pub guesses: usize,
    pub books_used: usize,
    pub books_triggered: usize,
    /// Sessions that ended with an error instead of an outcome
    pub errors: usize,
    pub duration: Duration,
    pub sessions_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            self.victories as f64 / self.sessions as f64
        }
    }

    /// Fraction of book uses whose effect fired
    #[must_use]
    pub fn trigger_rate(&self) -> f64 {
        if self.books_used == 0 {
            0.0
        } else {
            self.books_triggered as f64 / self.books_used as f64
        }
    }
}

struct SessionRun {
    victory: bool,
    stats: SessionStats,
    failed: bool,
}

fn play_one(bank: &WordBank, candidates: &[Word], config: &SessionConfig, seed: u64) -> Result<SessionRun, GameError> {
    let rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new(config.clone(), bank, rng)?;
    let mut player = AutoPlayer::new(candidates);
    let outcome = session.run(&mut player)?;

    Ok(SessionRun {
        victory: outcome.is_victory(),
        stats: session.stats(),
        failed: false,
    })
}

/// Run `config.sessions` independent sessions in parallel
#[must_use]
pub fn run_simulation(bank: &WordBank, config: &SimulationConfig) -> SimulationResult {
    let mut seen = FxHashSet::default();
    let candidates: Vec<Word> = bank
        .all_words()
        .filter(|word| seen.insert(word.text().to_string()))
        .cloned()
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(config.sessions as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let runs: Vec<SessionRun> = (0..config.sessions)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let run = play_one(bank, &candidates, &config.session, seed).unwrap_or_else(|e| {
                log::warn!("session {i} (seed {seed}) failed: {e}");
                SessionRun {
                    victory: false,
                    stats: SessionStats::default(),
                    failed: true,
                }
            });
            pb.inc(1);
            run
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut rounds_cleared: FxHashMap<usize, usize> = FxHashMap::default();
    for run in &runs {
        *rounds_cleared.entry(run.stats.rounds_won).or_insert(0) += 1;
    }

    let sessions = runs.len();
    let cleared_total: usize = runs.iter().map(|r| r.stats.rounds_won).sum();

    SimulationResult {
        sessions,
        victories: runs.iter().filter(|r| r.victory).count(),
        rounds_cleared,
        total_rounds: config.session.rounds(),
        average_rounds_cleared: if sessions == 0 {
            0.0
        } else {
            cleared_total as f64 / sessions as f64
        },
        guesses: runs.iter().map(|r| r.stats.guesses).sum(),
        books_used: runs.iter().map(|r| r.stats.books_used).sum(),
        books_triggered: runs.iter().map(|r| r.stats.books_triggered).sum(),
        errors: runs.iter().filter(|r| r.failed).count(),
        duration,
        sessions_per_second: sessions as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Tier;
    use crate::wordlists::loader::words_from_slice;

    fn config(sessions: usize, rounds: usize) -> SimulationConfig {
        SimulationConfig {
            sessions,
            seed: 7,
            session: SessionConfig::campaign(rounds),
            show_progress: false,
        }
    }

    #[test]
    fn simulation_runs() {
        let bank = WordBank::embedded();
        let result = run_simulation(&bank, &config(20, 4));

        assert_eq!(result.sessions, 20);
        assert_eq!(result.errors, 0);
        assert!(result.victories <= result.sessions);
        assert!(result.books_triggered <= result.books_used);
        assert!(result.average_rounds_cleared <= 4.0);
        assert!(result.guesses > 0);
    }

    #[test]
    fn distribution_sums_to_sessions() {
        let bank = WordBank::embedded();
        let result = run_simulation(&bank, &config(15, 3));

        let total: usize = result.rounds_cleared.values().sum();
        assert_eq!(total, result.sessions);
        assert!(result.rounds_cleared.keys().all(|&cleared| cleared <= 3));
        assert_eq!(result.rounds_cleared.get(&3).copied().unwrap_or(0), result.victories);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let bank = WordBank::embedded();
        let a = run_simulation(&bank, &config(10, 3));
        let b = run_simulation(&bank, &config(10, 3));

        assert_eq!(a.victories, b.victories);
        assert_eq!(a.guesses, b.guesses);
        assert_eq!(a.books_used, b.books_used);
        assert_eq!(a.rounds_cleared, b.rounds_cleared);
    }

    #[test]
    fn single_word_bank_always_wins() {
        let bank = WordBank::uniform(words_from_slice(&["water"]));
        let result = run_simulation(&bank, &config(5, 8));

        assert_eq!(result.victories, 5);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
        // Every round is won on the first guess, so no book is ever offered
        assert_eq!(result.books_used, 0);
        assert_eq!(result.guesses, 40);
    }

    #[test]
    fn configuration_errors_are_counted() {
        let bank = WordBank::new().with_tier(Tier::Easy, words_from_slice(&["water"]));
        let sim = SimulationConfig {
            session: SessionConfig::classic(Tier::Hard),
            ..config(3, 1)
        };
        let result = run_simulation(&bank, &sim);
        assert_eq!(result.errors, 3);
        assert_eq!(result.victories, 0);
    }

    #[test]
    fn empty_simulation() {
        let bank = WordBank::embedded();
        let result = run_simulation(&bank, &config(0, 3));
        assert_eq!(result.sessions, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.trigger_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn auto_player_respects_feedback() {
        let candidates = words_from_slice(&["later", "lemon", "water"]);
        let answer = Word::new("water").unwrap();
        let mut player = AutoPlayer::new(&candidates);

        assert_eq!(player.next_guess(), "LATER");
        let guess = candidates[0].clone();
        let evaluation = Evaluation::calculate(&guess, &answer);
        player.knowledge.record(guess, evaluation);

        // LEMON contradicts LATER's feedback; WATER does not
        assert_eq!(player.next_guess(), "WATER");
    }

    #[test]
    fn auto_player_answers_every_prompt() {
        let candidates = words_from_slice(&["water"]);
        let mut player = AutoPlayer::new(&candidates);

        assert_eq!(player.read_line(&Prompt::UseBook).as_deref(), Some("y"));
        assert_eq!(player.read_line(&Prompt::Reward(Vec::new())).as_deref(), Some("1"));
        assert_eq!(
            player
                .read_line(&Prompt::Guess {
                    attempt: 1,
                    max_attempts: 6
                })
                .as_deref(),
            Some("WATER")
        );
    }
}
