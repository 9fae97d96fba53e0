//! Interactive console mode
//!
//! Line-based front end over any `BufRead`: stdin for the binary, an
//! in-memory cursor for tests.

use crate::error::GameError;
use crate::game::{GameEvent, GameInterface, Prompt, RoundView, Session, SessionConfig, SessionOutcome};
use crate::output::{print_event, print_prompt, print_round_view};
use crate::wordlists::WordBank;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::io::{self, BufRead, Write};

pub struct ConsoleInterface<R: BufRead> {
    input: R,
    clear_screen: bool,
    /// Lines consumed so far
    lines_read: usize,
}

impl<R: BufRead> ConsoleInterface<R> {
    #[must_use]
    pub const fn new(input: R, clear_screen: bool) -> Self {
        Self {
            input,
            clear_screen,
            lines_read: 0,
        }
    }

    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.lines_read
    }

    fn clear(&self) {
        if !self.clear_screen {
            return;
        }
        if let Err(e) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
            log::debug!("could not clear the screen: {e}");
        }
    }
}

impl<R: BufRead> GameInterface for ConsoleInterface<R> {
    fn render(&mut self, view: &RoundView<'_>) {
        self.clear();
        print_round_view(view);
    }

    fn announce(&mut self, event: &GameEvent) {
        print_event(event);
    }

    fn read_line(&mut self, prompt: &Prompt<'_>) -> Option<String> {
        print_prompt(prompt);
        if let Err(e) = io::stdout().flush() {
            log::debug!("could not flush stdout: {e}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                self.lines_read += 1;
                Some(line.trim().to_string())
            }
            Err(e) => {
                log::warn!("failed to read input: {e}");
                None
            }
        }
    }
}

/// Run one interactive session against `input`
///
/// # Errors
///
/// Returns an error if the session cannot be configured, the word bank lacks
/// a needed tier, or input ends before the session is over.
pub fn run_play<R: BufRead, G: Rng>(
    config: SessionConfig,
    bank: &WordBank,
    rng: G,
    input: R,
    clear_screen: bool,
) -> Result<SessionOutcome, GameError> {
    let mut session = Session::new(config, bank, rng)?;
    let mut console = ConsoleInterface::new(input, clear_screen);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordbook - Guess the Word                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let outcome = session.run(&mut console);
    log::debug!("session read {} input line(s)", console.lines_read());
    outcome
}
