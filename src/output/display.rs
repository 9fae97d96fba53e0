//! Display functions for game state and command results

use super::formatters::{create_progress_bar, format_book_choice, format_letter_set, format_percent, format_revealed};
use crate::books::Library;
use crate::commands::SimulationResult;
use crate::core::{Evaluation, LetterClass, Word};
use crate::game::{GameEvent, Prompt, RoundView, SessionOutcome};
use colored::Colorize;

/// A guess with each letter colored by its class
fn colored_guess(word: &Word, evaluation: &Evaluation) -> String {
    word.chars()
        .iter()
        .zip(evaluation.classes())
        .map(|(&letter, class)| {
            let tile = format!(" {} ", char::from(letter));
            match class {
                LetterClass::Exact => tile.black().on_green().bold().to_string(),
                LetterClass::Present => tile.black().on_yellow().bold().to_string(),
                LetterClass::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Print the board, the known letters and the bookbag
pub fn print_round_view(view: &RoundView<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    match view.enemy {
        Some(enemy) => println!(
            " {} {}  {} {}",
            "ROUND".bright_cyan().bold(),
            format!("{}/{}", view.round, view.total_rounds).bright_yellow().bold(),
            "vs".bright_black(),
            enemy.name().bright_red().bold()
        ),
        None => println!(" {}", "CLASSIC GAME".bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());

    println!("\nGuess the 5-letter word!");
    println!(
        "Current Guess: {}   ({}/{} attempts used)",
        format_revealed(view.state).bright_white().bold(),
        view.state.attempts_used,
        view.max_attempts
    );

    println!("\nGuess History:");
    if view.state.guess_history.is_empty() {
        println!("  {}", "[none]".bright_black());
    }
    for (i, (word, evaluation)) in view.state.guess_history.iter().enumerate() {
        println!(
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(word, evaluation),
            evaluation.to_emoji()
        );
    }

    println!();
    println!("[O] | {}", format_letter_set(&view.state.correct_letters).green());
    println!("[X] | {}", format_letter_set(&view.state.incorrect_letters).red());

    if !view.state.active_effects.is_empty() {
        println!("\n{}", "Active Effects:".bright_magenta().bold());
        for effect in &view.state.active_effects {
            println!("- {effect}");
        }
    }

    if let Some(book) = view.last_book_used {
        println!("\nBook Used: {}", book.name().bright_white().bold());
        match view.triggered {
            Some(true) => println!("The effect of '{}' was applied!", book.name()),
            _ => println!("The effect of '{}' did not trigger.", book.name()),
        }
    }

    println!("\n{}", "Your Bookbag:".bright_cyan().bold());
    if view.bag.is_empty() {
        println!("  {}", "Your bookbag is empty.".bright_black());
    }
    for (i, entry) in view.bag.iter().enumerate() {
        let status = match entry.used_this_round {
            Some(true) => " (used)".bright_black().to_string(),
            _ => String::new(),
        };
        println!(
            "  {}. {} [{}]{}",
            i + 1,
            entry.book.name(),
            format_percent(entry.chance).bright_yellow(),
            status
        );
    }
    if view.global_trigger_bonus > 0.0 {
        println!(
            "  Global trigger bonus: {}",
            format!("+{}", format_percent(view.global_trigger_bonus)).green()
        );
    }
    println!();
}

/// Print a session event
pub fn print_event(event: &GameEvent) {
    match event {
        GameEvent::RoundStarted {
            round,
            total,
            enemy,
            tier,
        } => {
            let foe = enemy.map_or_else(String::new, |e| format!(" against the {e}"));
            println!(
                "\n⚔️  {}",
                format!("Round {round} of {total}{foe} ({tier} word)").bright_cyan().bold()
            );
        }
        GameEvent::BookResolved { book, triggered } => {
            if *triggered {
                println!("{}", format!("✨ The effect of '{book}' has been applied!").green());
            } else {
                println!("{}", format!("💨 The effect of '{book}' did not trigger.").yellow());
            }
        }
        GameEvent::NoBookUsed => println!("No book used this turn."),
        GameEvent::InvalidInput(e) => println!("{}", format!("❌ {e}").red()),
        GameEvent::SelectionIgnored(e) => {
            println!("{}", format!("❌ {e}. Nothing was selected.").red());
        }
        GameEvent::RoundWon { answer, attempts } => {
            println!(
                "\n{}",
                format!(
                    "🎉 Congratulations! You've guessed the word '{answer}' in {attempts} {}!",
                    if *attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameEvent::RoundLost { answer } => {
            println!(
                "\n{}",
                format!("💀 Game Over! The correct word was '{answer}'.").red().bold()
            );
        }
        GameEvent::NoRewardsAvailable => println!("No new books are available."),
        GameEvent::BookAdded { book } => {
            println!("{}", format!("📖 You have added '{book}' to your bookbag.").green());
        }
        GameEvent::BookRemoved { book } => {
            println!("You have removed '{book}' from your bookbag.");
        }
        GameEvent::RewardForfeited { book } => {
            println!("{}", format!("Your bookbag is full. '{book}' was left behind.").yellow());
        }
        GameEvent::SessionWon { rounds } => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!("    🏆  V I C T O R Y !  All {rounds} rounds cleared  🏆")
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
    }
}

/// Print the question for a prompt; the answer is typed on the same line
pub fn print_prompt(prompt: &Prompt<'_>) {
    match prompt {
        Prompt::UseBook => print!("Would you like to use a book from your bookbag? (Y/N): "),
        Prompt::SelectBook(books) => {
            println!("Choose a book to use:");
            for (i, book) in books.iter().enumerate() {
                println!("  {}", format_book_choice(i, book));
            }
            print!("Enter the number of the book to use: ");
        }
        Prompt::Guess {
            attempt,
            max_attempts,
        } => print!("Enter your guess ({attempt}/{max_attempts}): "),
        Prompt::Reward(books) => {
            println!("\n{}", "Choose one of the following books as your reward:".bright_cyan());
            for (i, book) in books.iter().enumerate() {
                println!("  {}", format_book_choice(i, book));
            }
            print!("Enter the number of the book you want: ");
        }
        Prompt::Evict(books) => {
            println!("{}", "Your bookbag is full. Select a book to remove:".yellow());
            for (i, book) in books.iter().enumerate() {
                println!("  {}", format_book_choice(i, book));
            }
            print!("Enter the number of the book to remove: ");
        }
    }
}

/// Print the final outcome of a session
pub fn print_session_outcome(outcome: &SessionOutcome) {
    match outcome {
        SessionOutcome::Victory { rounds } => {
            println!("\n{} after {rounds} round(s).", "Session won".bright_green().bold());
        }
        SessionOutcome::Defeat { round, answer } => {
            println!(
                "\n{} in round {round} (the word was {}).",
                "Session lost".red().bold(),
                answer.bright_yellow()
            );
        }
    }
}

/// Print every book in the library
pub fn print_catalog(library: &Library) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOOK CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for book in library.iter() {
        println!(
            "\n  {} {}",
            book.name().bright_white().bold(),
            format!("({})", book.slug()).bright_black()
        );
        println!("    {}", book.description());
        println!(
            "    Trigger chance: {}",
            format_percent(book.trigger_chance(0.0)).bright_yellow()
        );
        for modifier in book.modifiers() {
            println!(
                "    Modifier: {} ({:+.0}%)",
                modifier.name,
                modifier.trigger_chance_bonus * 100.0
            );
        }
    }
    println!();
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Sessions played:  {}", result.sessions);
    println!(
        "   Victories:        {} ({})",
        result.victories.to_string().green(),
        format_percent(result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Rounds cleared:   {:.2} of {} on average",
        result.average_rounds_cleared, result.total_rounds
    );
    println!("   Guesses made:     {}", result.guesses);
    println!(
        "   Books used:       {} ({} triggered, {})",
        result.books_used,
        result.books_triggered,
        format_percent(result.trigger_rate())
    );
    if result.errors > 0 {
        println!("   Errors:           {}", result.errors.to_string().red());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Sessions/second:  {:.1}", result.sessions_per_second);

    println!("\n📈 {}", "Rounds cleared:".bright_cyan().bold());
    for cleared in 0..=result.total_rounds {
        if let Some(&count) = result.rounds_cleared.get(&cleared) {
            let pct = (count as f64 / result.sessions as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {cleared:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }
}
