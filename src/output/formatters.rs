//! Formatting utilities for terminal output

use crate::books::Book;
use crate::core::GuessState;
use std::collections::BTreeSet;

/// Revealed letters spaced out, with `_` for unknown positions
#[must_use]
pub fn format_revealed(state: &GuessState) -> String {
    state
        .current_guess
        .iter()
        .map(|slot| slot.map_or('_', char::from).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sorted letters joined by commas, or `[none]`
#[must_use]
pub fn format_letter_set(letters: &BTreeSet<u8>) -> String {
    if letters.is_empty() {
        return "[none]".to_string();
    }
    letters
        .iter()
        .map(|&letter| char::from(letter).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A probability as a whole percentage
#[must_use]
pub fn format_percent(chance: f64) -> String {
    format!("{:.0}%", chance * 100.0)
}

/// One numbered line of a book menu
#[must_use]
pub fn format_book_choice(index: usize, book: &Book) -> String {
    format!("{}. {} - {}", index + 1, book.name(), book.description())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
