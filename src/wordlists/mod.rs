//! Word lists and the tiered word bank
//!
//! Provides embedded per-tier word lists compiled into the binary and the
//! `WordBank` that draws answers from them.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{Tier, WordBank};
pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn tiers_are_valid_words() {
        for &word in EASY.iter().chain(MEDIUM).chain(HARD) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn tiers_do_not_overlap() {
        let easy: std::collections::HashSet<_> = EASY.iter().collect();
        for word in MEDIUM.iter().chain(HARD) {
            assert!(!easy.contains(word), "'{word}' appears in two tiers");
        }
    }

    #[test]
    fn tiers_are_not_empty() {
        assert!(EASY_COUNT > 0);
        assert!(MEDIUM_COUNT > 0);
        assert!(HARD_COUNT > 0);
    }
}
