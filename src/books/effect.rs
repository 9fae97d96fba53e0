//! Book effects
//!
//! Each effect is a transformation of the `RoundState` that returns the tag the
//! front end shows under "Active Effects".

use crate::core::{RoundState, WORD_LENGTH};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Permanent increase to every book's trigger chance per boost
pub const GLOBAL_TRIGGER_INCREMENT: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Reveal the answer's first letter
    RevealFirst,
    /// Reveal the answer's last letter
    RevealLast,
    /// Reveal the answer's middle letter
    RevealMiddle,
    /// Mark one of the answer's vowels as present
    SpotRandomVowel,
    /// Raise the session-wide trigger bonus
    GlobalTriggerBoost,
}

impl Effect {
    /// Apply the effect and record its tag in `active_effects`
    ///
    /// Returns the tag, or `None` when the effect had nothing to act on
    /// (a vowel spot on an answer without vowels).
    pub fn apply<R: Rng + ?Sized>(self, state: &mut RoundState, rng: &mut R) -> Option<String> {
        let tag = match self {
            Self::RevealFirst => {
                state.guess.reveal(&state.answer, 0);
                "Reveal First Position".to_string()
            }
            Self::RevealLast => {
                state.guess.reveal(&state.answer, WORD_LENGTH - 1);
                "Reveal Last Position".to_string()
            }
            Self::RevealMiddle => {
                state.guess.reveal(&state.answer, WORD_LENGTH / 2);
                "Reveal Middle Position".to_string()
            }
            Self::SpotRandomVowel => {
                let vowel = *state.answer.vowels().choose(rng)?;
                state.guess.correct_letters.insert(vowel);
                format!("Spot Random Vowel: {}", char::from(vowel))
            }
            Self::GlobalTriggerBoost => {
                state.global_trigger_bonus += GLOBAL_TRIGGER_INCREMENT;
                "Global Trigger Chance Increased by 5%".to_string()
            }
        };

        state.guess.active_effects.push(tag.clone());
        Some(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(answer: &str) -> RoundState {
        RoundState::new(Word::new(answer).unwrap(), 0.0)
    }

    #[test]
    fn reveal_positions() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = round("water");

        Effect::RevealFirst.apply(&mut state, &mut rng);
        assert_eq!(state.guess.revealed_text(), "W____");

        Effect::RevealLast.apply(&mut state, &mut rng);
        assert_eq!(state.guess.revealed_text(), "W___R");

        Effect::RevealMiddle.apply(&mut state, &mut rng);
        assert_eq!(state.guess.revealed_text(), "W_T_R");

        assert_eq!(
            state.guess.active_effects,
            vec![
                "Reveal First Position",
                "Reveal Last Position",
                "Reveal Middle Position"
            ]
        );
    }

    #[test]
    fn spot_vowel_marks_answer_vowel() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = round("storm");

        let tag = Effect::SpotRandomVowel.apply(&mut state, &mut rng);
        assert_eq!(tag.as_deref(), Some("Spot Random Vowel: O"));
        assert!(state.guess.correct_letters.contains(&b'O'));
    }

    #[test]
    fn spot_vowel_without_vowels_is_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = round("glyph");

        assert_eq!(Effect::SpotRandomVowel.apply(&mut state, &mut rng), None);
        assert!(state.guess.correct_letters.is_empty());
        assert!(state.guess.active_effects.is_empty());
    }

    #[test]
    fn spot_vowel_weights_duplicates() {
        // AGAPE's vowel multiset is {A, A, E}
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 6000;
        let mut a_count = 0;

        for _ in 0..draws {
            let mut state = round("agape");
            Effect::SpotRandomVowel.apply(&mut state, &mut rng);
            if state.guess.correct_letters.contains(&b'A') {
                a_count += 1;
            }
        }

        let ratio = f64::from(a_count) / f64::from(draws);
        assert!((ratio - 2.0 / 3.0).abs() < 0.03, "A ratio {ratio}");
    }

    #[test]
    fn global_boost_accumulates() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = round("lemon");

        Effect::GlobalTriggerBoost.apply(&mut state, &mut rng);
        Effect::GlobalTriggerBoost.apply(&mut state, &mut rng);

        assert!((state.global_trigger_bonus - 0.10).abs() < 1e-9);
        assert_eq!(state.guess.active_effects.len(), 2);
    }
}
