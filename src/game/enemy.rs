//! Enemies and the campaign's enemy sequence
//!
//! Each enemy carries a weighted table over word tiers. The sequence for a
//! campaign is derived from the round count alone, ramping from the weakest
//! enemy to the strongest.

use crate::wordlists::Tier;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enemy {
    Slime,
    Goblin,
    Orc,
    Troll,
    Dragon,
}

impl Enemy {
    /// Weakest first
    pub const ALL: [Self; 5] = [
        Self::Slime,
        Self::Goblin,
        Self::Orc,
        Self::Troll,
        Self::Dragon,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Slime => "Slime",
            Self::Goblin => "Goblin",
            Self::Orc => "Orc",
            Self::Troll => "Troll",
            Self::Dragon => "Dragon",
        }
    }

    /// Relative weight of each tier when this enemy picks a word
    #[must_use]
    pub const fn tier_weights(self) -> &'static [(Tier, u32)] {
        match self {
            Self::Slime => &[(Tier::Easy, 80), (Tier::Medium, 20)],
            Self::Goblin => &[(Tier::Easy, 50), (Tier::Medium, 40), (Tier::Hard, 10)],
            Self::Orc => &[(Tier::Easy, 20), (Tier::Medium, 60), (Tier::Hard, 20)],
            Self::Troll => &[(Tier::Easy, 10), (Tier::Medium, 40), (Tier::Hard, 50)],
            Self::Dragon => &[(Tier::Medium, 20), (Tier::Hard, 80)],
        }
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered enemies, one per round
///
/// Only the round count is stored; each round's enemy is computed when asked
/// for, so any positive count is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnemySequence {
    rounds: usize,
}

impl EnemySequence {
    /// Spread `rounds` evenly across the enemy ladder
    ///
    /// Round `i` of `n` faces `Enemy::ALL[i * 5 / n]`, so the first round is
    /// always a Slime and long campaigns repeat each enemy a few times.
    ///
    /// # Examples
    /// ```
    /// use wordbook::game::{Enemy, EnemySequence};
    ///
    /// let sequence = EnemySequence::for_rounds(5);
    /// assert!(sequence.iter().eq(Enemy::ALL));
    /// ```
    #[must_use]
    pub const fn for_rounds(rounds: usize) -> Self {
        Self { rounds }
    }

    /// Enemy for the zero-based round `index`, `None` past the end
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Enemy> {
        if index >= self.rounds {
            return None;
        }
        // u128 keeps `index * ladder` from overflowing for huge campaigns
        let ladder = Enemy::ALL.len() as u128;
        let step = index as u128 * ladder / self.rounds as u128;
        usize::try_from(step).ok().and_then(|i| Enemy::ALL.get(i).copied())
    }

    pub fn iter(&self) -> impl Iterator<Item = Enemy> + '_ {
        (0..self.rounds).filter_map(|index| self.get(index))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rounds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_round_sequence() {
        let sequence = EnemySequence::for_rounds(8);
        assert_eq!(
            sequence.iter().collect::<Vec<_>>(),
            [
                Enemy::Slime,
                Enemy::Slime,
                Enemy::Goblin,
                Enemy::Goblin,
                Enemy::Orc,
                Enemy::Troll,
                Enemy::Troll,
                Enemy::Dragon,
            ]
        );
    }

    #[test]
    fn sequence_is_deterministic_and_sized() {
        for rounds in 0..20 {
            let a = EnemySequence::for_rounds(rounds);
            let b = EnemySequence::for_rounds(rounds);
            assert_eq!(a, b);
            assert_eq!(a.len(), rounds);
            assert_eq!(a.iter().count(), rounds);
        }
        assert!(EnemySequence::for_rounds(0).is_empty());
        assert!(EnemySequence::for_rounds(1).iter().eq([Enemy::Slime]));
    }

    #[test]
    fn huge_round_counts_do_not_allocate_or_overflow() {
        let sequence = EnemySequence::for_rounds(usize::MAX);
        assert_eq!(sequence.len(), usize::MAX);
        assert_eq!(sequence.get(0), Some(Enemy::Slime));
        assert_eq!(sequence.get(usize::MAX / 2), Some(Enemy::Orc));
        assert_eq!(sequence.get(usize::MAX - 1), Some(Enemy::Dragon));
        assert_eq!(sequence.get(usize::MAX), None);
    }

    #[test]
    fn sequence_never_gets_easier() {
        let sequence = EnemySequence::for_rounds(13);
        let rank = |enemy: &Enemy| Enemy::ALL.iter().position(|e| e == enemy).unwrap();
        let enemies: Vec<Enemy> = sequence.iter().collect();
        for pair in enemies.windows(2) {
            assert!(rank(&pair[0]) <= rank(&pair[1]));
        }
    }

    #[test]
    fn weight_tables_are_usable() {
        for enemy in Enemy::ALL {
            let total: u32 = enemy.tier_weights().iter().map(|&(_, w)| w).sum();
            assert!(total > 0, "{enemy} has no weight");
        }
    }
}
