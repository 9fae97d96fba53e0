//! Books and trigger-chance modifiers

use super::effect::Effect;
use rand::Rng;
use std::fmt;
use std::rc::Rc;

/// Identity of a book within a library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub usize);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Additive adjustment to a book's trigger chance
///
/// Shared between books through `Rc`; the bonus may be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub name: String,
    pub trigger_chance_bonus: f64,
}

impl Modifier {
    #[must_use]
    pub fn new(name: impl Into<String>, trigger_chance_bonus: f64) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            trigger_chance_bonus,
        })
    }
}

/// A reusable probabilistic hint
#[derive(Debug, Clone)]
pub struct Book {
    id: BookId,
    slug: String,
    name: String,
    description: String,
    base_trigger_chance: f64,
    effect: Effect,
    modifiers: Vec<Rc<Modifier>>,
}

impl Book {
    #[must_use]
    pub fn new(
        id: BookId,
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        base_trigger_chance: f64,
        effect: Effect,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
            base_trigger_chance,
            effect,
            modifiers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// Short command-line name, e.g. `reveal-first`
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn base_trigger_chance(&self) -> f64 {
        self.base_trigger_chance
    }

    #[must_use]
    pub const fn effect(&self) -> Effect {
        self.effect
    }

    #[must_use]
    pub fn modifiers(&self) -> &[Rc<Modifier>] {
        &self.modifiers
    }

    pub fn attach_modifier(&mut self, modifier: Rc<Modifier>) {
        self.modifiers.push(modifier);
    }

    /// Probability that using this book fires its effect
    ///
    /// `base + sum(modifier bonuses) + global_bonus`, clamped to `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use wordbook::books::{Book, BookId, Effect};
    ///
    /// let book = Book::new(BookId(0), "reveal-first", "Reveal First Position", "", 0.4, Effect::RevealFirst);
    /// assert!((book.trigger_chance(0.1) - 0.5).abs() < 1e-9);
    /// assert_eq!(book.trigger_chance(5.0), 1.0);
    /// ```
    #[must_use]
    pub fn trigger_chance(&self, global_bonus: f64) -> f64 {
        let modifier_bonus: f64 = self
            .modifiers
            .iter()
            .map(|modifier| modifier.trigger_chance_bonus)
            .sum();

        (self.base_trigger_chance + modifier_bonus + global_bonus).clamp(0.0, 1.0)
    }

    /// Roll a uniform draw in `[0, 1)` against this book's trigger chance
    pub fn roll<R: Rng + ?Sized>(&self, global_bonus: f64, rng: &mut R) -> bool {
        let chance = self.trigger_chance(global_bonus);
        let draw: f64 = rng.random();
        let triggered = resolve_trigger(draw, chance);
        log::debug!(
            "book '{}' rolled {draw:.4} against {chance:.4}: {}",
            self.name,
            if triggered { "triggered" } else { "missed" }
        );
        triggered
    }
}

/// A draw triggers when it is at or below the chance; the boundary counts
#[inline]
#[must_use]
pub fn resolve_trigger(draw: f64, chance: f64) -> bool {
    draw <= chance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal_first() -> Book {
        Book::new(
            BookId(0),
            "reveal-first",
            "Reveal First Position",
            "40% chance to reveal the first letter of the answer.",
            0.4,
            Effect::RevealFirst,
        )
    }

    #[test]
    fn trigger_boundary_is_inclusive() {
        let book = reveal_first();
        let chance = book.trigger_chance(0.0);

        assert!(resolve_trigger(0.4, chance));
        assert!(!resolve_trigger(0.4001, chance));
        assert!(resolve_trigger(0.0, chance));
    }

    #[test]
    fn trigger_chance_adds_modifiers_and_global_bonus() {
        let mut book = reveal_first();
        book.attach_modifier(Modifier::new("Sharp Quill", 0.1));
        book.attach_modifier(Modifier::new("Dog-eared", -0.05));

        let chance = book.trigger_chance(0.05);
        assert!((chance - 0.5).abs() < 1e-9);
    }

    #[test]
    fn trigger_chance_is_clamped() {
        let mut book = reveal_first();
        assert!((book.trigger_chance(0.9) - 1.0).abs() < f64::EPSILON);

        book.attach_modifier(Modifier::new("Curse", -2.0));
        assert!(book.trigger_chance(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trigger_chance_monotonic_in_bonuses() {
        let mut book = reveal_first();
        let mut previous = book.trigger_chance(0.0);

        for step in 1..=30 {
            let chance = book.trigger_chance(f64::from(step) * 0.05);
            assert!(chance >= previous);
            assert!(chance <= 1.0);
            previous = chance;
        }

        let mut previous = book.trigger_chance(0.0);
        for _ in 0..30 {
            book.attach_modifier(Modifier::new("Bookmark", 0.05));
            let chance = book.trigger_chance(0.0);
            assert!(chance >= previous);
            assert!(chance <= 1.0);
            previous = chance;
        }
    }

    #[test]
    fn shared_modifier_applies_to_every_holder() {
        let shared = Modifier::new("Library Card", 0.2);
        let mut first = reveal_first();
        let mut second = reveal_first();
        first.attach_modifier(Rc::clone(&shared));
        second.attach_modifier(Rc::clone(&shared));

        assert_eq!(Rc::strong_count(&shared), 3);
        assert!((first.trigger_chance(0.0) - 0.6).abs() < 1e-9);
        assert!((second.trigger_chance(0.0) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn certain_book_always_rolls_true() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let book = Book::new(BookId(4), "boost", "Boost", "", 1.0, Effect::GlobalTriggerBoost);
        let mut rng = StdRng::seed_from_u64(99);
        assert!((0..500).all(|_| book.roll(0.0, &mut rng)));
    }
}
