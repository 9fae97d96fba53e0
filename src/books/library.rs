//! Book catalog
//!
//! The library owns every book a session can hand out. Bookbags and rewards
//! refer to books by `BookId`.

use super::book::{Book, BookId, Modifier};
use super::effect::Effect;
use crate::error::GameError;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// The standard catalog of five hint books
    #[must_use]
    pub fn standard() -> Self {
        let mut library = Self::default();
        library.register(
            "reveal-first",
            "Reveal First Position",
            "40% chance to reveal the first letter of the answer.",
            0.4,
            Effect::RevealFirst,
        );
        library.register(
            "reveal-last",
            "Reveal Last Position",
            "40% chance to reveal the last letter of the answer.",
            0.4,
            Effect::RevealLast,
        );
        library.register(
            "reveal-middle",
            "Reveal Middle Position",
            "40% chance to reveal the middle letter of the answer.",
            0.4,
            Effect::RevealMiddle,
        );
        library.register(
            "spot-vowel",
            "Spot Random Vowel",
            "40% chance to identify a random vowel in the answer.",
            0.4,
            Effect::SpotRandomVowel,
        );
        library.register(
            "trigger-boost",
            "Global Trigger Chance Increase",
            "Permanently increases trigger chance of all books by 5%.",
            1.0,
            Effect::GlobalTriggerBoost,
        );
        library
    }

    /// Add a book and return its id
    pub fn register(
        &mut self,
        slug: &str,
        name: &str,
        description: &str,
        base_trigger_chance: f64,
        effect: Effect,
    ) -> BookId {
        let id = BookId(self.books.len());
        self.books
            .push(Book::new(id, slug, name, description, base_trigger_chance, effect));
        id
    }

    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(id.0)
    }

    /// Look a book up by its slug or its exact name (case-insensitive)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Book> {
        self.books
            .iter()
            .find(|book| book.slug().eq_ignore_ascii_case(name) || book.name().eq_ignore_ascii_case(name))
    }

    pub fn ids(&self) -> impl Iterator<Item = BookId> + '_ {
        self.books.iter().map(Book::id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Attach a shared modifier to a book
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownBook` if `id` is not in this library.
    pub fn attach_modifier(&mut self, id: BookId, modifier: Rc<Modifier>) -> Result<(), GameError> {
        let book = self
            .books
            .get_mut(id.0)
            .ok_or_else(|| GameError::UnknownBook(id.to_string()))?;
        log::info!(
            "applied modifier '{}' ({:+.2}) to '{}'",
            modifier.name,
            modifier.trigger_chance_bonus,
            book.name()
        );
        book.attach_modifier(modifier);
        Ok(())
    }

    /// Attach a fresh modifier to the book found by slug or name
    ///
    /// # Errors
    ///
    /// Returns `GameError::UnknownBook` if no book matches `name`.
    pub fn attach_named_modifier(&mut self, name: &str, bonus: f64) -> Result<BookId, GameError> {
        let id = self
            .find(name)
            .map(Book::id)
            .ok_or_else(|| GameError::UnknownBook(name.to_string()))?;
        self.attach_modifier(id, Modifier::new(format!("Charm {bonus:+.2}"), bonus))?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog() {
        let library = Library::standard();
        assert_eq!(library.len(), 5);

        let boost = library.find("trigger-boost").unwrap();
        assert!((boost.base_trigger_chance() - 1.0).abs() < f64::EPSILON);
        assert_eq!(boost.effect(), Effect::GlobalTriggerBoost);

        for book in library.iter().filter(|b| b.effect() != Effect::GlobalTriggerBoost) {
            assert!((book.base_trigger_chance() - 0.4).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn ids_index_the_catalog() {
        let library = Library::standard();
        for id in library.ids() {
            assert_eq!(library.get(id).unwrap().id(), id);
        }
        assert!(library.get(BookId(99)).is_none());
    }

    #[test]
    fn find_by_slug_or_name() {
        let library = Library::standard();
        assert_eq!(library.find("SPOT-VOWEL").unwrap().effect(), Effect::SpotRandomVowel);
        assert_eq!(
            library.find("reveal middle position").unwrap().effect(),
            Effect::RevealMiddle
        );
        assert!(library.find("necronomicon").is_none());
    }

    #[test]
    fn attach_modifier_raises_chance() {
        let mut library = Library::standard();
        let id = library.find("reveal-first").unwrap().id();

        library
            .attach_modifier(id, Modifier::new("Gilded Spine", 0.25))
            .unwrap();

        let chance = library.get(id).unwrap().trigger_chance(0.0);
        assert!((chance - 0.65).abs() < 1e-9);
    }

    #[test]
    fn attach_modifier_unknown_book() {
        let mut library = Library::standard();
        let err = library
            .attach_modifier(BookId(12), Modifier::new("Nothing", 0.1))
            .unwrap_err();
        assert_eq!(err, GameError::UnknownBook("#12".to_string()));
    }

    #[test]
    fn attach_named_modifier_shares_lookup_rules() {
        let mut library = Library::standard();
        let id = library.attach_named_modifier("Spot Random Vowel", -0.15).unwrap();
        assert_eq!(library.get(id).unwrap().effect(), Effect::SpotRandomVowel);
        assert_eq!(library.get(id).unwrap().modifiers()[0].name, "Charm -0.15");
        assert_eq!(
            library.attach_named_modifier("grimoire", 0.1),
            Err(GameError::UnknownBook("grimoire".to_string()))
        );
    }
}
