//! The player's bounded collection of books

use super::book::BookId;
use super::library::Library;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Maximum number of books a bag holds
pub const BAG_CAPACITY: usize = 5;

/// Number of books offered after a won round
pub const REWARD_CHOICES: usize = 2;

/// What happens when a reward arrives and the bag is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EvictionPolicy {
    /// Ask the player which book to drop
    #[default]
    Prompt,
    /// Drop the book held longest
    Oldest,
    /// Keep the bag as is and forfeit the reward
    Reject,
}

/// Ordered collection of held books
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookbag {
    books: Vec<BookId>,
    capacity: usize,
}

impl Default for Bookbag {
    fn default() -> Self {
        Self::with_capacity(BAG_CAPACITY)
    }
}

impl Bookbag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            books: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a book
    ///
    /// # Errors
    ///
    /// Returns `GameError::BagFull` when the bag is at capacity; the caller
    /// must remove a book first.
    pub fn add(&mut self, id: BookId) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::BagFull {
                capacity: self.capacity,
            });
        }
        self.books.push(id);
        Ok(())
    }

    /// Remove the book at a 0-based index
    ///
    /// # Errors
    ///
    /// Returns `GameError::SelectionOutOfRange` (1-based) if `index` is not
    /// held; the bag is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<BookId, GameError> {
        if index >= self.books.len() {
            return Err(GameError::SelectionOutOfRange {
                selection: index + 1,
                available: self.books.len(),
            });
        }
        Ok(self.books.remove(index))
    }

    #[must_use]
    pub fn list(&self) -> &[BookId] {
        &self.books
    }

    #[must_use]
    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.books.len() >= self.capacity
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sample up to two library books the bag does not already hold
    pub fn reward_offers<R: Rng + ?Sized>(&self, library: &Library, rng: &mut R) -> Vec<BookId> {
        let available: Vec<BookId> = library.ids().filter(|&id| !self.contains(id)).collect();
        available
            .choose_multiple(rng, REWARD_CHOICES)
            .copied()
            .collect()
    }
}
