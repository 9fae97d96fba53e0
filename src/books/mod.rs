//! Hint books
//!
//! Books carry a base trigger chance and an effect. The library owns the
//! catalog; the bookbag holds the player's picks by id.

mod book;
mod bookbag;
mod effect;
mod library;

pub use book::{Book, BookId, Modifier, resolve_trigger};
pub use bookbag::{BAG_CAPACITY, Bookbag, EvictionPolicy, REWARD_CHOICES};
pub use effect::{Effect, GLOBAL_TRIGGER_INCREMENT};
pub use library::Library;
