//! Game flow
//!
//! Rounds, sessions and the interface they talk through.

pub mod config;
pub mod enemy;
pub mod input;
pub mod interface;
pub mod round;
pub mod session;

pub use config::{DEFAULT_ROUNDS, GameMode, MAX_ATTEMPTS, SessionConfig, parse_rounds};
pub use enemy::{Enemy, EnemySequence};
pub use input::{parse_selection, parse_yes_no};
pub use interface::{BagEntry, GameEvent, GameInterface, Prompt, RoundView};
pub use round::{Round, RoundBookUsage, RoundPhase};
pub use session::{Session, SessionOutcome, SessionStats};
