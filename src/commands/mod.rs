//! Command implementations

pub mod books;
pub mod play;
pub mod simulate;

pub use books::build_catalog;
pub use play::{ConsoleInterface, run_play};
pub use simulate::{AutoPlayer, SimulationConfig, SimulationResult, run_simulation};
