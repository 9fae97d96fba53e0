//! Terminal output formatting
//!
//! Display utilities for the game board, events and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_catalog, print_event, print_prompt, print_round_view, print_session_outcome,
    print_simulation_result,
};
