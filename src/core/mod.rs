//! Core vocabulary types for the engine.
//!
//! This module contains the pure value types the machine is defined in
//! terms of:
//! - State and Input identity via the `State` and `Input` traits
//! - Transition table rows
//! - The applied-transition log
//!
//! Nothing here performs I/O or emits diagnostics.

mod history;
mod input;
mod state;
mod transition;

pub use history::{Applied, TransitionLog};
pub use input::Input;
pub use state::State;
pub use transition::Transition;
