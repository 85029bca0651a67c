//! The transition table row type.

use super::input::Input;
use super::state::State;
use serde::{Deserialize, Serialize};

/// A single row of the transition table: when `input` occurs in
/// `from`, the machine moves to `to`.
///
/// Rows are immutable values. A well-formed table holds at most one row
/// per `(from, input)` pair; the engine does not enforce this and
/// resolves violations by taking the first row in declaration order.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Transition;
/// use turnstile::{input_enum, state_enum};
///
/// state_enum! {
///     enum LampState { Off, On }
/// }
/// input_enum! {
///     enum LampInput { Toggle }
/// }
///
/// let row = Transition::new(LampInput::Toggle, LampState::Off, LampState::On);
/// assert!(row.matches(&LampState::Off, &LampInput::Toggle));
/// assert!(!row.matches(&LampState::On, &LampInput::Toggle));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State, I: Input> {
    /// The input that triggers this row
    pub input: I,
    /// The state this row applies from
    pub from: S,
    /// The state the machine moves to
    pub to: S,
}

impl<S: State, I: Input> Transition<S, I> {
    /// Create a row.
    pub fn new(input: I, from: S, to: S) -> Self {
        Self { input, from, to }
    }

    /// Check whether this row fires for the given current state and
    /// input (pure).
    pub fn matches(&self, current: &S, input: &I) -> bool {
        self.from == *current && self.input == *input
    }
}
