//! Builder API for ergonomic machine construction.
//!
//! The fluent builder assembles the declared sets and the transition
//! table piecewise, then hands them to [`Machine::new`]. `build` keeps
//! the engine's permissive construction semantics; `build_validated`
//! runs the validation pass first.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::{Input, State, Transition};
use crate::machine::Machine;
use crate::report::Reporter;
use std::sync::Arc;

/// Fluent builder for [`Machine`].
///
/// # Example
///
/// ```rust
/// use turnstile::builder::MachineBuilder;
/// use turnstile::{input_enum, state_enum};
///
/// state_enum! {
///     enum CallState { Ringing, Connected, Ended }
/// }
/// input_enum! {
///     enum CallInput { Answer, HangUp }
/// }
///
/// let machine = MachineBuilder::new()
///     .states([CallState::Ringing, CallState::Connected, CallState::Ended])
///     .inputs([CallInput::Answer, CallInput::HangUp])
///     .rule(CallInput::Answer, CallState::Ringing, CallState::Connected)
///     .rule(CallInput::HangUp, CallState::Connected, CallState::Ended)
///     .initial(CallState::Ringing)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), &CallState::Ringing);
/// ```
pub struct MachineBuilder<S: State, I: Input> {
    states: Vec<S>,
    inputs: Vec<I>,
    transitions: Vec<Transition<S, I>>,
    initial: Option<S>,
    reporter: Option<Arc<dyn Reporter>>,
    log_limit: Option<usize>,
}

impl<S: State, I: Input> MachineBuilder<S, I> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            inputs: Vec::new(),
            transitions: Vec::new(),
            initial: None,
            reporter: None,
            log_limit: None,
        }
    }

    /// Declare a single state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare states in enumeration order.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare a single input.
    pub fn input(mut self, input: I) -> Self {
        self.inputs.push(input);
        self
    }

    /// Declare inputs in enumeration order.
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = I>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    /// Add a transition table row.
    pub fn rule(mut self, input: I, from: S, to: S) -> Self {
        self.transitions.push(Transition::new(input, from, to));
        self
    }

    /// Add a pre-built row.
    pub fn transition(mut self, transition: Transition<S, I>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple pre-built rows at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S, I>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the diagnostics sink (defaults to the tracing reporter).
    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Cap the transition log at the most recent `limit` entries
    /// (defaults to unbounded).
    pub fn log_limit(mut self, limit: usize) -> Self {
        self.log_limit = Some(limit);
        self
    }

    /// Build the machine with the engine's permissive semantics: the
    /// definition is trusted as given.
    pub fn build(self) -> Result<Machine<S, I>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = Machine::new(self.states, self.inputs, self.transitions, initial);
        if let Some(reporter) = self.reporter {
            machine = machine.with_reporter(reporter);
        }
        if let Some(limit) = self.log_limit {
            machine = machine.with_log_limit(limit);
        }
        Ok(machine)
    }

    /// Build the machine, then run the validation pass and fail if the
    /// definition is malformed.
    pub fn build_validated(self) -> Result<Machine<S, I>, BuildError> {
        let machine = self.build()?;
        machine.validate()?;
        Ok(machine)
    }
}

impl<S: State, I: Input> Default for MachineBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}
