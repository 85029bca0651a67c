//! Violation types surfaced by the validation pass.

use std::fmt;
use thiserror::Error;

/// A single problem found in a machine definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionViolation {
    #[error("initial state '{state}' is not declared")]
    UndeclaredInitialState { state: String },

    /// A transition endpoint (`from` or `to`) outside the declared
    /// states set.
    #[error("transition {index} references undeclared state '{state}'")]
    UndeclaredState { index: usize, state: String },

    #[error("transition {index} references undeclared input '{input}'")]
    UndeclaredInput { index: usize, input: String },

    /// Two rows cover the same `(from, input)` pair; at runtime only the
    /// first one can ever fire.
    #[error("transitions {first} and {second} both cover ('{from}', '{input}')")]
    DuplicateRow {
        first: usize,
        second: usize,
        from: String,
        input: String,
    },

    #[error("state '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("input '{input}' is declared more than once")]
    DuplicateInput { input: String },
}

/// Every violation found in one validation pass.
///
/// Validation accumulates all problems instead of stopping at the first,
/// so a caller gets comprehensive feedback in a single run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violations(Vec<DefinitionViolation>);

impl Violations {
    pub(crate) fn new(violations: Vec<DefinitionViolation>) -> Self {
        Self(violations)
    }

    /// The individual violations, in discovery order.
    pub fn violations(&self) -> &[DefinitionViolation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid machine definition ({} violations):", self.0.len())?;
        for violation in &self.0 {
            write!(f, " {};", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}
