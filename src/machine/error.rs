//! Rejection conditions for input application.

use crate::report::Severity;
use thiserror::Error;

/// Why an input was rejected.
///
/// Both causes are non-fatal: the machine stays in its current state and
/// `apply` returns "no transition". The variants exist so callers and
/// tests can branch on the cause instead of inferring it from the
/// diagnostic stream.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The input is not part of the declared input alphabet.
    ///
    /// Raised before the table is consulted, so an undeclared input is
    /// rejected even if some row happens to reference it.
    #[error("unknown input '{input}'")]
    UnknownInput { input: String },

    /// The input is declared but no table row matches the current state.
    /// A normal outcome for inputs that do not apply right now.
    #[error("no transition for input '{input}' from state '{from}'")]
    NoApplicableTransition { input: String, from: String },
}

impl Rejection {
    /// Severity at which this rejection is reported: an undeclared
    /// input is an error, an inapplicable one only a warning.
    pub fn severity(&self) -> Severity {
        match self {
            Rejection::UnknownInput { .. } => Severity::Error,
            Rejection::NoApplicableTransition { .. } => Severity::Warn,
        }
    }
}
