//! Build errors for the machine builder.

use crate::validate::Violations;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// Definition violations found by `build_validated`.
    #[error(transparent)]
    Invalid(#[from] Violations),
}
