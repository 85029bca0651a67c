//! Core State trait for machine states.
//!
//! States are opaque named values drawn from a fixed, caller-supplied
//! set. Identity is by value; no behavior is attached beyond naming and
//! terminal-state classification.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// A state is an immutable value describing the machine's position. All
/// methods are pure.
///
/// # Required Traits
///
/// - `Clone`: states are cloned into transition records
/// - `PartialEq`: transition lookup compares states by value
/// - `Debug`: states show up in diagnostics and test failures
/// - `Serialize` + `Deserialize`: definitions and logs are serializable
///
/// The [`state_enum!`](crate::state_enum) macro generates the derives and
/// this impl for plain enums.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Jammed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Jammed => "Jammed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Jammed)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are positions where no further transitions are
    /// expected. Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
