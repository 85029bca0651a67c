//! Core Input trait for machine inputs.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine inputs.
///
/// An input is a named stimulus that may cause a state change. Inputs
/// share the identity model of [`State`](super::State): opaque values
/// from a fixed, caller-supplied alphabet, compared by value.
///
/// The [`input_enum!`](crate::input_enum) macro generates the derives and
/// this impl for plain enums.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Input;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorInput {
///     Push,
///     Pull,
/// }
///
/// impl Input for DoorInput {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
/// }
/// ```
pub trait Input:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the input's name for display/logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestInput {
        Start,
        Stop,
    }

    impl Input for TestInput {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Stop => "Stop",
            }
        }
    }

    #[test]
    fn name_returns_declared_value() {
        assert_eq!(TestInput::Start.name(), "Start");
        assert_eq!(TestInput::Stop.name(), "Stop");
    }

    #[test]
    fn input_identity_is_by_value() {
        assert_eq!(TestInput::Start, TestInput::Start.clone());
        assert_ne!(TestInput::Start, TestInput::Stop);
    }

    #[test]
    fn input_serializes_correctly() {
        let input = TestInput::Stop;
        let json = serde_json::to_string(&input).unwrap();
        let deserialized: TestInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, deserialized);
    }
}
