//! Turnstile: a table-driven finite state machine engine.
//!
//! A machine is defined by a fixed set of named states, a fixed alphabet
//! of named inputs, and a transition table mapping `(state, input)`
//! pairs to next states. Applying an input either takes the matching
//! table row or is rejected without a state change - inputs outside the
//! alphabet and inputs with no applicable row never crash the engine.
//!
//! # Core Concepts
//!
//! - **States and inputs**: opaque named values via the [`State`] and
//!   [`Input`] traits, usually declared with [`state_enum!`] and
//!   [`input_enum!`]
//! - **Machine**: the engine; one mutable position, advanced only by
//!   [`Machine::apply`]
//! - **Diagnostics**: every rejection and transition is reported through
//!   an injected [`Reporter`], with `tracing` as the default sink
//!
//! # Example
//!
//! ```rust
//! use turnstile::{input_enum, state_enum, MachineBuilder};
//!
//! state_enum! {
//!     pub enum PlayerState { Idle, Running, Paused }
//! }
//! input_enum! {
//!     pub enum PlayerInput { Start, Pause, Resume, Stop }
//! }
//!
//! let mut machine = MachineBuilder::new()
//!     .states([PlayerState::Idle, PlayerState::Running, PlayerState::Paused])
//!     .inputs([
//!         PlayerInput::Start,
//!         PlayerInput::Pause,
//!         PlayerInput::Resume,
//!         PlayerInput::Stop,
//!     ])
//!     .rule(PlayerInput::Start, PlayerState::Idle, PlayerState::Running)
//!     .rule(PlayerInput::Pause, PlayerState::Running, PlayerState::Paused)
//!     .rule(PlayerInput::Resume, PlayerState::Paused, PlayerState::Running)
//!     .rule(PlayerInput::Stop, PlayerState::Running, PlayerState::Idle)
//!     .initial(PlayerState::Idle)
//!     .build()
//!     .unwrap();
//!
//! let taken = machine.apply(&PlayerInput::Start).unwrap();
//! assert_eq!(taken.to, PlayerState::Running);
//!
//! // Pause applies from Running, Stop does not apply from Paused.
//! machine.apply(&PlayerInput::Pause);
//! assert!(machine.apply(&PlayerInput::Stop).is_none());
//! assert_eq!(machine.current_state(), &PlayerState::Paused);
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod report;
pub mod validate;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use core::{Applied, Input, State, Transition, TransitionLog};
pub use machine::{Machine, Rejection, SharedMachine};
pub use report::{MemoryReporter, NullReporter, Reporter, Severity, TracingReporter};
pub use validate::{DefinitionViolation, Violations};
