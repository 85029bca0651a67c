//! Optional validation pass over a machine definition.
//!
//! Construction trusts its inputs: a malformed table gives defined but
//! possibly surprising runtime behavior (first matching row wins), never
//! a crash. This pass is the explicit check for callers that want
//! malformed definitions surfaced up front, either directly or through
//! [`Machine::validate`](crate::machine::Machine::validate) /
//! [`MachineBuilder::build_validated`](crate::builder::MachineBuilder::build_validated).
//!
//! The pass does not stop at the first problem - it collects every
//! violation it finds.

mod violations;

pub use violations::{DefinitionViolation, Violations};

use crate::core::{Input, State, Transition};

/// Check a machine definition against its declared sets.
///
/// Flags duplicate state/input declarations, an undeclared initial
/// state, transition rows referencing undeclared states or inputs, and
/// duplicate `(from, input)` rows.
pub fn check_definition<S: State, I: Input>(
    states: &[S],
    inputs: &[I],
    transitions: &[Transition<S, I>],
    initial: &S,
) -> Result<(), Violations> {
    let mut found = Vec::new();

    for (i, state) in states.iter().enumerate() {
        if states[..i].contains(state) {
            found.push(DefinitionViolation::DuplicateState {
                state: state.name().to_string(),
            });
        }
    }

    for (i, input) in inputs.iter().enumerate() {
        if inputs[..i].contains(input) {
            found.push(DefinitionViolation::DuplicateInput {
                input: input.name().to_string(),
            });
        }
    }

    if !states.contains(initial) {
        found.push(DefinitionViolation::UndeclaredInitialState {
            state: initial.name().to_string(),
        });
    }

    for (index, transition) in transitions.iter().enumerate() {
        if !states.contains(&transition.from) {
            found.push(DefinitionViolation::UndeclaredState {
                index,
                state: transition.from.name().to_string(),
            });
        }
        if !states.contains(&transition.to) {
            found.push(DefinitionViolation::UndeclaredState {
                index,
                state: transition.to.name().to_string(),
            });
        }
        if !inputs.contains(&transition.input) {
            found.push(DefinitionViolation::UndeclaredInput {
                index,
                input: transition.input.name().to_string(),
            });
        }

        for (first, earlier) in transitions[..index].iter().enumerate() {
            if earlier.from == transition.from && earlier.input == transition.input {
                found.push(DefinitionViolation::DuplicateRow {
                    first,
                    second: index,
                    from: transition.from.name().to_string(),
                    input: transition.input.name().to_string(),
                });
                break;
            }
        }
    }

    if found.is_empty() {
        Ok(())
    } else {
        Err(Violations::new(found))
    }
}
