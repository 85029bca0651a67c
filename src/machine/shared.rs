//! Mutex-guarded machine for multi-owner use.

use super::error::Rejection;
use super::Machine;
use crate::core::{Input, State, Transition};
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`Machine`] behind a lock.
///
/// `apply` is lookup-then-mutate, which is not atomic on a bare machine
/// shared between threads. This wrapper serializes every call through a
/// single mutex so concurrent owners cannot interleave inside an apply.
///
/// Cloning shares the underlying machine.
#[derive(Clone)]
pub struct SharedMachine<S: State, I: Input> {
    inner: Arc<Mutex<Machine<S, I>>>,
}

impl<S: State, I: Input> SharedMachine<S, I> {
    pub fn new(machine: Machine<S, I>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Apply an input under the lock.
    pub fn apply(&self, input: &I) -> Option<Transition<S, I>> {
        self.inner.lock().apply(input)
    }

    /// Apply an input under the lock, keeping the rejection cause.
    pub fn try_apply(&self, input: &I) -> Result<Transition<S, I>, Rejection> {
        self.inner.lock().try_apply(input)
    }

    /// Query without mutating.
    pub fn get_transition(&self, input: &I) -> Option<Transition<S, I>> {
        self.inner.lock().get_transition(input)
    }

    pub fn current_state(&self) -> S {
        self.inner.lock().current_state().clone()
    }

    pub fn last_transition(&self) -> Option<Transition<S, I>> {
        self.inner.lock().last_transition().cloned()
    }

    pub fn is_final(&self) -> bool {
        self.inner.lock().is_final()
    }

    /// Dump the current configuration and state through the machine's
    /// reporter.
    pub fn dump(&self) {
        self.inner.lock().dump()
    }
}
