//! In-memory log of applied transitions.
//!
//! The machine keeps its position in `current_state` and
//! `last_transition`; the log additionally retains successfully applied
//! rows with timestamps, for inspection. It lives and dies with the
//! machine and is never persisted. Long-lived machines can cap it with
//! [`TransitionLog::with_limit`] or drain it with
//! [`TransitionLog::clear`].

use super::input::Input;
use super::state::State;
use super::transition::Transition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A transition that was applied at a point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Applied<S: State, I: Input> {
    /// The table row that was taken
    pub transition: Transition<S, I>,
    /// When it was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of applied transitions.
///
/// The engine appends in place through [`TransitionLog::push`];
/// [`TransitionLog::record`] is the copying variant for callers that
/// want to keep the original log untouched. An optional limit bounds
/// the log to the most recent entries, evicting the oldest.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use turnstile::core::{Applied, Transition, TransitionLog};
/// use turnstile::{input_enum, state_enum};
///
/// state_enum! {
///     enum Phase { One, Two }
/// }
/// input_enum! {
///     enum Step { Advance }
/// }
///
/// let mut log = TransitionLog::new();
/// log.push(Applied {
///     transition: Transition::new(Step::Advance, Phase::One, Phase::Two),
///     timestamp: Utc::now(),
/// });
///
/// let path = log.path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State, I: Input> {
    applied: Vec<Applied<S, I>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State, I: Input> Default for TransitionLog<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Input> TransitionLog<S, I> {
    /// Create a new empty, unbounded log.
    pub fn new() -> Self {
        Self {
            applied: Vec::new(),
            limit: None,
        }
    }

    /// Cap the log at the most recent `limit` entries. Existing excess
    /// entries are evicted immediately, oldest first.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self.evict();
        self
    }

    /// Append an applied transition in place, evicting the oldest
    /// entries if a limit is set.
    pub fn push(&mut self, entry: Applied<S, I>) {
        self.applied.push(entry);
        self.evict();
    }

    /// Record an applied transition, returning a new log and leaving
    /// the original untouched.
    pub fn record(&self, entry: Applied<S, I>) -> Self {
        let mut log = self.clone();
        log.push(entry);
        log
    }

    /// Drop all entries. The limit, if any, is kept.
    pub fn clear(&mut self) {
        self.applied.clear();
    }

    fn evict(&mut self) {
        if let Some(limit) = self.limit {
            if self.applied.len() > limit {
                let overflow = self.applied.len() - limit;
                self.applied.drain(..overflow);
            }
        }
    }

    /// Get the path of states traversed: the first entry's `from`
    /// state, then the `to` state of each entry. Empty for an empty log.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.applied.first() {
            path.push(&first.transition.from);
        }
        for entry in &self.applied {
            path.push(&entry.transition.to);
        }
        path
    }

    /// Elapsed time from the first to the last applied transition.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.applied.first(), self.applied.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All entries in application order.
    pub fn applied(&self) -> &[Applied<S, I>] {
        &self.applied
    }
}
