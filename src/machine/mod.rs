//! The transition engine.
//!
//! [`Machine`] holds the static definition (states, inputs, transition
//! table) and the mutable position (current state, last transition
//! taken). Inputs advance it through [`Machine::apply`]; undefined
//! inputs and undefined transitions are rejected without a panic and
//! without a state change.

mod error;
mod shared;

pub use error::Rejection;
pub use shared::SharedMachine;

use crate::core::{Applied, Input, State, Transition, TransitionLog};
use crate::report::{Reporter, Severity, TracingReporter};
use crate::validate::{self, Violations};
use chrono::Utc;
use std::sync::Arc;

/// Table-driven state machine.
///
/// The definition is fixed at construction and trusted as given: no
/// membership or uniqueness checks are performed (use
/// [`Machine::validate`] for an explicit pass). The only mutation path
/// is applying an input; queries never change the machine.
///
/// A `Machine` is single-threaded. Wrap it in
/// [`SharedMachine`] when several owners need to drive it.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Transition;
/// use turnstile::machine::Machine;
/// use turnstile::{input_enum, state_enum};
///
/// state_enum! {
///     enum LampState { Off, On }
/// }
/// input_enum! {
///     enum LampInput { Toggle }
/// }
///
/// let mut machine = Machine::new(
///     vec![LampState::Off, LampState::On],
///     vec![LampInput::Toggle],
///     vec![
///         Transition::new(LampInput::Toggle, LampState::Off, LampState::On),
///         Transition::new(LampInput::Toggle, LampState::On, LampState::Off),
///     ],
///     LampState::Off,
/// );
///
/// let taken = machine.apply(&LampInput::Toggle).unwrap();
/// assert_eq!(taken.to, LampState::On);
/// assert_eq!(machine.current_state(), &LampState::On);
/// ```
pub struct Machine<S: State, I: Input> {
    states: Vec<S>,
    inputs: Vec<I>,
    transitions: Vec<Transition<S, I>>,
    current: S,
    last_transition: Option<Transition<S, I>>,
    log: TransitionLog<S, I>,
    reporter: Arc<dyn Reporter>,
}

impl<S: State, I: Input> Machine<S, I> {
    /// Create a machine from its full static definition and an initial
    /// state.
    ///
    /// The declared sets and the table are trusted as given; an initial
    /// state outside `states` or a malformed table yields defined but
    /// possibly surprising runtime behavior rather than a construction
    /// failure. Call [`Machine::validate`] to check explicitly.
    pub fn new(states: Vec<S>, inputs: Vec<I>, transitions: Vec<Transition<S, I>>, initial: S) -> Self {
        Self {
            states,
            inputs,
            transitions,
            current: initial,
            last_transition: None,
            log: TransitionLog::new(),
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Replace the diagnostics sink.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Cap the transition log at the most recent `limit` entries, so a
    /// forever-running machine holds bounded memory.
    pub fn with_log_limit(mut self, limit: usize) -> Self {
        self.log = self.log.with_limit(limit);
        self
    }

    /// The machine's current position.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// The most recently applied transition, if any.
    ///
    /// Set only on a successful apply; a rejected input leaves it
    /// untouched.
    pub fn last_transition(&self) -> Option<&Transition<S, I>> {
        self.last_transition.as_ref()
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Declared inputs, in declaration order.
    pub fn inputs(&self) -> &[I] {
        &self.inputs
    }

    /// The transition table, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, I>] {
        &self.transitions
    }

    /// Log of successfully applied transitions.
    pub fn log(&self) -> &TransitionLog<S, I> {
        &self.log
    }

    /// Drop all transition log entries; current state and last
    /// transition are untouched.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Check if the current state is terminal.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Find the transition the given input would cause from the current
    /// state (pure, silent).
    ///
    /// An input outside the declared alphabet is rejected before the
    /// table is consulted. Otherwise the first row in declaration order
    /// with a matching `(from, input)` pair wins, which keeps the result
    /// deterministic even for tables that violate the uniqueness
    /// assumption.
    pub fn lookup(&self, input: &I) -> Result<&Transition<S, I>, Rejection> {
        if !self.inputs.contains(input) {
            return Err(Rejection::UnknownInput {
                input: input.name().to_string(),
            });
        }

        self.transitions
            .iter()
            .find(|t| t.matches(&self.current, input))
            .ok_or_else(|| Rejection::NoApplicableTransition {
                input: input.name().to_string(),
                from: self.current.name().to_string(),
            })
    }

    /// Query what transition the input would cause, reporting rejections
    /// through the diagnostics sink. Never mutates.
    pub fn get_transition(&self, input: &I) -> Option<Transition<S, I>> {
        match self.lookup(input) {
            Ok(transition) => Some(transition.clone()),
            Err(rejection) => {
                self.reporter.report(rejection.severity(), &rejection.to_string());
                None
            }
        }
    }

    /// Apply an input, reporting the cause if it is rejected.
    ///
    /// On success the current state, last transition, and log are
    /// updated and the taken row is returned. On rejection nothing
    /// changes and the discriminated [`Rejection`] tells the caller why.
    pub fn try_apply(&mut self, input: &I) -> Result<Transition<S, I>, Rejection> {
        match self.lookup(input).map(|found| found.clone()) {
            Ok(transition) => {
                self.reporter.report(
                    Severity::Debug,
                    &format!(
                        "{}: transitioned from {} to {}",
                        transition.input.name(),
                        transition.from.name(),
                        transition.to.name()
                    ),
                );
                self.current = transition.to.clone();
                self.last_transition = Some(transition.clone());
                self.log.push(Applied {
                    transition: transition.clone(),
                    timestamp: Utc::now(),
                });
                Ok(transition)
            }
            Err(rejection) => {
                self.reporter.report(rejection.severity(), &rejection.to_string());
                Err(rejection)
            }
        }
    }

    /// Apply an input, collapsing both rejection causes into `None`.
    ///
    /// The causes stay distinguishable through the diagnostics sink and
    /// through [`Machine::try_apply`].
    pub fn apply(&mut self, input: &I) -> Option<Transition<S, I>> {
        self.try_apply(input).ok()
    }

    /// Report the current state and the full definition at Info
    /// severity, in declaration order. Read-only.
    pub fn dump(&self) {
        let report = |message: String| self.reporter.report(Severity::Info, &message);

        report(format!("Current state: {}", self.current.name()));

        report(format!("States: {}", self.states.len()));
        for state in &self.states {
            report(format!("  {}", state.name()));
        }

        report(format!("Inputs: {}", self.inputs.len()));
        for input in &self.inputs {
            report(format!("  {}", input.name()));
        }

        report(format!("Transitions: {}", self.transitions.len()));
        for transition in &self.transitions {
            report(format!(
                "  {}: {} -> {}",
                transition.input.name(),
                transition.from.name(),
                transition.to.name()
            ));
        }
    }

    /// Check the definition against the declared sets, accumulating all
    /// violations. The current state stands in for the initial state, so
    /// a machine that has drifted outside its declared set is caught too.
    pub fn validate(&self) -> Result<(), Violations> {
        validate::check_definition(&self.states, &self.inputs, &self.transitions, &self.current)
    }
}

impl<S: State, I: Input> Clone for Machine<S, I> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
            inputs: self.inputs.clone(),
            transitions: self.transitions.clone(),
            current: self.current.clone(),
            last_transition: self.last_transition.clone(),
            log: self.log.clone(),
            reporter: Arc::clone(&self.reporter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use crate::{input_enum, state_enum};

    state_enum! {
        enum PlayerState { Idle, Running, Paused }
    }

    // Eject is a declared enum variant but is left out of the machine's
    // input alphabet, standing in for an undeclared input.
    input_enum! {
        enum PlayerInput { Start, Pause, Resume, Stop, Eject }
    }

    fn player_table() -> Vec<Transition<PlayerState, PlayerInput>> {
        vec![
            Transition::new(PlayerInput::Start, PlayerState::Idle, PlayerState::Running),
            Transition::new(PlayerInput::Pause, PlayerState::Running, PlayerState::Paused),
            Transition::new(PlayerInput::Resume, PlayerState::Paused, PlayerState::Running),
            Transition::new(PlayerInput::Stop, PlayerState::Running, PlayerState::Idle),
        ]
    }

    fn player_machine() -> Machine<PlayerState, PlayerInput> {
        Machine::new(
            vec![PlayerState::Idle, PlayerState::Running, PlayerState::Paused],
            vec![
                PlayerInput::Start,
                PlayerInput::Pause,
                PlayerInput::Resume,
                PlayerInput::Stop,
            ],
            player_table(),
            PlayerState::Idle,
        )
    }

    #[test]
    fn construction_starts_in_initial_state() {
        let machine = player_machine();
        assert_eq!(machine.current_state(), &PlayerState::Idle);
        assert!(machine.last_transition().is_none());
        assert!(machine.log().applied().is_empty());
    }

    #[test]
    fn apply_follows_the_table() {
        let mut machine = player_machine();

        let taken = machine.apply(&PlayerInput::Start).unwrap();
        assert_eq!(
            taken,
            Transition::new(PlayerInput::Start, PlayerState::Idle, PlayerState::Running)
        );
        assert_eq!(machine.current_state(), &PlayerState::Running);

        let taken = machine.apply(&PlayerInput::Pause).unwrap();
        assert_eq!(taken.to, PlayerState::Paused);
        assert_eq!(machine.current_state(), &PlayerState::Paused);

        // Start does not apply from Paused.
        assert!(machine.apply(&PlayerInput::Start).is_none());
        assert_eq!(machine.current_state(), &PlayerState::Paused);
    }

    #[test]
    fn stop_only_applies_from_running() {
        let mut machine = player_machine();
        machine.apply(&PlayerInput::Start);

        let taken = machine.apply(&PlayerInput::Stop).unwrap();
        assert_eq!(
            taken,
            Transition::new(PlayerInput::Stop, PlayerState::Running, PlayerState::Idle)
        );
        assert_eq!(machine.current_state(), &PlayerState::Idle);

        assert!(machine.apply(&PlayerInput::Stop).is_none());
        assert_eq!(machine.current_state(), &PlayerState::Idle);
    }

    #[test]
    fn undeclared_input_is_rejected_as_unknown() {
        let mut machine = player_machine();

        let result = machine.try_apply(&PlayerInput::Eject);
        assert_eq!(
            result,
            Err(Rejection::UnknownInput {
                input: "Eject".to_string()
            })
        );
        assert_eq!(machine.current_state(), &PlayerState::Idle);
        assert!(machine.last_transition().is_none());
    }

    #[test]
    fn unknown_input_reports_at_error_severity() {
        let reporter = Arc::new(MemoryReporter::new());
        let mut machine = player_machine().with_reporter(reporter.clone());

        machine.apply(&PlayerInput::Eject);

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Severity::Error);
        assert!(events[0].1.contains("unknown input 'Eject'"));
    }

    #[test]
    fn inapplicable_input_reports_at_warn_severity() {
        let reporter = Arc::new(MemoryReporter::new());
        let mut machine = player_machine().with_reporter(reporter.clone());

        let result = machine.try_apply(&PlayerInput::Pause);
        assert_eq!(
            result,
            Err(Rejection::NoApplicableTransition {
                input: "Pause".to_string(),
                from: "Idle".to_string(),
            })
        );

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, Severity::Warn);
    }

    #[test]
    fn successful_transition_reports_at_debug_severity() {
        let reporter = Arc::new(MemoryReporter::new());
        let mut machine = player_machine().with_reporter(reporter.clone());

        machine.apply(&PlayerInput::Start);

        let events = reporter.events();
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            (
                Severity::Debug,
                "Start: transitioned from Idle to Running".to_string()
            )
        );
    }

    #[test]
    fn queries_never_mutate() {
        let machine = player_machine();

        for _ in 0..3 {
            let found = machine.get_transition(&PlayerInput::Start);
            assert!(found.is_some());
        }
        assert!(machine.get_transition(&PlayerInput::Pause).is_none());
        assert!(machine.get_transition(&PlayerInput::Eject).is_none());

        assert_eq!(machine.current_state(), &PlayerState::Idle);
        assert!(machine.last_transition().is_none());
    }

    #[test]
    fn rejection_preserves_last_transition() {
        let mut machine = player_machine();
        machine.apply(&PlayerInput::Start);
        let before = machine.last_transition().cloned();

        machine.apply(&PlayerInput::Start);
        machine.apply(&PlayerInput::Eject);

        assert_eq!(machine.last_transition().cloned(), before);
        assert_eq!(machine.current_state(), &PlayerState::Running);
    }

    #[test]
    fn first_row_wins_for_duplicate_pairs() {
        let mut table = player_table();
        table.push(Transition::new(
            PlayerInput::Start,
            PlayerState::Idle,
            PlayerState::Paused,
        ));

        let mut machine = Machine::new(
            vec![PlayerState::Idle, PlayerState::Running, PlayerState::Paused],
            vec![PlayerInput::Start],
            table,
            PlayerState::Idle,
        );

        let taken = machine.apply(&PlayerInput::Start).unwrap();
        assert_eq!(taken.to, PlayerState::Running);
    }

    #[test]
    fn identical_machines_stay_in_lockstep() {
        let mut left = player_machine();
        let mut right = player_machine();

        let script = [
            PlayerInput::Start,
            PlayerInput::Pause,
            PlayerInput::Start,
            PlayerInput::Resume,
            PlayerInput::Eject,
            PlayerInput::Stop,
        ];

        for input in &script {
            assert_eq!(left.apply(input), right.apply(input));
            assert_eq!(left.current_state(), right.current_state());
            assert_eq!(left.last_transition(), right.last_transition());
        }
    }

    #[test]
    fn dump_reports_definition_in_declaration_order() {
        let reporter = Arc::new(MemoryReporter::new());
        let machine = player_machine().with_reporter(reporter.clone());

        machine.dump();

        let lines: Vec<String> = reporter.events().into_iter().map(|(_, m)| m).collect();
        let severities: Vec<Severity> = reporter.events().into_iter().map(|(s, _)| s).collect();

        assert!(severities.iter().all(|s| *s == Severity::Info));
        assert_eq!(lines[0], "Current state: Idle");
        assert_eq!(lines[1], "States: 3");
        assert_eq!(lines[2], "  Idle");
        assert_eq!(lines[5], "Inputs: 4");
        assert_eq!(lines[10], "Transitions: 4");
        assert_eq!(lines[11], "  Start: Idle -> Running");
    }

    #[test]
    fn log_records_applied_transitions() {
        let mut machine = player_machine();
        machine.apply(&PlayerInput::Start);
        machine.apply(&PlayerInput::Pause);
        machine.apply(&PlayerInput::Eject);

        let path = machine.log().path();
        assert_eq!(
            path,
            vec![&PlayerState::Idle, &PlayerState::Running, &PlayerState::Paused]
        );
    }

    #[test]
    fn log_limit_bounds_long_lived_machines() {
        let mut machine = player_machine().with_log_limit(2);

        for _ in 0..10 {
            machine.apply(&PlayerInput::Start);
            machine.apply(&PlayerInput::Stop);
        }

        assert_eq!(machine.log().applied().len(), 2);
        // The most recent applies are retained; position is unaffected.
        assert_eq!(machine.log().path(), vec![
            &PlayerState::Idle,
            &PlayerState::Running,
            &PlayerState::Idle
        ]);
        assert_eq!(machine.current_state(), &PlayerState::Idle);
    }

    #[test]
    fn clear_log_keeps_position_and_last_transition() {
        let mut machine = player_machine();
        machine.apply(&PlayerInput::Start);
        machine.apply(&PlayerInput::Pause);

        machine.clear_log();

        assert!(machine.log().applied().is_empty());
        assert_eq!(machine.current_state(), &PlayerState::Paused);
        assert_eq!(
            machine.last_transition(),
            Some(&Transition::new(
                PlayerInput::Pause,
                PlayerState::Running,
                PlayerState::Paused
            ))
        );
    }

    #[test]
    fn query_rejections_report_like_apply() {
        let reporter = Arc::new(MemoryReporter::new());
        let machine = player_machine().with_reporter(reporter.clone());

        // A successful query is silent.
        assert!(machine.get_transition(&PlayerInput::Start).is_some());
        assert!(reporter.events().is_empty());

        machine.get_transition(&PlayerInput::Pause);
        machine.get_transition(&PlayerInput::Eject);

        let events = reporter.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, Severity::Warn);
        assert!(events[0].1.contains("no transition for input 'Pause'"));
        assert_eq!(events[1].0, Severity::Error);
        assert!(events[1].1.contains("unknown input 'Eject'"));
    }

    #[test]
    fn validate_passes_for_well_formed_definition() {
        assert!(player_machine().validate().is_ok());
    }

    #[test]
    fn validate_flags_undeclared_initial_state() {
        let machine = Machine::new(
            vec![PlayerState::Idle, PlayerState::Running],
            vec![PlayerInput::Start],
            vec![Transition::new(
                PlayerInput::Start,
                PlayerState::Idle,
                PlayerState::Running,
            )],
            PlayerState::Paused,
        );

        let violations = machine.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
    }
}
