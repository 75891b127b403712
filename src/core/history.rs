//! Immutable record of the phases a session has moved through.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single move from one state to another.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Transition stamped with the current time.
    pub fn now(from: S, to: S) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of transitions.
///
/// `record` returns a new history and leaves the receiver untouched, so a
/// session value can be cloned and advanced without aliasing its past.
///
/// # Example
///
/// ```rust
/// use quizkit::core::{StateHistory, StateTransition};
/// use quizkit::engine::Phase;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition::now(
///     Phase::InProgress { index: 0 },
///     Phase::InProgress { index: 1 },
/// ));
/// let history = history.record(StateTransition::now(
///     Phase::InProgress { index: 1 },
///     Phase::Completed,
/// ));
///
/// assert_eq!(history.get_path().len(), 3);
/// assert_eq!(history.current(), Some(&Phase::Completed));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// The state reached by the latest transition.
    pub fn current(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Time between the first and last recorded transitions.
    ///
    /// `None` when empty, or when the clock went backwards between them.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Step {
        A,
        B,
        C,
    }

    impl State for Step {
        fn name(&self) -> &str {
            match self {
                Self::A => "A",
                Self::B => "B",
                Self::C => "C",
            }
        }
    }

    fn at(from: Step, to: Step, offset_secs: i64) -> StateTransition<Step> {
        StateTransition {
            from,
            to,
            timestamp: DateTime::<Utc>::UNIX_EPOCH + ChronoDuration::seconds(offset_secs),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Step> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.current().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_does_not_mutate_the_original() {
        let history = StateHistory::new();
        let extended = history.record(at(Step::A, Step::B, 0));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(extended.transitions().len(), 1);
    }

    #[test]
    fn path_follows_recorded_order() {
        let history = StateHistory::new()
            .record(at(Step::A, Step::B, 0))
            .record(at(Step::B, Step::C, 1));

        assert_eq!(history.get_path(), vec![&Step::A, &Step::B, &Step::C]);
        assert_eq!(history.current(), Some(&Step::C));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let history = StateHistory::new()
            .record(at(Step::A, Step::B, 10))
            .record(at(Step::B, Step::C, 25));

        assert_eq!(history.duration(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn duration_is_none_when_clock_goes_backwards() {
        let history = StateHistory::new()
            .record(at(Step::A, Step::B, 30))
            .record(at(Step::B, Step::C, 5));

        assert!(history.duration().is_none());
    }
}
