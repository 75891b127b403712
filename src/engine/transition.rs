//! Session transitions and their preconditions.

use crate::core::Guard;
use crate::engine::session::QuizSession;

/// Guarded transitions on a session. `reset` has no precondition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    SelectAnswer,
    Advance,
}

impl TransitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransitionKind::SelectAnswer => "select an answer",
            TransitionKind::Advance => "advance",
        }
    }

    /// Human-readable precondition, used in `EngineError::Blocked`.
    pub fn requirement(&self) -> &'static str {
        match self {
            TransitionKind::SelectAnswer => "a question in progress",
            TransitionKind::Advance => "an answer for the current question",
        }
    }

    /// Precondition over the whole session.
    pub fn guard(&self) -> Guard<QuizSession> {
        match self {
            TransitionKind::SelectAnswer => {
                Guard::new(|s: &QuizSession| s.phase().is_in_progress())
            }
            TransitionKind::Advance => Guard::new(|s: &QuizSession| s.phase().is_in_progress())
                .and(Guard::new(|s: &QuizSession| s.is_locked())),
        }
    }
}

/// Errors returned by session transitions. None of them alter the session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("questions are not loaded yet")]
    NotReady,

    #[error("cannot {transition} during phase {phase}: requires {requirement}")]
    Blocked {
        transition: &'static str,
        requirement: &'static str,
        phase: String,
    },
}

impl EngineError {
    pub(crate) fn blocked(kind: TransitionKind, phase: &str) -> Self {
        EngineError::Blocked {
            transition: kind.name(),
            requirement: kind.requirement(),
            phase: phase.to_string(),
        }
    }
}
