//! Quiz phases.

use crate::core::State;
use serde::{Deserialize, Serialize};

/// Where a quiz session stands.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No questions available yet; the renderer shows a loading state.
    NotReady,
    /// Showing the question at `index`.
    InProgress { index: usize },
    /// The user advanced past the last question.
    Completed,
}

impl Phase {
    /// Index of the current question, if one is being shown.
    pub fn index(&self) -> Option<usize> {
        match self {
            Phase::InProgress { index } => Some(*index),
            _ => None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, Phase::InProgress { .. })
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Phase::NotReady => "NotReady",
            Phase::InProgress { .. } => "InProgress",
            Phase::Completed => "Completed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Phase::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_completed_is_final() {
        assert!(!Phase::NotReady.is_final());
        assert!(!Phase::InProgress { index: 3 }.is_final());
        assert!(Phase::Completed.is_final());
    }

    #[test]
    fn index_is_exposed_while_in_progress() {
        assert_eq!(Phase::InProgress { index: 2 }.index(), Some(2));
        assert_eq!(Phase::NotReady.index(), None);
        assert_eq!(Phase::Completed.index(), None);
    }
}
