//! The quiz session: a value moved forward by pure transitions.

use crate::core::{State, StateHistory, StateTransition};
use crate::engine::phase::Phase;
use crate::engine::transition::{EngineError, TransitionKind};
use crate::engine::view::{Feedback, QuizView};
use crate::question::Question;
use tracing::debug;

/// Quiz progress over an ordered question list.
///
/// Every transition borrows the session and returns a new one; callers keep
/// whichever value is current. A failed transition leaves the caller's value
/// as it was.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    phase: Phase,
    score: u32,
    selected_answer: Option<String>,
    locked: bool,
    history: StateHistory<Phase>,
}

impl QuizSession {
    /// Fresh session at the first question, or `NotReady` if `questions` is
    /// empty.
    pub fn new(questions: Vec<Question>) -> Self {
        let session = Self {
            questions,
            phase: Phase::NotReady,
            score: 0,
            selected_answer: None,
            locked: false,
            history: StateHistory::new(),
        };
        if session.questions.is_empty() {
            session
        } else {
            session.move_to(Phase::InProgress { index: 0 })
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_ready(&self) -> bool {
        self.phase != Phase::NotReady
    }

    pub fn is_completed(&self) -> bool {
        self.phase.is_final()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// The question being shown, or the last one once completed.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::NotReady => None,
            Phase::InProgress { index } => self.questions.get(index),
            Phase::Completed => self.questions.last(),
        }
    }

    pub fn feedback(&self) -> Option<Feedback> {
        let question = self.current_question()?;
        Feedback::derive(question, self.selected_answer(), self.locked)
    }

    /// Snapshot for the renderer; `None` while not ready.
    pub fn view(&self) -> Option<QuizView> {
        let question = self.current_question()?;
        let index = match self.phase {
            Phase::InProgress { index } => index,
            _ => self.questions.len().saturating_sub(1),
        };
        Some(QuizView {
            question: question.text.clone(),
            choices: question.choices.clone(),
            correct_answer: question.correct_answer.clone(),
            is_bonus: question.is_bonus,
            score: self.score,
            index,
            total: self.questions.len(),
            locked: self.locked,
            selected_answer: self.selected_answer.clone(),
            feedback: self.feedback(),
            completed: self.is_completed(),
        })
    }

    /// Commit `choice` as the answer to the current question.
    ///
    /// A correct answer scores 1, or 2 on a bonus question. A wrong answer on
    /// a bonus question costs 1 point, never taking the score below zero.
    /// Once locked, further selections return the session unchanged.
    pub fn select_answer(&self, choice: &str) -> Result<Self, EngineError> {
        self.ensure(TransitionKind::SelectAnswer)?;
        if self.locked {
            debug!(choice, "answer already locked, ignoring selection");
            return Ok(self.clone());
        }
        let question = self.current_question().ok_or(EngineError::NotReady)?;

        let delta = question.score_delta(choice);
        let score = if delta >= 0 {
            self.score.saturating_add(delta.unsigned_abs())
        } else {
            self.score.saturating_sub(delta.unsigned_abs())
        };
        debug!(
            question = %question.id,
            choice,
            delta,
            score,
            "answer locked"
        );

        Ok(Self {
            score,
            selected_answer: Some(choice.to_string()),
            locked: true,
            ..self.clone()
        })
    }

    /// Move to the next question, or complete the quiz after the last one.
    pub fn advance(&self) -> Result<Self, EngineError> {
        self.ensure(TransitionKind::Advance)?;
        let Phase::InProgress { index } = self.phase else {
            return Err(EngineError::blocked(
                TransitionKind::Advance,
                self.phase.name(),
            ));
        };

        if index + 1 < self.questions.len() {
            let next = Self {
                selected_answer: None,
                locked: false,
                ..self.clone()
            };
            Ok(next.move_to(Phase::InProgress { index: index + 1 }))
        } else {
            Ok(self.move_to(Phase::Completed))
        }
    }

    /// Back to the first question with a zero score. The question list is
    /// kept as is.
    pub fn reset(&self) -> Self {
        debug!(from = self.phase.name(), "resetting quiz");
        Self::new(self.questions.clone())
    }

    /// Adopt a rebuilt question list, keeping progress.
    ///
    /// The question on screen keeps its answer and lock: the index follows
    /// its id into the new list. If it is gone, the index is clamped and the
    /// answer is dropped.
    pub fn with_questions(&self, questions: Vec<Question>) -> Self {
        let shown = match self.phase {
            Phase::InProgress { .. } => self.current_question().map(|q| q.id.clone()),
            _ => None,
        };
        let anchored = shown
            .as_ref()
            .and_then(|id| questions.iter().position(|q| &q.id == id));

        let phase = match self.phase {
            _ if questions.is_empty() => Phase::NotReady,
            Phase::NotReady => Phase::InProgress { index: 0 },
            Phase::InProgress { index } => Phase::InProgress {
                index: anchored.unwrap_or_else(|| index.min(questions.len() - 1)),
            },
            Phase::Completed => Phase::Completed,
        };
        let (selected_answer, locked) = if anchored.is_some() || !phase.is_in_progress() {
            (self.selected_answer.clone(), self.locked)
        } else {
            (None, false)
        };
        let next = Self {
            questions,
            selected_answer,
            locked,
            ..self.clone()
        };
        if phase == self.phase {
            next
        } else {
            next.move_to(phase)
        }
    }

    fn ensure(&self, kind: TransitionKind) -> Result<(), EngineError> {
        if self.phase == Phase::NotReady {
            return Err(EngineError::NotReady);
        }
        if kind.guard().check(self) {
            Ok(())
        } else {
            Err(EngineError::blocked(kind, self.phase.name()))
        }
    }

    fn move_to(&self, phase: Phase) -> Self {
        debug!(from = self.phase.name(), to = phase.name(), "phase transition");
        Self {
            phase,
            history: self
                .history
                .record(StateTransition::now(self.phase, phase)),
            ..self.clone()
        }
    }
}
