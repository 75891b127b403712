//! What a renderer needs to draw the current session.

use crate::question::Question;
use std::fmt;

/// Outcome message for a locked question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { correct_answer: String },
}

impl Feedback {
    /// Feedback for `question`, or `None` until an answer is locked in.
    pub fn derive(question: &Question, selected: Option<&str>, locked: bool) -> Option<Self> {
        if !locked {
            return None;
        }
        let selected = selected?;
        if question.is_correct(selected) {
            Some(Feedback::Correct)
        } else {
            Some(Feedback::Incorrect {
                correct_answer: question.correct_answer.clone(),
            })
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Correct => f.write_str("Correct!"),
            Feedback::Incorrect { correct_answer } => {
                write!(f, "Incorrect. The correct answer is {correct_answer}.")
            }
        }
    }
}

/// How a choice should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceMark {
    /// Selectable.
    Open,
    /// The correct answer, revealed after locking.
    Correct,
    /// The user's wrong selection.
    Wrong,
    /// Any other choice after locking.
    Dimmed,
}

/// Snapshot of a ready session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub is_bonus: bool,
    pub score: u32,
    pub index: usize,
    pub total: usize,
    pub locked: bool,
    pub selected_answer: Option<String>,
    pub feedback: Option<Feedback>,
    pub completed: bool,
}

impl QuizView {
    /// `Question 2/5`
    pub fn progress_label(&self) -> String {
        format!("Question {}/{}", self.index + 1, self.total)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last() {
            "Finish Quiz"
        } else {
            "Next Question"
        }
    }

    /// Final score line, present once the quiz is completed.
    pub fn summary(&self) -> Option<String> {
        self.completed
            .then(|| format!("Your Score: {} / {}", self.score, self.total))
    }

    pub fn choice_marks(&self) -> Vec<ChoiceMark> {
        self.choices
            .iter()
            .map(|choice| {
                if !self.locked {
                    ChoiceMark::Open
                } else if *choice == self.correct_answer {
                    ChoiceMark::Correct
                } else if self.selected_answer.as_deref() == Some(choice.as_str()) {
                    ChoiceMark::Wrong
                } else {
                    ChoiceMark::Dimmed
                }
            })
            .collect()
    }
}
