//! The question-creation form's working value.

use crate::question::{Question, QuestionId};
use crate::validation::errors::ValidationErrors;
use crate::validation::rules::{check_fields, FieldCheck};
use stillwater::validation::Validation;

/// Number of choice fields the creation form shows.
pub const FORM_CHOICE_COUNT: usize = 4;

/// Unvalidated input from the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    pub is_bonus: bool,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            question: String::new(),
            choices: vec![String::new(); FORM_CHOICE_COUNT],
            correct_answer: String::new(),
            is_bonus: false,
        }
    }
}

impl QuestionDraft {
    pub fn new(
        question: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
        is_bonus: bool,
    ) -> Self {
        Self {
            question: question.into(),
            choices,
            correct_answer: correct_answer.into(),
            is_bonus,
        }
    }

    /// Mark the choice at `index` as the correct answer.
    ///
    /// Out-of-range indices clear the selection.
    pub fn select_correct(&mut self, index: usize) {
        self.correct_answer = self.choices.get(index).cloned().unwrap_or_default();
    }

    /// Trimmed copy of every field.
    fn trimmed(&self) -> Self {
        Self {
            question: self.question.trim().to_string(),
            choices: self.choices.iter().map(|c| c.trim().to_string()).collect(),
            correct_answer: self.correct_answer.trim().to_string(),
            is_bonus: self.is_bonus,
        }
    }

    /// Check the draft without consuming it.
    pub fn validate(&self) -> FieldCheck {
        let draft = self.trimmed();
        check_fields(&draft.question, &draft.choices, &draft.correct_answer)
    }

    /// Turn the draft into a question with the given id.
    ///
    /// All values are trimmed. On failure every problem is reported and no
    /// question is produced.
    pub fn into_question(self, id: QuestionId) -> Result<Question, ValidationErrors> {
        let draft = self.trimmed();
        match check_fields(&draft.question, &draft.choices, &draft.correct_answer) {
            Validation::Success(_) => Ok(Question {
                id,
                text: draft.question,
                choices: draft.choices,
                correct_answer: draft.correct_answer,
                is_bonus: draft.is_bonus,
            }),
            Validation::Failure(errors) => {
                Err(ValidationErrors::new(errors.iter().cloned().collect()))
            }
        }
    }
}
