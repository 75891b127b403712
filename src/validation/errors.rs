//! Validation errors for user-authored questions.

use std::fmt;
use thiserror::Error;

/// A single reason a question draft (or a stored question) was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a question")]
    EmptyQuestion,

    #[error("Please fill in all choices")]
    EmptyChoices { indices: Vec<usize> },

    #[error("At least {min} choices are required (found {found})")]
    TooFewChoices { found: usize, min: usize },

    #[error("The correct answer '{0}' appears in more than one choice")]
    DuplicateChoice(String),

    #[error("Please select a correct answer")]
    MissingCorrectAnswer,

    #[error("The correct answer '{0}' is not one of the choices")]
    CorrectAnswerNotAChoice(String),
}

/// Every failure found in one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &ValidationError) -> bool {
        self.0.contains(error)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
