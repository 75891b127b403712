//! Question model, the bundled question set and the bonus ordering rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

use crate::validation::{self, ValidationError};

const BUNDLED_QUESTIONS: &str = include_str!("../../data/quiz-questions.json");

/// Question identifier.
///
/// Bundled questions carry stable integer ids; user-added questions get the
/// creation time in milliseconds. Both forms, and arbitrary strings, are
/// accepted when reading a document.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl QuestionId {
    /// Id for a question created now.
    pub fn generate() -> Self {
        QuestionId::Number(chrono::Utc::now().timestamp_millis())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(n) => write!(f, "{n}"),
            QuestionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(n: i64) -> Self {
        QuestionId::Number(n)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId::Text(s.to_string())
    }
}

/// A multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub is_bonus: bool,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }

    /// Check the question invariants: non-empty text, at least two non-empty
    /// choices, and a correct answer equal to exactly one of them.
    pub fn check(&self) -> Validation<(), NonEmptyVec<ValidationError>> {
        validation::check_fields(&self.text, &self.choices, &self.correct_answer)
    }

    /// Points awarded (positive) or taken (negative) for answering `choice`.
    pub fn score_delta(&self, choice: &str) -> i32 {
        match (self.is_correct(choice), self.is_bonus) {
            (true, true) => 2,
            (true, false) => 1,
            (false, true) => -1,
            (false, false) => 0,
        }
    }
}

/// Errors reading a question document.
#[derive(Debug, Error)]
pub enum QuestionSetError {
    #[error("failed to read question document {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed question document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The `{ "questions": [...] }` document used for both the bundled set and
/// the persisted user additions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The question set compiled into the crate.
    pub fn bundled() -> Result<Self, QuestionSetError> {
        Self::from_json(BUNDLED_QUESTIONS)
    }

    pub fn from_json(raw: &str) -> Result<Self, QuestionSetError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, QuestionSetError> {
        let raw = fs::read_to_string(path).map_err(|source| QuestionSetError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn contains_id(&self, id: &QuestionId) -> bool {
        self.questions.iter().any(|q| &q.id == id)
    }
}

/// Order questions so that every non-bonus question comes before every bonus
/// question, keeping the input order inside each group.
///
/// Always applied to the full list; never patch an ordered list in place.
pub fn partition_bonus(questions: impl IntoIterator<Item = Question>) -> Vec<Question> {
    let (regular, bonus): (Vec<Question>, Vec<Question>) =
        questions.into_iter().partition(|q| !q.is_bonus);
    regular.into_iter().chain(bonus).collect()
}
