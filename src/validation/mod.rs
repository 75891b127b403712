//! Validation of user-authored questions.
//!
//! Checks use Stillwater's `Validation` type, so a rejected submission lists
//! every problem rather than the first one found.
//!
//! # Example
//!
//! ```rust
//! use quizkit::question::QuestionId;
//! use quizkit::validation::{QuestionDraft, ValidationError};
//!
//! let mut draft = QuestionDraft::default();
//! draft.question = "Capital of Italy?".into();
//! draft.choices = vec!["Rome".into(), "".into(), "Milan".into(), "Turin".into()];
//! draft.select_correct(0);
//!
//! let errors = draft.into_question(QuestionId::generate()).unwrap_err();
//! assert!(errors.contains(&ValidationError::EmptyChoices { indices: vec![1] }));
//! ```

pub mod draft;
pub mod errors;
pub mod rules;

pub use draft::{QuestionDraft, FORM_CHOICE_COUNT};
pub use errors::{ValidationError, ValidationErrors};
pub use rules::{check_fields, FieldCheck, MIN_CHOICES};
