//! Field checks shared by the creation form and the store loader.
//!
//! Each check yields a `Validation` so that a submission reports every
//! problem at once instead of stopping at the first.

use crate::validation::errors::ValidationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Fewest choices a question may have.
pub const MIN_CHOICES: usize = 2;

pub type FieldCheck = Validation<(), NonEmptyVec<ValidationError>>;

/// Run every field check, accumulating all failures.
pub fn check_fields(text: &str, choices: &[String], correct_answer: &str) -> FieldCheck {
    let checks = vec![
        check_text(text),
        check_choice_count(choices),
        check_choices_filled(choices),
        check_correct_answer(choices, correct_answer),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check_text(text: &str) -> FieldCheck {
    if text.trim().is_empty() {
        Validation::fail(ValidationError::EmptyQuestion)
    } else {
        Validation::success(())
    }
}

fn check_choice_count(choices: &[String]) -> FieldCheck {
    if choices.len() < MIN_CHOICES {
        Validation::fail(ValidationError::TooFewChoices {
            found: choices.len(),
            min: MIN_CHOICES,
        })
    } else {
        Validation::success(())
    }
}

fn check_choices_filled(choices: &[String]) -> FieldCheck {
    let indices: Vec<usize> = choices
        .iter()
        .enumerate()
        .filter(|(_, c)| c.trim().is_empty())
        .map(|(i, _)| i)
        .collect();

    if indices.is_empty() {
        Validation::success(())
    } else {
        Validation::fail(ValidationError::EmptyChoices { indices })
    }
}

/// The correct answer must match exactly one choice.
fn check_correct_answer(choices: &[String], correct_answer: &str) -> FieldCheck {
    if correct_answer.trim().is_empty() {
        return Validation::fail(ValidationError::MissingCorrectAnswer);
    }
    match choices.iter().filter(|c| *c == correct_answer).count() {
        0 => Validation::fail(ValidationError::CorrectAnswerNotAChoice(
            correct_answer.to_string(),
        )),
        1 => Validation::success(()),
        _ => Validation::fail(ValidationError::DuplicateChoice(
            correct_answer.to_string(),
        )),
    }
}
