//! Implementation of the `add` command.

use anyhow::{Context, Result};
use quizkit::app::{Command, QuizApp};
use quizkit::config::QuizConfig;
use quizkit::validation::QuestionDraft;

pub fn execute(
    config: &QuizConfig,
    question: String,
    choices: Vec<String>,
    correct: String,
    bonus: bool,
) -> Result<()> {
    let repository = config
        .repository()
        .context("failed to load the question set")?;
    let mut app = QuizApp::open(repository);

    let draft = QuestionDraft::new(question, choices, correct, bonus);
    app.dispatch(Command::AddQuestion(draft))?;

    let total = app.questions().len();
    println!("Added question. {total} questions in total.");
    Ok(())
}
