//! Implementation of the `list` command.

use anyhow::{Context, Result};
use quizkit::config::QuizConfig;

pub fn execute(config: &QuizConfig) -> Result<()> {
    let repository = config
        .repository()
        .context("failed to load the question set")?;
    let questions = repository.load();

    for (i, q) in questions.iter().enumerate() {
        let tag = if q.is_bonus { " [bonus]" } else { "" };
        println!("{}. {}{} (id {})", i + 1, q.text, tag, q.id);
        println!("   {}", q.choices.join(" | "));
    }

    let bonus = questions.iter().filter(|q| q.is_bonus).count();
    println!("{} questions ({} bonus)", questions.len(), bonus);
    Ok(())
}
