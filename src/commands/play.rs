//! Implementation of the `play` command: a line-based quiz renderer.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use quizkit::app::{Command, QuizApp};
use quizkit::config::QuizConfig;
use quizkit::engine::{ChoiceMark, QuizView};
use quizkit::store::KeyValueStore;
use quizkit::validation::QuestionDraft;

const HELP: &str = "Enter a choice number, n = next, r = restart, a = add question, q = quit";

pub fn execute(config: &QuizConfig) -> Result<()> {
    let repository = config
        .repository()
        .context("failed to load the question set")?;
    let mut app = QuizApp::open(repository);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut app, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive `app` from `input` until `q` or end of input.
pub fn run<K, R, W>(app: &mut QuizApp<K>, input: R, mut out: W) -> io::Result<()>
where
    K: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        render(app, &mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match line.trim() {
            "q" => break,
            "" => continue,
            "n" => Command::Advance,
            "r" => Command::Reset,
            "a" => {
                if let Err(e) = app.dispatch(Command::ShowCreationForm) {
                    writeln!(out, "! {e}")?;
                }
                match read_draft(&mut lines, &mut out)? {
                    Some(draft) => Command::AddQuestion(draft),
                    None => Command::HideCreationForm,
                }
            }
            other => match parse_choice(other, app.view().as_ref()) {
                Some(choice) => Command::SelectAnswer(choice),
                None => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
            },
        };

        let adding = matches!(command, Command::AddQuestion(_));
        match app.dispatch(command) {
            Ok(()) if adding => writeln!(out, "Question added.")?,
            Ok(()) => {}
            Err(e) => {
                writeln!(out, "! {e}")?;
                if adding {
                    // The form is discarded on rejection; nothing was added.
                    if let Err(e) = app.dispatch(Command::HideCreationForm) {
                        writeln!(out, "! {e}")?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Map a 1-based number to the choice text of the current question.
fn parse_choice(input: &str, view: Option<&QuizView>) -> Option<String> {
    let n: usize = input.parse().ok()?;
    view?.choices.get(n.checked_sub(1)?).cloned()
}

fn render<K: KeyValueStore, W: Write>(app: &QuizApp<K>, out: &mut W) -> io::Result<()> {
    let Some(view) = app.view() else {
        writeln!(out, "Loading questions...")?;
        return Ok(());
    };

    writeln!(out)?;
    if view.completed {
        writeln!(out, "Quiz Completed!")?;
        if let Some(summary) = view.summary() {
            writeln!(out, "{summary}")?;
        }
        if let Some(elapsed) = app.session().history().duration() {
            writeln!(out, "Time: {}s", elapsed.as_secs())?;
        }
        writeln!(out, "r) Retake Quiz   a) Add Questions   q) Quit")?;
        return Ok(());
    }

    writeln!(out, "Score: {} | {}", view.score, view.progress_label())?;
    if view.is_bonus {
        writeln!(out, "BONUS QUESTION")?;
    }
    writeln!(out, "{}", view.question)?;
    for (i, (choice, mark)) in view.choices.iter().zip(view.choice_marks()).enumerate() {
        let suffix = match mark {
            ChoiceMark::Correct => "  <- correct",
            ChoiceMark::Wrong => "  <- your answer",
            ChoiceMark::Open | ChoiceMark::Dimmed => "",
        };
        writeln!(out, "  {}) {}{}", i + 1, choice, suffix)?;
    }
    if let Some(feedback) = &view.feedback {
        writeln!(out, "{feedback}")?;
    }
    if view.locked {
        writeln!(out, "n) {}", view.advance_label())?;
    }
    Ok(())
}

/// Prompt for every form field. `None` if input ends first.
fn read_draft<I, W>(lines: &mut I, out: &mut W) -> io::Result<Option<QuestionDraft>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    writeln!(out, "Create New Question")?;
    let mut draft = QuestionDraft::default();

    let Some(question) = prompt(lines, out, "Question")? else {
        return Ok(None);
    };
    draft.question = question;

    for (i, slot) in draft.choices.iter_mut().enumerate() {
        let Some(choice) = prompt(lines, out, &format!("Choice {}", i + 1))? else {
            return Ok(None);
        };
        *slot = choice;
    }

    let Some(correct) = prompt(lines, out, "Correct choice number")? else {
        return Ok(None);
    };
    if let Some(index) = correct.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)) {
        draft.select_correct(index);
    }

    let Some(bonus) = prompt(lines, out, "Bonus question? (y/N)")? else {
        return Ok(None);
    };
    draft.is_bonus = matches!(bonus.trim(), "y" | "Y" | "yes");

    Ok(Some(draft))
}

fn prompt<I, W>(lines: &mut I, out: &mut W, label: &str) -> io::Result<Option<String>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(out, "{label}: ")?;
    out.flush()?;
    lines.next().transpose()
}
