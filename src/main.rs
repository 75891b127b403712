//! quizkit CLI: a terminal renderer for the quiz engine.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quizkit::config::QuizConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "quizkit", version, about = "Multiple-choice quiz in the terminal")]
struct Cli {
    /// Config file path (defaults to ./quizkit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the question store
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Question document to use instead of the bundled set
    #[arg(long, global = true)]
    questions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively
    Play,

    /// List the ordered question list
    List,

    /// Add a question without the interactive form
    Add {
        /// Question text
        #[arg(long)]
        question: String,

        /// A choice; repeat for each choice
        #[arg(long = "choice", required = true)]
        choices: Vec<String>,

        /// Text of the correct choice
        #[arg(long)]
        correct: String,

        /// Mark as a bonus question
        #[arg(long)]
        bonus: bool,
    },
}

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizkit=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = QuizConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.store_dir {
        config.store_dir = dir;
    }
    if let Some(path) = cli.questions {
        config.questions = Some(path);
    }

    match cli.command {
        Commands::Play => commands::play::execute(&config),
        Commands::List => commands::list::execute(&config),
        Commands::Add {
            question,
            choices,
            correct,
            bonus,
        } => commands::add::execute(&config, question, choices, correct, bonus),
    }
}
