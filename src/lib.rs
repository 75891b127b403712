//! Quizkit: a pure functional quiz engine
//!
//! Quizkit follows the "pure core, imperative shell" split. Scoring,
//! sequencing, ordering and validation are pure functions over plain
//! values; reading and writing the local store happens only in the
//! repository, and logging goes through `tracing`.
//!
//! # Core Concepts
//!
//! - **Question**: a multiple-choice prompt, optionally a bonus question
//!   (double credit, one-point penalty floored at zero)
//! - **QuizSession**: the state machine stepping through an ordered list
//! - **QuestionRepository**: bundled defaults merged with user additions,
//!   bonus questions always last
//! - **QuizApp**: command dispatch for a renderer
//!
//! # Example
//!
//! ```rust
//! use quizkit::app::{Command, QuizApp};
//! use quizkit::question::QuestionSet;
//! use quizkit::repository::QuestionRepository;
//! use quizkit::store::MemoryStore;
//!
//! let repository = QuestionRepository::new(MemoryStore::new(), QuestionSet::bundled().unwrap());
//! let mut app = QuizApp::open(repository);
//!
//! let first = app.view().unwrap();
//! app.dispatch(Command::SelectAnswer(first.correct_answer.clone())).unwrap();
//! assert_eq!(app.view().unwrap().score, 1);
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod engine;
pub mod question;
pub mod repository;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use app::{Command, CommandError, QuizApp, Screen};
pub use engine::{EngineError, Feedback, Phase, QuizSession, QuizView};
pub use question::{partition_bonus, Question, QuestionId, QuestionSet};
pub use repository::QuestionRepository;
pub use validation::{QuestionDraft, ValidationError, ValidationErrors};
