//! The quiz state machine.
//!
//! `QuizSession` sequences questions through the phases `NotReady`,
//! `InProgress { index }` and `Completed`. Its transitions are pure: they
//! take the current session by reference and return the next one.
//!
//! # Example
//!
//! ```rust
//! use quizkit::engine::{Phase, QuizSession};
//! use quizkit::question::{Question, QuestionId};
//!
//! let session = QuizSession::new(vec![Question {
//!     id: QuestionId::Number(1),
//!     text: "Capital of France?".into(),
//!     choices: vec!["Paris".into(), "Rome".into()],
//!     correct_answer: "Paris".into(),
//!     is_bonus: false,
//! }]);
//!
//! let session = session.select_answer("Paris").unwrap();
//! assert_eq!(session.score(), 1);
//!
//! let session = session.advance().unwrap();
//! assert_eq!(session.phase(), Phase::Completed);
//! ```

mod phase;
mod session;
mod transition;
mod view;

pub use phase::Phase;
pub use session::QuizSession;
pub use transition::{EngineError, TransitionKind};
pub use view::{ChoiceMark, Feedback, QuizView};
