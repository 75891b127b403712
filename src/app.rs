//! Command dispatch: the imperative shell around the pure quiz core.
//!
//! A renderer holds a `QuizApp`, draws `screen()` and `view()`, and turns
//! user input into `Command`s. Nothing re-renders implicitly; after each
//! dispatch the renderer reads the current state again.

use thiserror::Error;
use tracing::debug;

use crate::engine::{EngineError, QuizSession, QuizView};
use crate::question::{Question, QuestionId};
use crate::repository::QuestionRepository;
use crate::store::KeyValueStore;
use crate::validation::{QuestionDraft, ValidationErrors};

/// What the renderer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Quiz,
    CreationForm,
}

/// User actions forwarded by a renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LoadQuiz,
    SelectAnswer(String),
    Advance,
    Reset,
    AddQuestion(QuestionDraft),
    ShowCreationForm,
    HideCreationForm,
}

/// Rejected commands. The app state is unchanged after any of these.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),
}

impl CommandError {
    pub fn is_not_ready(&self) -> bool {
        matches!(self, CommandError::Engine(EngineError::NotReady))
    }
}

pub struct QuizApp<K: KeyValueStore> {
    repository: QuestionRepository<K>,
    session: QuizSession,
    screen: Screen,
}

impl<K: KeyValueStore> QuizApp<K> {
    /// Load the question list and start a session.
    pub fn open(repository: QuestionRepository<K>) -> Self {
        let session = QuizSession::new(repository.load());
        Self {
            repository,
            session,
            screen: Screen::Quiz,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn questions(&self) -> &[Question] {
        self.session.questions()
    }

    pub fn repository(&self) -> &QuestionRepository<K> {
        &self.repository
    }

    /// Current quiz snapshot; `None` means "show a loading state".
    pub fn view(&self) -> Option<QuizView> {
        self.session.view()
    }

    pub fn dispatch(&mut self, command: Command) -> Result<(), CommandError> {
        debug!(?command, "dispatch");
        match command {
            Command::LoadQuiz => {
                self.session = QuizSession::new(self.repository.load());
            }
            Command::SelectAnswer(choice) => {
                self.session = self.session.select_answer(&choice)?;
            }
            Command::Advance => {
                self.session = self.session.advance()?;
            }
            Command::Reset => {
                self.session = self.session.reset();
            }
            Command::AddQuestion(draft) => {
                self.add_question(draft)?;
            }
            Command::ShowCreationForm => self.screen = Screen::CreationForm,
            Command::HideCreationForm => self.screen = Screen::Quiz,
        }
        Ok(())
    }

    fn add_question(&mut self, draft: QuestionDraft) -> Result<(), ValidationErrors> {
        let question = draft.into_question(QuestionId::generate())?;
        let questions = self.repository.add(question, self.session.questions());
        self.session = self.session.with_questions(questions);
        self.screen = Screen::Quiz;
        Ok(())
    }
}
