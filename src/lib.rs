//! # quiz-engine
//!
//! A terminal quiz over five question kinds: multiple choice, true/false,
//! fill-in-the-blank, sorting and matching. Each question is answered
//! through an in-memory interaction surface, checked exactly once, and
//! counted into a running correct/incorrect tally.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_engine::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file, shuffled with a fixed seed
//!     let quiz = Quiz::from_json("questions.json", Some(7))?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The engine can also be driven without a terminal:
//!
//! ```rust
//! use quiz_engine::engine::Command;
//! use quiz_engine::models::TruthValue;
//! use quiz_engine::{Question, Session};
//!
//! let questions: Vec<Question> =
//!     serde_json::from_str(r#"[{"type": "trueFalse", "answer": "wahr"}]"#).unwrap();
//! let mut session = Session::new(questions, Some(1));
//! session.dispatch(Command::Choose(TruthValue::Wahr));
//! assert_eq!(session.check(), Some(true));
//! ```

mod app;
mod data;
pub mod engine;
pub mod logging;
pub mod models;
pub mod session;
pub mod shuffle;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use data::{LoadError, load_questions_from_json};
pub use engine::{Command, Response, Surface, evaluate, render};
pub use models::{AppState, Question};
pub use session::{Phase, Score, Session};

use engine::Side;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The log subscriber could not be installed.
    #[error("Failed to set up logging: {0}")]
    Logging(String),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    ///
    /// The questions are shuffled once here; `seed` makes that and every
    /// later shuffle reproducible.
    pub fn new(questions: Vec<Question>, seed: Option<u64>) -> Self {
        Self {
            app: App::new(Session::new(questions, seed)),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_engine::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json", None).expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions, seed))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.switch_column(Side::Left),
        KeyCode::Right | KeyCode::Char('l') => app.switch_column(Side::Right),
        KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('g') => app.grab_token(),
        KeyCode::Esc => app.release(),
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(blank) = digit.to_digit(10) {
                app.pick_blank(blank as usize - 1);
            }
        }
        KeyCode::Enter => app.check_answer(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.next_question(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q'))
}
