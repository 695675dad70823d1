//! # timed-quiz
//!
//! A timed, single-session multiple-choice quiz for the terminal. A random
//! subset of a question bank is presented one question at a time against a
//! countdown; finishing (or running out of time) shows a score and a
//! per-question review.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the question bank and run with the default 10 questions
//!     // in 10 minutes.
//!     let quiz = Quiz::from_json("questions.json", QuizConfig::default())?;
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod config;
mod data;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use config::{QuizConfig, DEFAULT_QUESTIONS_PER_QUIZ, DEFAULT_QUIZ_DURATION_SECS};
pub use data::{load_question_bank, LoadError};
pub use models::{AnswerOption, Question};
pub use session::{percent, sample, score, Phase, QuizSession, SessionError};

/// How often the UI redraws while waiting for input. The countdown and the
/// expiry check both ride on this cadence.
const TICK: Duration = Duration::from_millis(250);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading the question bank.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from an already-loaded question pool.
    pub fn new(pool: Vec<Question>, config: QuizConfig) -> Self {
        Self {
            app: App::new(pool, config),
        }
    }

    /// Load the question bank from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("questions.json", QuizConfig::default())
    ///     .expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let pool = load_question_bank(path)?;
        Ok(Self::new(pool, config))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
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

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        // The expiry check runs before every draw, so a lapsed deadline is
        // observed within one tick even when no key is pressed.
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(app, key.code) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.session.phase() {
        Phase::NotStarted => handle_welcome_input(app, key),
        Phase::InProgress => handle_quiz_input(app, key),
        Phase::Finished => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz(Instant::now());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.highlight_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.highlight_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.confirm_highlighted(Instant::now());
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.go_previous();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.go_next();
            false
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.finish_quiz(Instant::now());
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
