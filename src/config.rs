//! Runtime configuration for a quiz run.

use std::time::Duration;

pub const DEFAULT_QUESTIONS_PER_QUIZ: usize = 10;
pub const DEFAULT_QUIZ_DURATION_SECS: u64 = 600;

/// Tunables for a session, overridable from the command line.
#[derive(Debug, Clone, Copy)]
pub struct QuizConfig {
    /// How many questions to draw from the bank.
    pub questions_per_quiz: usize,
    /// Wall-clock time allowed before the session is force-finished.
    pub duration: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_per_quiz: DEFAULT_QUESTIONS_PER_QUIZ,
            duration: Duration::from_secs(DEFAULT_QUIZ_DURATION_SECS),
        }
    }
}
