//! The quiz session state machine.
//!
//! A session moves `NotStarted -> InProgress -> Finished` and never back,
//! except through [`QuizSession::reset`], which discards everything. Time
//! is always passed in as an explicit `now` so callers (and tests) own the
//! clock; there is no background timer. The presenter is expected to call
//! [`QuizSession::check_expiry`] before every render, which makes expiry
//! detection pull-based and bounded by the render cadence.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::models::Question;

use super::{sampler, scorer, SessionError};

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// A single timed quiz run.
pub struct QuizSession {
    phase: Phase,
    questions: Vec<Question>,
    position: usize,
    /// Answer key per question position; `None` means unanswered.
    answers: Vec<Option<String>>,
    /// Set exactly once, at start.
    deadline: Option<Instant>,
    /// Whether the finish was forced by the timer rather than the user.
    time_up: bool,
    /// Cached at finish; derived from questions + answers, never mutated
    /// independently.
    score: Option<usize>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::NotStarted,
            questions: Vec::new(),
            position: 0,
            answers: Vec::new(),
            deadline: None,
            time_up: false,
            score: None,
        }
    }

    /// Draw the question set and begin the countdown.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        pool: &[Question],
        count: usize,
        duration: Duration,
        now: Instant,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        let questions = sampler::sample(pool, count, rng)?;
        log::debug!(
            "session started with {} questions, {}s on the clock",
            questions.len(),
            duration.as_secs()
        );

        self.answers = vec![None; questions.len()];
        self.questions = questions;
        self.position = 0;
        self.deadline = Some(now + duration);
        self.time_up = false;
        self.score = None;
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Record (or overwrite) the answer for a question position.
    ///
    /// At or past the deadline the session is finished as if the timer had
    /// been observed expiring, and the late answer is not recorded.
    pub fn select_answer(
        &mut self,
        position: usize,
        key: &str,
        now: Instant,
    ) -> Result<(), SessionError> {
        self.check_expiry(now);
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }

        let question = self
            .questions
            .get(position)
            .ok_or(SessionError::InvalidPosition {
                position,
                len: self.questions.len(),
            })?;
        if !question.has_option(key) {
            return Err(SessionError::InvalidOption {
                position,
                key: key.to_string(),
            });
        }

        self.answers[position] = Some(key.to_string());
        Ok(())
    }

    /// Step to the next question; ignored at the last position.
    pub fn go_next(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if self.position + 1 < self.questions.len() {
            self.position += 1;
        }
        Ok(())
    }

    /// Step to the previous question; ignored at position zero.
    pub fn go_previous(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if self.position > 0 {
            self.position -= 1;
        }
        Ok(())
    }

    /// Finish the session, caching the score. `time_up` records whether
    /// the deadline had already passed when the call was made.
    pub fn finish(&mut self, now: Instant) -> Result<(), SessionError> {
        if self.phase != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        let timed_out = self.deadline.is_some_and(|deadline| now >= deadline);
        self.complete(timed_out);
        Ok(())
    }

    /// Pull-based expiry check: if the deadline has passed, finish the
    /// session as timer-forced. Safe to call in any phase, any number of
    /// times; once finished it has no further effect.
    pub fn check_expiry(&mut self, now: Instant) {
        if self.phase == Phase::InProgress
            && self.deadline.is_some_and(|deadline| now >= deadline)
        {
            self.complete(true);
        }
    }

    /// Discard the session and return to a fresh, unstarted one.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Time left on the clock, recomputed from the fixed deadline.
    pub fn remaining_time(&self, now: Instant) -> Result<Duration, SessionError> {
        match (self.phase, self.deadline) {
            (Phase::InProgress, Some(deadline)) => Ok(deadline.saturating_duration_since(now)),
            _ => Err(SessionError::NotInProgress),
        }
    }

    fn complete(&mut self, time_up: bool) {
        let score = scorer::score(&self.questions, &self.answers);
        log::debug!(
            "session finished (time_up={time_up}), score {score}/{}",
            self.questions.len()
        );
        self.score = Some(score);
        self.time_up = time_up;
        self.phase = Phase::Finished;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn time_up(&self) -> bool {
        self.time_up
    }

    /// Cached final score; `None` until the session has finished.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    /// Cached final score as a percentage of the question count.
    pub fn score_percent(&self) -> Option<f64> {
        self.score
            .map(|score| scorer::percent(score, self.questions.len()))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
