//! Presenter-side application state.
//!
//! `App` owns the [`QuizSession`] plus everything the views need that is
//! not session state: the loaded question pool, the configuration, the
//! random source, the option cursor, and the review scroll offset. User
//! intents are routed through here into session operations; the session's
//! fields are never mutated directly by the UI.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::QuizConfig;
use crate::models::Question;
use crate::session::QuizSession;

/// Lines the review screen renders per question.
const REVIEW_LINES_PER_QUESTION: usize = 4;

pub struct App {
    pub session: QuizSession,
    pool: Vec<Question>,
    config: QuizConfig,
    /// Highlighted option index within the current question.
    cursor: usize,
    result_scroll: usize,
    rng: StdRng,
}

impl App {
    pub fn new(pool: Vec<Question>, config: QuizConfig) -> Self {
        Self {
            session: QuizSession::new(),
            pool,
            config,
            cursor: 0,
            result_scroll: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Run the pull-based expiry check. Called once per render tick, before
    /// drawing, so a lapsed deadline is observed within one tick.
    pub fn tick(&mut self, now: Instant) {
        self.session.check_expiry(now);
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn selected_option(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn start_quiz(&mut self, now: Instant) {
        let result = self.session.start(
            &self.pool,
            self.config.questions_per_quiz,
            self.config.duration,
            now,
            &mut self.rng,
        );
        if let Err(err) = result {
            log::warn!("start rejected: {err}");
            return;
        }
        self.cursor = 0;
        self.result_scroll = 0;
    }

    pub fn highlight_next_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Record the highlighted option as the answer for the current question.
    pub fn confirm_highlighted(&mut self, now: Instant) {
        let position = self.session.position();
        let Some(key) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(self.cursor))
            .map(|option| option.key.clone())
        else {
            return;
        };

        if let Err(err) = self.session.select_answer(position, &key, now) {
            log::warn!("answer rejected at position {position}: {err}");
        }
    }

    pub fn go_next(&mut self) {
        if self.session.go_next().is_ok() {
            self.sync_cursor();
        }
    }

    pub fn go_previous(&mut self) {
        if self.session.go_previous().is_ok() {
            self.sync_cursor();
        }
    }

    pub fn finish_quiz(&mut self, now: Instant) {
        if let Err(err) = self.session.finish(now) {
            log::warn!("finish rejected: {err}");
        }
    }

    /// Discard the session and return to the start screen.
    pub fn restart(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self
            .session
            .questions()
            .len()
            .saturating_sub(1)
            .saturating_mul(REVIEW_LINES_PER_QUESTION);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn option_count(&self) -> Option<usize> {
        self.session
            .current_question()
            .map(|question| question.options.len())
            .filter(|count| *count > 0)
    }

    /// Move the cursor to the recorded answer at the current position, or
    /// the first option when nothing is recorded yet.
    fn sync_cursor(&mut self) {
        let position = self.session.position();
        let recorded = self.session.answers().get(position).cloned().flatten();
        self.cursor = match (recorded, self.session.current_question()) {
            (Some(key), Some(question)) => question
                .options
                .iter()
                .position(|option| option.key == key)
                .unwrap_or(0),
            _ => 0,
        };
    }
}
