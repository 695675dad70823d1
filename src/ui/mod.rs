mod quiz;
mod result;
mod welcome;

use std::time::Instant;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::session::Phase;

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.session.phase() {
        Phase::NotStarted => welcome::render(frame, area, app),
        Phase::InProgress => quiz::render(frame, area, app, now),
        Phase::Finished => result::render(frame, area, app),
    }
}
