use std::time::{Duration, Instant};

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let Some(question) = app.session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_status_line(frame, chunks[0], app, now);
    render_category(frame, chunks[1], &question.category);
    render_question_text(frame, chunks[2], &question.prompt);
    render_options(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let progress = format!(
        "Question {}/{}",
        app.session.position() + 1,
        app.session.questions().len()
    );
    frame.render_widget(Paragraph::new(progress).fg(Color::DarkGray), halves[0]);

    let remaining = app.session.remaining_time(now).unwrap_or_default();
    let timer_color = if remaining < Duration::from_secs(60) {
        Color::Red
    } else {
        Color::DarkGray
    };
    let timer = format!(
        "Time {:02}:{:02}",
        remaining.as_secs() / 60,
        remaining.as_secs() % 60
    );
    let widget = Paragraph::new(timer)
        .alignment(Alignment::Right)
        .fg(timer_color)
        .bold();
    frame.render_widget(widget, halves[1]);
}

fn render_category(frame: &mut Frame, area: Rect, category: &str) {
    let widget = Paragraph::new(format!("Category: {category}")).fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.session.current_question() else {
        return;
    };
    let recorded = app
        .session
        .answers()
        .get(app.session.position())
        .cloned()
        .flatten();

    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = index == app.selected_option();
        let is_recorded = recorded.as_deref() == Some(option.key.as_str());

        let style = match (is_highlighted, is_recorded) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_highlighted { ">" } else { " " };
        let chosen = if is_recorded { "  [chosen]" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option.key), style),
            Span::styled(option.label.as_str(), style),
            Span::styled(chosen, Style::default().fg(Color::Green)),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget =
        Paragraph::new("j/k move  ·  enter answer  ·  h/l prev/next  ·  f finish  ·  q quit")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
