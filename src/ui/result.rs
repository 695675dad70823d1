use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::session::{percent, score};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let total = session.questions().len();
    let final_score = session
        .score()
        .unwrap_or_else(|| score(session.questions(), session.answers()));
    let percentage = percent(final_score, total);
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    if session.time_up() {
        render_time_up_banner(frame, chunks[0]);
    }
    render_score_summary(frame, chunks[1], final_score, total, percentage, grade_color);
    render_review(frame, chunks[2], app, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn verdict(percentage: f64) -> &'static str {
    if percentage >= 75.0 {
        "Excellent work!"
    } else if percentage >= 50.0 {
        "Good effort!"
    } else {
        "Keep practicing! Review the answers below."
    }
}

fn render_time_up_banner(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("TIME'S UP - the quiz has ended automatically")
        .alignment(Alignment::Center)
        .fg(Color::Red)
        .bold();
    frame.render_widget(widget, area);
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(verdict(percentage).fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let session = &app.session;
    let mut lines: Vec<Line> = Vec::with_capacity(session.questions().len() * 4);

    for (index, question) in session.questions().iter().enumerate() {
        let recorded = session.answers().get(index).cloned().flatten();
        let is_correct = recorded.as_deref() == Some(question.answer.as_str());
        let (symbol, color) = if is_correct {
            ("+", Color::Green)
        } else {
            ("-", Color::Red)
        };

        let your_answer = match &recorded {
            Some(key) => format!(
                "{}. {}",
                key,
                question.option_label(key).unwrap_or_default()
            ),
            None => "Not Answered".to_string(),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_question(&question.prompt),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("       your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(your_answer, Style::default().fg(color)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("       correct:     ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}. {}", question.answer, question.correct_label()),
                Style::default().fg(Color::Green),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
