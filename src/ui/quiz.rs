use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::session::QuizStep;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    step: &QuizStep,
    feedback: Option<bool>,
    answers_enabled: bool,
    busy: bool,
) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], &step.question_number);
    render_poster(frame, chunks[1], step.image.len(), feedback);
    render_question_text(frame, chunks[2], &step.question);
    render_controls(frame, chunks[3], answers_enabled, busy);
}

fn render_progress(frame: &mut Frame, area: Rect, question_number: &str) {
    let widget = Paragraph::new(question_number)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_poster(frame: &mut Frame, area: Rect, image_size: usize, feedback: Option<bool>) {
    let border_color = match feedback {
        Some(true) => Color::Green,
        Some(false) => Color::Red,
        None => Color::DarkGray,
    };

    let content = vec![
        Line::from(""),
        Line::from("POSTER".fg(Color::Gray).bold()),
        Line::from(format!("{:.1} KiB", image_size as f64 / 1024.0).fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, answers_enabled: bool, busy: bool) {
    let text = if busy {
        "loading next question...  ·  q quit"
    } else if answers_enabled {
        "y yes  ·  n no  ·  q quit"
    } else {
        "q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
