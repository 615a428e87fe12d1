use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use crate::session::{AlertModel, PlayerAction};

pub fn render(frame: &mut Frame, area: Rect, alert: &AlertModel) {
    let message_height = alert.message.lines().count() as u16;
    let [_, dialog, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(message_height + 6),
        Constraint::Fill(1),
    ])
    .areas(area);

    // Errors are red, finished rounds use the quiz accent
    let accent = match alert.action {
        PlayerAction::Retry => Color::Red,
        _ => Color::Cyan,
    };

    let mut lines: Vec<Line> = alert.message.lines().map(Line::from).collect();
    lines.insert(0, Line::default());
    lines.push(Line::default());
    lines.push(Line::from(vec![
        "[ENTER] ".fg(Color::DarkGray),
        alert.button_text.as_str().fg(Color::Green).bold(),
    ]));

    let dialog_block = Block::bordered()
        .title(alert.title.as_str().fg(accent).bold())
        .title_alignment(Alignment::Center)
        .border_style(accent)
        .padding(Padding::horizontal(2));

    frame.render_widget(
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .block(dialog_block),
        dialog,
    );
}
