use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, busy: bool) {
    let [_, panel, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .areas(area);

    let status = if busy { "Loading movies..." } else { "" };
    let lines = vec![
        Line::default(),
        Line::from(status.fg(Color::Yellow)),
        Line::default(),
    ];

    let panel_block = Block::bordered()
        .title(" MOVIE QUIZ ".fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center)
        .border_style(Color::DarkGray);

    frame.render_widget(Paragraph::new(lines).centered().block(panel_block), panel);
}
