mod alert;
mod loading;
mod quiz;
mod screen;

use ratatui::{prelude::*, widgets::Block};

pub use screen::{Screen, TerminalView};

pub fn render(frame: &mut Frame, view: &TerminalView) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match view.screen() {
        Screen::Loading => loading::render(frame, area, view.is_busy()),
        Screen::Question {
            step,
            feedback,
            answers_enabled,
        } => quiz::render(frame, area, step, *feedback, *answers_enabled, view.is_busy()),
        Screen::Alert(alert) => alert::render(frame, area, alert),
    }
}
