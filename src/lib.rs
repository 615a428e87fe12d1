//! # movie-quiz
//!
//! A terminal trivia game about movie ratings. Each round shows ten movie
//! posters and asks whether the movie's rating is above or below a threshold;
//! results are kept between sessions.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use movie_quiz::{MovieQuiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = MovieQuiz::from_api(
//!         "https://tv-api.com/en/API/Top250Movies/<key>",
//!         "movie-quiz-stats.json",
//!         QuizConfig::default(),
//!     )?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod models;
pub mod questions;
pub mod session;
pub mod statistics;
pub mod terminal;
mod ui;

#[cfg(test)]
mod testing;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tokio::sync::mpsc;

pub use config::QuizConfig;
pub use data::{HttpClient, LoadError, MoviesLoader, MoviesLoading, NetworkClient, NetworkError};
pub use models::{GameResult, Movie, Question};
pub use questions::QuestionFactory;
pub use session::{PlayerAction, QuizEvent, QuizPresenter, QuizView};
pub use statistics::{JsonFileStore, KeyValueStore, MemoryStore, StatisticService, StorageError};
pub use ui::{Screen, TerminalView};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Statistics could not be opened.
    #[error("failed to open statistics: {0}")]
    Storage(#[from] StorageError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz session that can be run in the terminal.
pub struct MovieQuiz {
    presenter: QuizPresenter<TerminalView>,
    events: mpsc::UnboundedReceiver<QuizEvent>,
}

impl MovieQuiz {
    /// Wire a quiz from its collaborators.
    ///
    /// Must be called inside a tokio runtime once the quiz starts running,
    /// since questions are fetched in spawned tasks.
    pub fn new(
        loader: Arc<dyn MoviesLoading>,
        client: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
        config: QuizConfig,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let factory = QuestionFactory::new(loader, client, tx.clone());
        let statistics = StatisticService::new(store);
        let presenter = QuizPresenter::new(TerminalView::new(), factory, statistics, config, tx);

        Self {
            presenter,
            events: rx,
        }
    }

    /// Quiz backed by the movie-list endpoint at `movies_url`, keeping
    /// statistics in the JSON file at `stats_path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use movie_quiz::{MovieQuiz, QuizConfig};
    ///
    /// let quiz = MovieQuiz::from_api(
    ///     "https://tv-api.com/en/API/Top250Movies/<key>",
    ///     "stats.json",
    ///     QuizConfig::default(),
    /// );
    /// ```
    pub fn from_api<P: AsRef<Path>>(
        movies_url: &str,
        stats_path: P,
        config: QuizConfig,
    ) -> Result<Self, QuizError> {
        let client: Arc<dyn HttpClient> = Arc::new(NetworkClient::new());
        let loader = Arc::new(MoviesLoader::new(Arc::clone(&client), movies_url));
        let store = Arc::new(JsonFileStore::open(stats_path.as_ref())?);
        Ok(Self::new(loader, client, store, config))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, load the movie catalog and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        self.presenter.load_data();
        run_event_loop(guard.terminal(), &mut self.presenter, &mut self.events).await
    }

    pub fn presenter(&self) -> &QuizPresenter<TerminalView> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut QuizPresenter<TerminalView> {
        &mut self.presenter
    }
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    presenter: &mut QuizPresenter<TerminalView>,
    events: &mut mpsc::UnboundedReceiver<QuizEvent>,
) -> Result<(), QuizError> {
    loop {
        while let Ok(event) = events.try_recv() {
            presenter.handle(event);
        }

        terminal.draw(|frame| ui::render(frame, presenter.view()))?;

        // Handle input with timeout so background results get drawn
        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match handle_input(presenter.view_mut(), key.code) {
                    Input::Quit => break,
                    Input::Action(action) => presenter.handle(action.into()),
                    Input::Ignored => {}
                }
            }
        }

        tokio::task::yield_now().await;
    }

    Ok(())
}

/// What a key press amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Quit,
    Action(PlayerAction),
    Ignored,
}

fn handle_input(view: &mut TerminalView, key: KeyCode) -> Input {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Input::Quit;
    }

    match view.screen() {
        Screen::Loading => Input::Ignored,
        Screen::Question { .. } => handle_question_input(view, key),
        Screen::Alert(_) => handle_alert_input(view, key),
    }
}

fn handle_question_input(view: &mut TerminalView, key: KeyCode) -> Input {
    let action = match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Left => PlayerAction::Yes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => PlayerAction::No,
        _ => return Input::Ignored,
    };

    if view.take_answer_turn() {
        Input::Action(action)
    } else {
        Input::Ignored
    }
}

fn handle_alert_input(view: &mut TerminalView, key: KeyCode) -> Input {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => {
            view.dismiss_alert().map_or(Input::Ignored, Input::Action)
        }
        _ => Input::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AlertModel, QuizStep};

    fn question_view() -> TerminalView {
        let mut view = TerminalView::new();
        view.show_question(QuizStep {
            image: vec![1],
            question: "Is the rating of this movie greater than 9.0?".to_string(),
            question_number: "2/10".to_string(),
        });
        view
    }

    #[test]
    fn test_quit_from_any_screen() {
        assert_eq!(handle_input(&mut TerminalView::new(), KeyCode::Char('q')), Input::Quit);
        assert_eq!(handle_input(&mut question_view(), KeyCode::Char('Q')), Input::Quit);
    }

    #[test]
    fn test_answer_keys_fire_once_per_question() {
        let mut view = question_view();
        assert_eq!(
            handle_input(&mut view, KeyCode::Char('y')),
            Input::Action(PlayerAction::Yes)
        );
        assert_eq!(handle_input(&mut view, KeyCode::Char('n')), Input::Ignored);

        let mut view = question_view();
        assert_eq!(
            handle_input(&mut view, KeyCode::Right),
            Input::Action(PlayerAction::No)
        );
    }

    #[test]
    fn test_enter_runs_alert_action() {
        let mut view = TerminalView::new();
        view.show_network_error(AlertModel {
            title: "Error".to_string(),
            message: "Check your internet connection and try again.".to_string(),
            button_text: "Try again".to_string(),
            action: PlayerAction::Retry,
        });

        assert_eq!(handle_input(&mut view, KeyCode::Char('y')), Input::Ignored);
        assert_eq!(
            handle_input(&mut view, KeyCode::Enter),
            Input::Action(PlayerAction::Retry)
        );
        assert_eq!(handle_input(&mut view, KeyCode::Enter), Input::Ignored);
    }
}
