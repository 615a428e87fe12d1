//! Hand-written fakes for the trait seams, shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use crate::data::{HttpClient, LoadError, MoviesLoading, NetworkError};
use crate::models::Movie;
use crate::session::{AlertModel, QuizStep, QuizView};

pub(crate) const POSTER: &[u8] = &[0x89, b'P', b'N', b'G'];

/// `count` movies with ids `tt0..`, ratings spread between 6.0 and 9.9.
pub(crate) fn movies(count: usize) -> Vec<Movie> {
    (0..count)
        .map(|i| Movie {
            id: format!("tt{}", i),
            title: format!("Movie {}", i),
            rating: 6.0 + (i % 14) as f32 * 0.3,
            image_url: format!("https://img.test/poster{}._V1_Ratio0.67_AL_.jpg", i),
        })
        .collect()
}

/// Serves canned bodies by URL; unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct StubHttpClient {
    responses: HashMap<String, Result<Vec<u8>, u16>>,
    budget: Option<AtomicUsize>,
    outage: Option<AtomicUsize>,
}

impl StubHttpClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, url: &str, body: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), Ok(body));
        self
    }

    pub(crate) fn with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), Err(status));
        self
    }

    /// Answer 503 to everything after `successes` fetches.
    pub(crate) fn fail_after(mut self, successes: usize) -> Self {
        self.budget = Some(AtomicUsize::new(successes));
        self
    }

    /// The first `failures` fetches answer 503; later ones are served normally.
    pub(crate) fn fail_first(mut self, failures: usize) -> Self {
        self.outage = Some(AtomicUsize::new(failures));
        self
    }

    /// A well-formed movie list of `count` entries at `url`.
    pub(crate) fn with_catalog(self, url: &str, count: usize) -> Self {
        let items: Vec<_> = movies(count)
            .into_iter()
            .map(|movie| {
                json!({
                    "id": movie.id,
                    "fullTitle": movie.title,
                    "imDbRating": movie.rating.to_string(),
                    "image": movie.image_url,
                })
            })
            .collect();
        let body = json!({ "errorMessage": "", "items": items }).to_string();
        self.with_body(url, body.into_bytes())
    }

    /// Posters for every movie in `catalog`.
    pub(crate) fn with_posters(self, catalog: &[Movie]) -> Self {
        catalog.iter().fold(self, |client, movie| {
            client.with_body(&movie.resized_image_url(), POSTER.to_vec())
        })
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        if let Some(outage) = &self.outage {
            let failing = outage.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if failing.is_ok() {
                return Err(NetworkError::Status(503));
            }
        }
        if let Some(budget) = &self.budget {
            let spent = budget.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if spent.is_err() {
                return Err(NetworkError::Status(503));
            }
        }
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(NetworkError::Status(*status)),
            None => Err(NetworkError::Status(404)),
        }
    }
}

/// Replays a fixed sequence of catalog results.
pub(crate) struct StaticLoader {
    responses: Mutex<VecDeque<Result<Vec<Movie>, LoadError>>>,
}

impl StaticLoader {
    pub(crate) fn new(responses: Vec<Result<Vec<Movie>, LoadError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    pub(crate) fn ok(movies: Vec<Movie>) -> Self {
        Self::new(vec![Ok(movies)])
    }

    pub(crate) fn failing(err: LoadError) -> Self {
        Self::new(vec![Err(err)])
    }
}

#[async_trait]
impl MoviesLoading for StaticLoader {
    async fn load_movies(&self) -> Result<Vec<Movie>, LoadError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LoadError::Unknown("no more catalog responses".to_string())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewCall {
    Question(QuizStep),
    AnswerResult(bool),
    Results(AlertModel),
    ShowLoading,
    HideLoading,
    Error(AlertModel),
}

/// Records every command it receives.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub(crate) calls: Vec<ViewCall>,
}

impl RecordingView {
    pub(crate) fn questions(&self) -> Vec<&QuizStep> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::Question(step) => Some(step),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn errors(&self) -> Vec<&AlertModel> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::Error(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn results(&self) -> Vec<&AlertModel> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ViewCall::Results(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }
}

impl QuizView for RecordingView {
    fn show_question(&mut self, step: QuizStep) {
        self.calls.push(ViewCall::Question(step));
    }

    fn show_answer_result(&mut self, is_correct: bool) {
        self.calls.push(ViewCall::AnswerResult(is_correct));
    }

    fn show_results(&mut self, result: AlertModel) {
        self.calls.push(ViewCall::Results(result));
    }

    fn show_loading_indicator(&mut self) {
        self.calls.push(ViewCall::ShowLoading);
    }

    fn hide_loading_indicator(&mut self) {
        self.calls.push(ViewCall::HideLoading);
    }

    fn show_network_error(&mut self, alert: AlertModel) {
        self.calls.push(ViewCall::Error(alert));
    }
}
