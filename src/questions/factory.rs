use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;

use crate::data::{HttpClient, LoadError, MoviesLoading};
use crate::models::{Movie, Question};
use crate::session::QuizEvent;

use super::picker::MoviePicker;

/// Ratings a question may compare against.
pub const RATING_THRESHOLDS: [f32; 6] = [7.0, 7.5, 8.0, 8.5, 9.0, 9.5];

struct FactoryState {
    picker: MoviePicker,
    rng: StdRng,
}

/// Produces questions in background tasks and reports them as [`QuizEvent`]s.
///
/// Each call reports exactly one terminal event on the delegate channel.
#[derive(Clone)]
pub struct QuestionFactory {
    loader: Arc<dyn MoviesLoading>,
    client: Arc<dyn HttpClient>,
    state: Arc<Mutex<FactoryState>>,
    delegate: mpsc::UnboundedSender<QuizEvent>,
}

impl QuestionFactory {
    pub fn new(
        loader: Arc<dyn MoviesLoading>,
        client: Arc<dyn HttpClient>,
        delegate: mpsc::UnboundedSender<QuizEvent>,
    ) -> Self {
        Self::with_rng(loader, client, delegate, StdRng::from_entropy())
    }

    /// Same as [`QuestionFactory::new`] with a caller-supplied random source.
    pub fn with_rng(
        loader: Arc<dyn MoviesLoading>,
        client: Arc<dyn HttpClient>,
        delegate: mpsc::UnboundedSender<QuizEvent>,
        rng: StdRng,
    ) -> Self {
        Self {
            loader,
            client,
            state: Arc::new(Mutex::new(FactoryState {
                picker: MoviePicker::default(),
                rng,
            })),
            delegate,
        }
    }

    /// Whether a catalog has been loaded.
    pub fn has_data(&self) -> bool {
        !self.lock().picker.is_empty()
    }

    /// Number of distinct movies drawn since the catalog was loaded or reset.
    pub fn used_count(&self) -> usize {
        self.lock().picker.used_count()
    }

    /// Make the whole catalog available again.
    pub fn reset(&self) {
        self.lock().picker.reset();
    }

    /// Load the catalog, reporting `DataLoaded` or `DataLoadFailed`.
    pub fn load_data(&self) {
        let loader = Arc::clone(&self.loader);
        let state = Arc::clone(&self.state);
        let delegate = self.delegate.clone();

        tokio::spawn(async move {
            let event = match loader.load_movies().await {
                Ok(movies) => {
                    lock_state(&state).picker = MoviePicker::new(movies);
                    QuizEvent::DataLoaded
                }
                Err(err) => {
                    log::warn!("Failed to load movies: {}", err);
                    QuizEvent::DataLoadFailed(err)
                }
            };
            let _ = delegate.send(event);
        });
    }

    /// Draw a movie, fetch its poster and report a `QuestionLoaded` for `ticket`.
    pub fn request_next_question(&self, ticket: u64) {
        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let delegate = self.delegate.clone();

        tokio::spawn(async move {
            let result = next_question(client.as_ref(), &state).await;
            let _ = delegate.send(QuizEvent::QuestionLoaded { ticket, result });
        });
    }

    fn lock(&self) -> MutexGuard<'_, FactoryState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<FactoryState>) -> MutexGuard<'_, FactoryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn next_question(
    client: &dyn HttpClient,
    state: &Mutex<FactoryState>,
) -> Result<Question, LoadError> {
    let movie = {
        let mut guard = lock_state(state);
        let FactoryState { picker, rng } = &mut *guard;
        picker.draw(rng)
    };
    let Some(movie) = movie else {
        return Err(LoadError::EmptyMoviesList);
    };
    log::debug!("Drew movie {} ({})", movie.id, movie.title);

    let image = match client.fetch(&movie.resized_image_url()).await {
        Ok(image) if !image.is_empty() => image,
        Ok(_) => {
            log::warn!("Empty poster for movie {}", movie.id);
            return Err(LoadError::ImageUnavailable);
        }
        Err(err) => {
            log::warn!("Failed to load poster for movie {}: {}", movie.id, err);
            return Err(LoadError::ImageUnavailable);
        }
    };

    let mut guard = lock_state(state);
    Ok(make_question(&mut guard.rng, &movie, image))
}

fn make_question<R: Rng + ?Sized>(rng: &mut R, movie: &Movie, image: Vec<u8>) -> Question {
    let threshold = *RATING_THRESHOLDS.choose(rng).unwrap_or(&RATING_THRESHOLDS[0]);
    let is_greater = rng.gen_bool(0.5);
    compose_question(movie.rating, threshold, is_greater, image)
}

/// Build the prompt and expected answer for one comparison.
pub fn compose_question(rating: f32, threshold: f32, is_greater: bool, image: Vec<u8>) -> Question {
    let (text, correct_answer) = if is_greater {
        (
            format!("Is the rating of this movie greater than {:.1}?", threshold),
            rating > threshold,
        )
    } else {
        (
            format!("Is the rating of this movie less than {:.1}?", threshold),
            rating < threshold,
        )
    };

    Question {
        image,
        text,
        correct_answer,
    }
}
