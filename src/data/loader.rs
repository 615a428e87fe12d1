use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Movie, MostPopularMovies};

use super::error::{LoadError, NetworkError};
use super::network::HttpClient;

/// Source of the movie catalog.
#[async_trait]
pub trait MoviesLoading: Send + Sync {
    /// Load the full catalog.
    ///
    /// # Errors
    ///
    /// Returns a classified `LoadError`; never an empty list.
    async fn load_movies(&self) -> Result<Vec<Movie>, LoadError>;
}

/// Loads the catalog from a remote movie-list endpoint.
pub struct MoviesLoader {
    client: Arc<dyn HttpClient>,
    url: String,
}

impl MoviesLoader {
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl MoviesLoading for MoviesLoader {
    async fn load_movies(&self) -> Result<Vec<Movie>, LoadError> {
        log::info!("Loading movie catalog");
        let body = self.client.fetch(&self.url).await?;
        let movies = decode_movies(&body)?;
        log::info!("Loaded {} movies", movies.len());
        Ok(movies)
    }
}

/// Decode and classify a movie-list payload.
///
/// A non-empty server error message wins over everything else, then an
/// empty list; a body that is not a movie list at all is a network error.
pub fn decode_movies(body: &[u8]) -> Result<Vec<Movie>, LoadError> {
    let payload: MostPopularMovies =
        serde_json::from_slice(body).map_err(NetworkError::Decode)?;

    if let Some(message) = payload.error_message.filter(|m| !m.is_empty()) {
        return Err(LoadError::Api(message));
    }

    if payload.items.is_empty() {
        return Err(LoadError::EmptyMoviesList);
    }

    Ok(payload.items.into_iter().map(Movie::from).collect())
}
