use std::collections::HashSet;

use rand::Rng;

use crate::models::Movie;

/// Random movie selection that avoids repeats until the catalog runs out.
///
/// `unused` holds one catalog index per distinct movie id that has not been
/// drawn yet. Once it is empty every movie has been seen and draws fall back
/// to the whole catalog.
#[derive(Debug, Default)]
pub struct MoviePicker {
    movies: Vec<Movie>,
    unused: Vec<usize>,
    used: HashSet<String>,
}

impl MoviePicker {
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut picker = Self {
            movies,
            unused: Vec::new(),
            used: HashSet::new(),
        };
        picker.reset();
        picker
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Number of distinct movies drawn since the last reset.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.unused.is_empty()
    }

    /// Forget every draw; the whole catalog becomes available again.
    pub fn reset(&mut self) {
        self.used.clear();
        let mut seen = HashSet::new();
        self.unused = self
            .movies
            .iter()
            .enumerate()
            .filter(|(_, movie)| seen.insert(movie.id.as_str()))
            .map(|(index, _)| index)
            .collect();
    }

    /// Draw the next movie and mark it used. `None` only for an empty catalog.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Movie> {
        if self.movies.is_empty() {
            return None;
        }

        let index = if self.unused.is_empty() {
            rng.gen_range(0..self.movies.len())
        } else {
            let slot = rng.gen_range(0..self.unused.len());
            self.unused.swap_remove(slot)
        };

        let movie = self.movies[index].clone();
        self.used.insert(movie.id.clone());
        Some(movie)
    }
}
