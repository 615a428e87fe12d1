//! Domain types shared by the loader, the question source and the session.

mod game_result;
mod movie;
mod question;

pub use game_result::GameResult;
pub use movie::{Movie, MostPopularMovies, MovieItem};
pub use question::Question;
