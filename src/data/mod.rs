//! Movie catalog acquisition: transport, decoding and failure classification.

mod error;
mod loader;
mod network;

pub use error::{LoadError, NetworkError};
pub use loader::{MoviesLoader, MoviesLoading, decode_movies};
pub use network::{HttpClient, NetworkClient};
