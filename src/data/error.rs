use thiserror::Error;

/// Transport-level failures raised by an [`HttpClient`](super::HttpClient).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NetworkError {
    #[error("request failed with status {0}")]
    Status(u16),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Classified failures reported while loading the catalog or a question.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("server reported an error: {0}")]
    Api(String),
    #[error("movie list is empty")]
    EmptyMoviesList,
    #[error("no image available")]
    ImageUnavailable,
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl LoadError {
    /// Text shown to the player in the error alert.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(_) => "Check your internet connection and try again.".to_string(),
            LoadError::Api(message) => format!("Server error: {}", message),
            LoadError::EmptyMoviesList => {
                "Could not load movies. Please try again later.".to_string()
            }
            LoadError::ImageUnavailable => "No image available. Please try again.".to_string(),
            LoadError::Unknown(description) => format!("Unknown error: {}", description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LoadError::Api("maintenance".to_string()).user_message(),
            "Server error: maintenance"
        );
        assert_eq!(
            LoadError::Network(NetworkError::Status(503)).user_message(),
            "Check your internet connection and try again."
        );
        assert_eq!(
            LoadError::EmptyMoviesList.user_message(),
            "Could not load movies. Please try again later."
        );
        assert!(
            LoadError::Unknown("boom".to_string())
                .user_message()
                .ends_with("boom")
        );
    }

    #[test]
    fn test_decode_failure_is_a_network_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let load: LoadError = NetworkError::from(err).into();
        assert!(matches!(load, LoadError::Network(NetworkError::Decode(_))));
    }
}
