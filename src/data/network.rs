use async_trait::async_trait;
use reqwest::Client;

use super::error::NetworkError;

/// The one transport capability the quiz needs: GET a URL, return the body.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` for connection failures, non-2xx statuses or an
    /// unreadable body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetworkError>;
}

/// `reqwest`-backed [`HttpClient`].
#[derive(Clone, Default)]
pub struct NetworkClient {
    client: Client,
}

impl NetworkClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for NetworkClient {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, NetworkError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {} returned {}", url, status);
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
