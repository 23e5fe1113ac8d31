use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{BackendError, BackendRequest, BackendResponse, GenerationBackend};

/// Client for an Ollama-style `/api/generate` endpoint.
pub struct OllamaBackend {
    url: String,
    client: Client,
}

impl OllamaBackend {
    /// `timeout` of `None` waits for inference as long as it takes.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(BackendError::ClientBuild)?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn classify(&self, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                url: self.url.clone(),
            }
        } else {
            BackendError::Transport(err)
        }
    }
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    async fn generate(&self, request: &BackendRequest) -> Result<BackendResponse, BackendError> {
        debug!(url = %self.url, model = %request.model, "calling generation backend");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let body = response.bytes().await.map_err(|err| self.classify(err))?;
        serde_json::from_slice(&body).map_err(|err| BackendError::Decode(err.to_string()))
    }
}
