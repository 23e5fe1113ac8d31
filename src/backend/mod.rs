mod ollama;
mod types;

use async_trait::async_trait;

pub use ollama::OllamaBackend;
pub use types::{BackendError, BackendRequest, BackendResponse};

/// Text-generation service the handler forwards prompts to.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, request: &BackendRequest) -> Result<BackendResponse, BackendError>;
}
