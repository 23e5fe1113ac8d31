use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mode::ModeParameters;

#[derive(Debug, Clone, Serialize)]
pub struct BackendRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: ModeParameters,
}

impl BackendRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, options: ModeParameters) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
            options,
        }
    }
}

/// Only the generated text is read; other fields the backend returns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendResponse {
    #[serde(default)]
    pub response: String,
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to {url} timed out")]
    Timeout { url: String },
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("invalid backend response: {0}")]
    Decode(String),
}
