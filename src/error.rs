use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("failed to reach generation backend: {0}")]
    BackendUnavailable(String),
    #[error("unexpected error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::BackendUnavailable(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<BackendError> for ServiceError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Decode(_) => ServiceError::Internal(err.to_string()),
            BackendError::ClientBuild(_)
            | BackendError::Timeout { .. }
            | BackendError::Transport(_)
            | BackendError::Status { .. } => ServiceError::BackendUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.to_string(),
        });

        (self.status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_codes() {
        assert_eq!(
            ServiceError::InvalidRequest("no text provided".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::BackendUnavailable("refused".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServiceError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn backend_errors_keep_their_detail() {
        let err = ServiceError::from(BackendError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "model 'llama3.2' not found".into(),
        });
        assert!(matches!(err, ServiceError::BackendUnavailable(_)));
        assert!(err.to_string().contains("model 'llama3.2' not found"));

        let err = ServiceError::from(BackendError::Decode("expected value".into()));
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
