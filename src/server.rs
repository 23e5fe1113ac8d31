use std::{any::Any, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::{
    backend::{BackendRequest, GenerationBackend},
    config::AppConfig,
    error::ServiceError,
    mode::Mode,
    prompt::{build_prompt, strip_marker},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn GenerationBackend>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub text: Option<String>,
    pub mode: Option<String>,
    pub target_language: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub generated_text: String,
    pub stats: GenerationStats,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub input_length: usize,
    pub output_length: usize,
    pub mode: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
}

pub fn build_router(config: Arc<AppConfig>, backend: Arc<dyn GenerationBackend>) -> Router {
    let state = AppState { config, backend };

    Router::new()
        .route("/health", get(health))
        .route("/api/generate", post(generate))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.config.model_name.clone(),
    })
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ServiceError> {
    let result = match payload {
        Ok(Json(request)) => process_generation(&state, request).await,
        Err(rejection) => Err(ServiceError::InvalidRequest(format!(
            "invalid request body: {}",
            rejection.body_text()
        ))),
    };

    if let Err(err) = &result {
        error!(%err, "generation request failed");
    }
    result.map(Json)
}

async fn process_generation(
    state: &AppState,
    request: GenerateRequest,
) -> Result<GenerateResponse, ServiceError> {
    let text = request.text.unwrap_or_default();
    if text.is_empty() {
        return Err(ServiceError::InvalidRequest("no text provided".into()));
    }

    let mode_name = request
        .mode
        .unwrap_or_else(|| Mode::Improve.as_str().to_string());
    let mode = mode_name.parse::<Mode>().ok();
    let input_length = text.chars().count();
    info!(mode = %mode_name, input_chars = input_length, "processing generation request");

    let options = state.config.mode_parameters.resolve(mode);
    let prompt = build_prompt(&text, &mode_name, request.target_language.as_deref());
    let backend_request = BackendRequest::new(state.config.model_name.as_str(), prompt, options);

    let generated = state.backend.generate(&backend_request).await?.response;
    let generated_text = match mode {
        Some(mode) => strip_marker(&generated, mode.marker()),
        None => generated,
    };

    let output_length = generated_text.chars().count();
    info!(output_chars = output_length, "generation completed");

    Ok(GenerateResponse {
        generated_text,
        stats: GenerationStats {
            input_length,
            output_length,
            mode: mode_name,
        },
    })
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "handler panicked".to_string()
    };

    error!(%detail, "request handler panicked");
    ServiceError::Internal(detail).into_response()
}
