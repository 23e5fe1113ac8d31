#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{self, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;
use writing_assistant_service::{
    AppConfig, BackendError, BackendRequest, BackendResponse, GenerationBackend, build_router,
};

pub enum Reply {
    Text(String),
    Status(reqwest::StatusCode, String),
    Undecodable,
    Panic,
}

/// In-memory backend that records every request it receives.
pub struct FakeBackend {
    reply: Reply,
    seen: Mutex<Vec<BackendRequest>>,
}

impl FakeBackend {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn requests(&self) -> Vec<BackendRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn generate(&self, request: &BackendRequest) -> Result<BackendResponse, BackendError> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(BackendResponse {
                response: text.clone(),
            }),
            Reply::Status(status, body) => Err(BackendError::Status {
                status: *status,
                body: body.clone(),
            }),
            Reply::Undecodable => Err(BackendError::Decode("expected value at line 1".into())),
            Reply::Panic => panic!("backend exploded"),
        }
    }
}

pub fn app_with(backend: Arc<dyn GenerationBackend>) -> Router {
    build_router(Arc::new(AppConfig::default()), backend)
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, serde_json::to_vec(body).unwrap()).await
}

pub async fn post_raw(app: Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri(uri)
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
