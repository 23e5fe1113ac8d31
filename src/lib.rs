pub mod backend;
pub mod config;
pub mod error;
pub mod logging;
pub mod mode;
pub mod prompt;
pub mod server;

pub use backend::{BackendError, BackendRequest, BackendResponse, GenerationBackend, OllamaBackend};
pub use config::AppConfig;
pub use error::ServiceError;
pub use mode::{Mode, ModeParameterTable, ModeParameters};
pub use prompt::{build_prompt, strip_marker};
pub use server::{GenerateRequest, GenerateResponse, GenerationStats, build_router};
