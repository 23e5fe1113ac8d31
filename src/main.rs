use std::{path::Path, sync::Arc};

use tokio::net::TcpListener;

use writing_assistant_service::{
    AppConfig, OllamaBackend, build_router,
    logging::{LOG_FILE, init_tracing},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(Path::new(LOG_FILE))?;

    let config = Arc::new(AppConfig::from_env()?);
    let backend = Arc::new(OllamaBackend::new(
        config.backend_url.clone(),
        config.backend_timeout,
    )?);
    tracing::info!(backend = %backend.url(), model = %config.model_name, "generation backend configured");

    let router = build_router(config.clone(), backend);

    let listener = TcpListener::bind(config.listen_addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "REST server ready");

    axum::serve(listener, router).await?;

    Ok(())
}
