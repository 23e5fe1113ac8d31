use std::{
    fs::{File, OpenOptions},
    path::Path,
    sync::Mutex,
};

use anyhow::Context;
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

pub const LOG_FILE: &str = "api.log";

const DEFAULT_FILTER: &str = "info,hyper=warn,axum::rejection=trace";

/// Installs the global subscriber: compact console output plus a plain-text
/// copy appended to `log_path`. Does nothing if a subscriber is already set.
pub fn init_tracing(log_path: &Path) -> anyhow::Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .compact();
    let file = open_log_file(log_path)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer(file))
        .try_init()
        .context("failed to install tracing subscriber")
}

pub fn open_log_file(path: &Path) -> anyhow::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

pub fn file_layer<S>(file: File) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
}
