use std::{fs::OpenOptions, path::Path, sync::Mutex};

use anyhow::{Context, Result};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Build the file logger and make it the default for the current thread.
///
/// Records are appended to `path`. The filter comes from `RUST_LOG`, INFO otherwise.
/// Logging stops when the returned guard is dropped.
pub fn init(path: &Path) -> Result<DefaultGuard> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env()
                .context("Invalid RUST_LOG filter")?,
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    Ok(tracing::subscriber::set_default(subscriber))
}
