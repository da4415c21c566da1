use crate::config::Config;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber, appending to the log file.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
/// `RUST_LOG` takes precedence over the configured `log_level`.
pub fn init(config: &Config) -> Result<PathBuf> {
    let path = Config::log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()?;

    Ok(path)
}
