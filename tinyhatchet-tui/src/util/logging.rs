//! 调试日志
//!
//! The terminal belongs to the UI, so log output can only go to a file. When
//! no debug path is configured nothing is installed and every `log` call is a
//! no-op.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "tinyhatchet=debug,tinyhatchet_tui=debug,tinyhatchet_client=debug";

/// Send `log` and `tracing` records to `debug_path` (appending).
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(debug_path: &str) -> Result<()> {
    let debug_path = debug_path.trim();
    if debug_path.is_empty() {
        return Ok(());
    }

    let path = Path::new(debug_path);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open debug log {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install logger")?;

    tracing::info!(path = %path.display(), "debug logging enabled");
    Ok(())
}
