use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Returns the default log path inside the user's data directory.
/// Falls back to `./colorflicker.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let log_dir = data_dir.join("colorflicker");
        std::fs::create_dir_all(&log_dir).ok();
        log_dir.join("colorflicker.log")
    } else {
        PathBuf::from("colorflicker.log")
    }
}

/// Installs the global subscriber. Logs go to a file because the terminal
/// belongs to the UI. `RUST_LOG` overrides the default `info` level.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;
    Ok(())
}
