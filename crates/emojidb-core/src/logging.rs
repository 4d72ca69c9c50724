//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! Terminal output is the product of this tool, so diagnostics never go to
//! stdout.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const FILE_FILTER: &str = "info,emojidb_core=debug,emojidb_cli=debug";
const STDERR_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize structured logging to `~/.local/state/emojidb/emojidb.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("emojidb")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("emojidb.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // One short-lived process, so a single locked handle is enough.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {}", e))?;

    tracing::info!("emojidb logging initialized at {}", log_file_path.display());

    Ok(log_file_path)
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
///
/// Defaults to `warn` so a normal search prints nothing extra.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
