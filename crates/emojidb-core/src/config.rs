use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SearchError;
use crate::fetch::FetchOptions;

/// Public EmojiDB host.
pub const DEFAULT_BASE_URL: &str = "https://emojidb.org";
/// Data columns per table row.
pub const DEFAULT_COLUMNS: usize = 5;
/// Cap on accepted emojis per search.
pub const DEFAULT_MAX_EMOJIS: usize = 50;

/// Configuration loaded from `~/.config/emojidb/config.toml`.
///
/// Every field is optional in the file; missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiDbConfig {
    /// Scheme and host the search path is appended to.
    pub base_url: String,
    /// Number of emoji cells per table row. Zero is rejected when parsing.
    pub columns: NonZeroUsize,
    /// Maximum number of emojis accepted from one page.
    pub max_emojis: usize,
    /// Connect timeout in seconds (None = libcurl default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-request timeout in seconds (None = wait indefinitely).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// User-Agent header; libcurl sends none when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for EmojiDbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            columns: NonZeroUsize::new(DEFAULT_COLUMNS).unwrap_or(NonZeroUsize::MIN),
            max_emojis: DEFAULT_MAX_EMOJIS,
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl EmojiDbConfig {
    /// Rejects values the pipeline cannot work with.
    pub fn validate(&self) -> Result<(), SearchError> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| SearchError::Config(format!("base_url {:?}: {}", self.base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SearchError::Config(format!(
                "base_url must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.max_emojis == 0 {
            return Err(SearchError::Config("max_emojis must be at least 1".into()));
        }
        Ok(())
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            timeout: self.timeout_secs.map(Duration::from_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("emojidb")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, or defaults when no file exists.
pub fn load() -> Result<EmojiDbConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(EmojiDbConfig::default())
        }
    }
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<EmojiDbConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: EmojiDbConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
