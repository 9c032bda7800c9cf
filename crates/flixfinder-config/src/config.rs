use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_STORAGE_KEY: &str = "Watchlist";
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Storage keys double as file names: ASCII letters, digits, `_`, `-` and `.`,
/// not empty and not starting with `.`
pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("catalog.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("catalog.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("watchlist.storage_key may only contain ASCII letters, digits, '_', '-' and '.', and must not start with '.' (got '{0}')")]
    InvalidStorageKey(String),

    #[error("watchlist.top_limit must be greater than zero")]
    ZeroTopLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub watchlist: WatchlistConfig,
}

/// Remote catalog settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistConfig {
    /// Key the watchlist blob is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Default number of entries in the top-rated summary
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            top_limit: default_top_limit(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist yet
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.catalog.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.catalog.base_url.clone()));
        }
        if self.catalog.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("request_timeout_secs"));
        }
        if self.catalog.connect_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout("connect_timeout_secs"));
        }
        if !is_valid_storage_key(&self.watchlist.storage_key) {
            return Err(ConfigError::InvalidStorageKey(self.watchlist.storage_key.clone()));
        }
        if self.watchlist.top_limit == 0 {
            return Err(ConfigError::ZeroTopLimit);
        }
        Ok(())
    }
}
