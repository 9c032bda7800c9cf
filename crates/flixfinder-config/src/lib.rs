pub mod config;
pub mod credentials;
pub mod paths;

pub use config::{
    is_valid_storage_key, CatalogConfig, Config, ConfigError, WatchlistConfig, DEFAULT_BASE_URL,
    DEFAULT_STORAGE_KEY, DEFAULT_TOP_LIMIT,
};
pub use credentials::CredentialStore;
pub use paths::{base_path_override, PathManager};
