use crate::output::Output;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use flixfinder_catalog::TmdbClient;
use flixfinder_config::{Config, CredentialStore, PathManager};
use flixfinder_core::{FileBlobStore, WatchlistStore};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::default();
        let config_file = paths.config_file();
        let config = Config::load_or_default(&config_file)
            .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
        config
            .validate()
            .wrap_err_with(|| format!("Invalid configuration in {}", config_file.display()))?;

        Ok(Self { paths, config })
    }

    pub fn credentials(&self) -> Result<CredentialStore> {
        let credentials_file = self.paths.credentials_file();
        CredentialStore::load(&credentials_file)
            .map_err(|e| eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e))
    }

    pub fn catalog(&self) -> Result<TmdbClient> {
        let token = self.credentials()?.resolve_access_token().ok_or_else(|| {
            eyre!(
                "No TMDB access token configured. Run 'flixfinder config token' or set {}",
                flixfinder_config::credentials::ACCESS_TOKEN_ENV
            )
        })?;

        TmdbClient::new(&self.config.catalog, token).wrap_err("Failed to create catalog client")
    }

    pub fn watchlist(&self) -> Result<WatchlistStore<FileBlobStore>> {
        self.paths
            .ensure_directories()
            .map_err(|e| eyre!("Failed to create data directories: {}", e))?;

        let backend = FileBlobStore::new(self.paths.store_dir());
        Ok(WatchlistStore::open_with_key(
            backend,
            self.config.watchlist.storage_key.clone(),
        ))
    }
}

/// Await `request` behind a spinner (human output only)
pub async fn with_spinner<F, T>(output: &Output, message: &str, request: F) -> T
where
    F: Future<Output = T>,
{
    if !output.is_human() || output.is_quiet() {
        return request.await;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.red} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = request.await;
    spinner.finish_and_clear();
    result
}
