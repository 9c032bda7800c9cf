use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that takes precedence over the stored access token
pub const ACCESS_TOKEN_ENV: &str = "FLIXFINDER_ACCESS_TOKEN";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tmdb_access_token: Option<String>,
}

/// Secrets kept in `credentials.toml`, apart from the shareable `config.toml`
pub struct CredentialStore {
    path: PathBuf,
    stored: StoredCredentials,
}

impl CredentialStore {
    /// Read the credentials file; a missing file means nothing is stored yet
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let stored = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?
        } else {
            debug!("No credentials file at {}", path.display());
            StoredCredentials::default()
        };

        Ok(Self { path, stored })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string_pretty(&self.stored)?)?;
        Ok(())
    }

    pub fn access_token(&self) -> Option<&str> {
        self.stored.tmdb_access_token.as_deref()
    }

    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.stored.tmdb_access_token = Some(token.into());
    }

    pub fn clear_access_token(&mut self) {
        self.stored.tmdb_access_token = None;
    }

    /// Token from the environment if set, otherwise the stored one
    pub fn resolve_access_token(&self) -> Option<String> {
        let usable = |t: &String| !t.trim().is_empty();
        std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .filter(usable)
            .or_else(|| self.stored.tmdb_access_token.clone().filter(usable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.toml");

        let mut store = CredentialStore::load(&path).unwrap();
        assert!(store.access_token().is_none());

        store.set_access_token("secret-token");
        store.save().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("tmdb_access_token = \"secret-token\""));

        let mut reloaded = CredentialStore::load(&path).unwrap();
        assert_eq!(reloaded.access_token(), Some("secret-token"));

        reloaded.clear_access_token();
        reloaded.save().unwrap();
        assert!(CredentialStore::load(&path).unwrap().access_token().is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        std::fs::write(&path, "tmdb_access_token = [").unwrap();

        assert!(CredentialStore::load(&path).is_err());
    }
}
