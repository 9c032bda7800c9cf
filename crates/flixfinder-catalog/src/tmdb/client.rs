use crate::error::{CatalogError, Result};
use crate::query::SearchQuery;
use crate::tmdb::api;
use crate::traits::MovieCatalog;
use async_trait::async_trait;
use flixfinder_config::CatalogConfig;
use flixfinder_models::Movie;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// TMDB-backed movie catalog.
///
/// Cheap to clone; clones share the underlying connection pool. Each call is
/// independent: nothing is de-duplicated or cancelled, so callers that issue
/// overlapping queries should gate results with a `RequestTracker`.
#[derive(Clone)]
pub struct TmdbClient {
    client: Arc<Client>,
    base_url: String,
    access_token: String,
}

impl TmdbClient {
    pub fn new(config: &CatalogConfig, access_token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("flixfinder/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Self::with_client(client, &config.base_url, access_token)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let access_token = access_token.into();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CatalogError::InvalidBaseUrl(base_url));
        }
        if access_token.trim().is_empty() {
            return Err(CatalogError::MissingToken);
        }

        Ok(Self {
            client: Arc::new(client),
            base_url,
            access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn try_discover_by_genre(&self, genre_id: i64) -> Result<Vec<Movie>> {
        let page = api::discover_movies(&self.client, &self.base_url, &self.access_token, genre_id).await?;
        info!(
            "Discovered {} movies for genre {} ({} malformed records skipped)",
            page.results.len(),
            genre_id,
            page.skipped
        );
        Ok(page.into_movies())
    }

    pub async fn try_search(&self, query: &SearchQuery) -> Result<Vec<Movie>> {
        let page = api::search_movies(&self.client, &self.base_url, &self.access_token, query).await?;
        info!(
            "Search '{}' returned {} movies ({} malformed records skipped)",
            query.query.trim(),
            page.results.len(),
            page.skipped
        );
        Ok(page.into_movies())
    }

    pub async fn try_movie(&self, movie_id: i64) -> Result<Movie> {
        api::get_movie(&self.client, &self.base_url, &self.access_token, movie_id).await
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    fn catalog_name(&self) -> &str {
        "tmdb"
    }

    async fn discover_by_genre(&self, genre_id: i64) -> Vec<Movie> {
        match self.try_discover_by_genre(genre_id).await {
            Ok(movies) => movies,
            Err(e) => {
                warn!("Discover for genre {} failed: {}", genre_id, e);
                Vec::new()
            }
        }
    }

    async fn search(&self, query: &SearchQuery) -> Vec<Movie> {
        match self.try_search(query).await {
            Ok(movies) => movies,
            Err(CatalogError::BlankQuery) => {
                debug!("Ignoring blank search query");
                Vec::new()
            }
            Err(e) => {
                warn!("Search '{}' failed: {}", query.query.trim(), e);
                Vec::new()
            }
        }
    }

    async fn movie(&self, movie_id: i64) -> Option<Movie> {
        match self.try_movie(movie_id).await {
            Ok(movie) => Some(movie),
            Err(e) => {
                warn!("Lookup of movie {} failed: {}", movie_id, e);
                None
            }
        }
    }
}
