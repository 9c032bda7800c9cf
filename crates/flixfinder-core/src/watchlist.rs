use crate::blob_store::BlobStore;
use crate::share;
use anyhow::Result;
use flixfinder_models::Movie;
use tracing::{debug, info, warn};

/// Default key the watchlist blob is stored under
pub const WATCHLIST_KEY: &str = flixfinder_config::DEFAULT_STORAGE_KEY;

/// The user's saved movies: ordered by insertion, unique by id.
///
/// The store exclusively owns the list and takes `&mut self` for every
/// mutation, so it lives on one task; other tasks hand requests to that task
/// rather than sharing the store. Every mutation rewrites the full list to the
/// backend before returning.
pub struct WatchlistStore<B: BlobStore> {
    backend: B,
    key: String,
    movies: Vec<Movie>,
}

impl<B: BlobStore> WatchlistStore<B> {
    /// Open the store under the default key
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, WATCHLIST_KEY)
    }

    /// Open the store, restoring any saved list.
    ///
    /// A missing, unreadable or undecodable blob yields an empty watchlist;
    /// opening never fails.
    pub fn open_with_key(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let movies = load_movies(&backend, &key);
        Self {
            backend,
            key,
            movies,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, movie_id: i64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    pub fn contains(&self, movie: &Movie) -> bool {
        self.contains_id(movie.id)
    }

    pub fn contains_id(&self, movie_id: i64) -> bool {
        self.movies.iter().any(|m| m.id == movie_id)
    }

    /// Append `movie` unless a movie with the same id is already saved.
    ///
    /// Returns `true` if the movie was added.
    pub fn add(&mut self, movie: Movie) -> bool {
        let added = if self.contains(&movie) {
            debug!("Movie {} already in watchlist", movie.id);
            false
        } else {
            info!("Adding '{}' ({}) to watchlist", movie.title, movie.id);
            self.movies.push(movie);
            true
        };
        self.persist_logged();
        added
    }

    /// Remove every entry with the movie's id; returns how many were removed
    pub fn remove(&mut self, movie: &Movie) -> usize {
        self.remove_id(movie.id)
    }

    pub fn remove_id(&mut self, movie_id: i64) -> usize {
        let before = self.movies.len();
        self.movies.retain(|m| m.id != movie_id);
        let removed = before - self.movies.len();
        if removed > 0 {
            info!("Removed movie {} from watchlist", movie_id);
        } else {
            debug!("Movie {} not in watchlist, nothing to remove", movie_id);
        }
        self.persist_logged();
        removed
    }

    /// Remove the movie if saved, add it otherwise; returns whether it is saved afterwards
    pub fn toggle(&mut self, movie: Movie) -> bool {
        if self.contains(&movie) {
            self.remove(&movie);
            false
        } else {
            self.add(movie)
        }
    }

    pub fn clear(&mut self) {
        info!("Clearing watchlist ({} movies)", self.movies.len());
        self.movies.clear();
        self.persist_logged();
    }

    /// Write the full list to the backend
    pub fn persist(&mut self) -> Result<()> {
        let encoded = serde_json::to_vec(&self.movies)?;
        self.backend.set(&self.key, &encoded)?;
        debug!("Persisted watchlist: {} movies under '{}'", self.movies.len(), self.key);
        Ok(())
    }

    // Keeps the in-memory list even when the write fails
    fn persist_logged(&mut self) {
        if let Err(e) = self.persist() {
            warn!("Failed to persist watchlist under '{}': {}", self.key, e);
        }
    }

    pub fn summary_text(&self) -> String {
        share::summary_text(&self.movies)
    }

    pub fn top_rated_summary_text(&self, limit: usize) -> String {
        share::top_rated_summary_text(&self.movies, limit)
    }

    pub fn share_text(&self, movie: &Movie) -> String {
        share::movie_share_text(movie)
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

fn load_movies<B: BlobStore>(backend: &B, key: &str) -> Vec<Movie> {
    let data = match backend.get(key) {
        Ok(Some(data)) => data,
        Ok(None) => {
            debug!("No saved watchlist under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read saved watchlist under '{}': {}. Starting empty.", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_slice::<Vec<Movie>>(&data) {
        Ok(mut movies) => {
            // Older writers may have left duplicates behind; keep the first occurrence
            let mut seen = std::collections::HashSet::new();
            movies.retain(|m| seen.insert(m.id));
            info!("Loaded watchlist: {} movies", movies.len());
            movies
        }
        Err(e) => {
            warn!("Saved watchlist under '{}' is corrupted: {}. Starting empty.", key, e);
            Vec::new()
        }
    }
}
