use crate::query::SearchQuery;
use async_trait::async_trait;
use flixfinder_models::{Mood, Movie};

/// Read-only movie catalog as seen by a front end.
///
/// Every method resolves exactly once and never fails: transport errors,
/// error statuses and undecodable responses all come back as an empty result.
/// Front ends that need to tell "no matches" from "request failed" should use
/// the fallible `try_*` methods of the concrete client.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    fn catalog_name(&self) -> &str;

    /// Most popular movies for a genre (first page)
    async fn discover_by_genre(&self, genre_id: i64) -> Vec<Movie>;

    /// Title search; blank queries return an empty list without a request
    async fn search(&self, query: &SearchQuery) -> Vec<Movie>;

    async fn movie(&self, movie_id: i64) -> Option<Movie>;

    async fn discover_by_mood(&self, mood: Mood) -> Vec<Movie> {
        self.discover_by_genre(mood.genre_id()).await
    }
}
