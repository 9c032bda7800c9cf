use crate::movie::Movie;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    page: Option<i64>,
    results: Vec<serde_json::Value>,
    #[serde(default)]
    total_pages: Option<i64>,
    #[serde(default)]
    total_results: Option<i64>,
}

/// One page of catalog results.
///
/// Records are decoded one at a time: a malformed record is skipped and
/// counted in `skipped` instead of failing the whole page. Only a malformed
/// envelope (invalid JSON, missing `results` array) is an error.
#[derive(Debug, Clone, Default)]
pub struct CatalogPage {
    pub page: Option<i64>,
    pub results: Vec<Movie>,
    pub total_pages: Option<i64>,
    pub total_results: Option<i64>,
    pub skipped: usize,
}

impl CatalogPage {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: RawPage = serde_json::from_str(body)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawPage) -> Self {
        let mut results = Vec::with_capacity(raw.results.len());
        let mut skipped = 0;

        for (index, record) in raw.results.into_iter().enumerate() {
            match serde_json::from_value::<Movie>(record) {
                Ok(movie) => results.push(movie),
                Err(e) => {
                    warn!("Skipping malformed catalog record at index {}: {}", index, e);
                    skipped += 1;
                }
            }
        }

        Self {
            page: raw.page,
            results,
            total_pages: raw.total_pages,
            total_results: raw.total_results,
            skipped,
        }
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.results
    }
}
