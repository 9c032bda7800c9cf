use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Base URL for poster images; the catalog's `poster_path` is appended verbatim.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// A single catalog item.
///
/// The serialized field names match both the TMDB response records and the
/// persisted watchlist format, so the same type is used for decoding catalog
/// pages and for storing the watchlist.
///
/// Two movies are equal when their `id`s are equal, even if other fields
/// differ (e.g. a re-fetched record with an updated vote average).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
}

impl Movie {
    /// Create a movie with only the required fields set
    pub fn new(id: i64, title: impl Into<String>, overview: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: overview.into(),
            poster_path: None,
            vote_average: None,
            release_date: None,
            original_language: None,
        }
    }

    pub fn with_vote_average(mut self, vote_average: f64) -> Self {
        self.vote_average = Some(vote_average);
        self
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    pub fn with_poster_path(mut self, poster_path: impl Into<String>) -> Self {
        self.poster_path = Some(poster_path.into());
        self
    }

    /// Full poster image address, if the catalog supplied a poster path
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }

    /// Vote average when it is present and positive.
    ///
    /// TMDB reports `0.0` for titles nobody has voted on yet, so a zero
    /// average is treated the same as a missing one.
    pub fn rating(&self) -> Option<f64> {
        self.vote_average.filter(|v| *v > 0.0)
    }

    /// Release date parsed as `YYYY-MM-DD`, exactly as stored (padding is not a date)
    pub fn parsed_release_date(&self) -> Option<NaiveDate> {
        self.release_date
            .as_deref()
            .filter(|s| s.trim() == *s)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
    }

    /// Leading four-digit year of the release date, if any
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        date.get(..4)?.parse().ok()
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_record() {
        let value = json!({
            "id": 27205,
            "title": "Inception",
            "overview": "A thief who steals corporate secrets...",
            "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            "vote_average": 8.4,
            "release_date": "2010-07-15",
            "original_language": "en",
            "popularity": 120.5,
            "genre_ids": [28, 878]
        });

        let movie: Movie = serde_json::from_value(value).unwrap();
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.vote_average, Some(8.4));
        assert_eq!(movie.original_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_decode_missing_and_null_optionals() {
        let value = json!({
            "id": 1,
            "title": "Untitled",
            "overview": "",
            "poster_path": null,
            "vote_average": null
        });

        let movie: Movie = serde_json::from_value(value).unwrap();
        assert!(movie.poster_path.is_none());
        assert!(movie.vote_average.is_none());
        assert!(movie.release_date.is_none());
        assert!(movie.original_language.is_none());
    }

    #[test]
    fn test_decode_missing_required_field_fails() {
        let missing_overview = json!({ "id": 1, "title": "No overview" });
        assert!(serde_json::from_value::<Movie>(missing_overview).is_err());

        let string_id = json!({ "id": "abc", "title": "Bad id", "overview": "" });
        assert!(serde_json::from_value::<Movie>(string_id).is_err());
    }

    #[test]
    fn test_encode_omits_absent_optionals() {
        let movie = Movie::new(7, "Seven", "").with_vote_average(8.3);
        let value = serde_json::to_value(&movie).unwrap();

        assert_eq!(value["vote_average"], json!(8.3));
        assert!(value.get("poster_path").is_none());
        assert!(value.get("release_date").is_none());
    }

    #[test]
    fn test_poster_url() {
        let movie = Movie::new(1, "Poster", "");
        assert_eq!(movie.poster_url(), None);

        let movie = movie.with_poster_path("/abc.jpg");
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn test_equality_uses_id_only() {
        let a = Movie::new(42, "Original Title", "first fetch").with_vote_average(6.0);
        let b = Movie::new(42, "Retitled", "second fetch").with_vote_average(7.5);
        let c = Movie::new(43, "Original Title", "first fetch");

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = std::collections::HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
        assert!(set.insert(c));
    }

    #[test]
    fn test_rating_ignores_zero() {
        assert_eq!(Movie::new(1, "A", "").rating(), None);
        assert_eq!(Movie::new(1, "A", "").with_vote_average(0.0).rating(), None);
        assert_eq!(Movie::new(1, "A", "").with_vote_average(6.5).rating(), Some(6.5));
    }

    #[test]
    fn test_release_date_helpers() {
        let movie = Movie::new(1, "A", "").with_release_date("2010-07-16");
        assert_eq!(movie.release_year(), Some(2010));
        assert_eq!(
            movie.parsed_release_date(),
            NaiveDate::from_ymd_opt(2010, 7, 16)
        );

        let padded = Movie::new(1, "A", "").with_release_date(" 2010-07-16");
        assert_eq!(padded.parsed_release_date(), None);

        let movie = Movie::new(1, "A", "").with_release_date("sometime in 1999");
        assert_eq!(movie.parsed_release_date(), None);
        assert_eq!(movie.release_year(), None);
    }
}
