/// Parameters for a text search against the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub release_year: Option<i32>,
    min_rating: f64,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            release_year: None,
            min_rating: 0.0,
        }
    }

    pub fn with_release_year(mut self, year: Option<i32>) -> Self {
        self.release_year = year;
        self
    }

    /// Minimum vote average, clamped to 0..=10 (non-finite values become 0)
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = if min_rating.is_finite() {
            min_rating.clamp(0.0, 10.0)
        } else {
            0.0
        };
        self
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// True when the query is empty after trimming; blank searches are never sent
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Query string parameters for the search endpoint
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", self.query.trim().to_string()),
            ("vote_average.gte", format!("{:.1}", self.min_rating)),
            ("include_adult", "false".to_string()),
            ("sort_by", "popularity.desc".to_string()),
        ];

        if let Some(year) = self.release_year {
            params.push(("primary_release_year", year.to_string()));
        }

        params
    }
}
