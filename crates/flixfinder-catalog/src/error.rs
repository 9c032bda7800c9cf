#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Search query is blank")]
    BlankQuery,

    #[error("No catalog access token configured")]
    MissingToken,

    #[error("Invalid catalog base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
