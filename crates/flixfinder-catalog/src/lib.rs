pub mod error;
pub mod query;
pub mod tmdb;
pub mod tracker;
pub mod traits;

pub use error::CatalogError;
pub use query::SearchQuery;
pub use tmdb::TmdbClient;
pub use tracker::{RequestTicket, RequestTracker};
pub use traits::MovieCatalog;
