pub mod movie;
pub mod mood;
pub mod page;

pub use movie::{Movie, POSTER_BASE_URL};
pub use mood::Mood;
pub use page::CatalogPage;
