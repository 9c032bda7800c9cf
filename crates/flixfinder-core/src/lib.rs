pub mod blob_store;
pub mod share;
pub mod watchlist;

pub use blob_store::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use share::{format_release_date, movie_share_text, summary_text, top_rated_summary_text};
pub use watchlist::{WatchlistStore, WATCHLIST_KEY};
