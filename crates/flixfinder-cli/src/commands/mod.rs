pub mod config;
pub mod context;
pub mod discover;
pub mod moods;
pub mod prompts;
pub mod search;
pub mod watchlist;
