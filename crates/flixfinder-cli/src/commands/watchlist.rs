use super::context::{with_spinner, AppContext};
use super::prompts;
use crate::output::Output;
use crate::WatchlistCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use flixfinder_catalog::MovieCatalog;
use flixfinder_core::{BlobStore, FileBlobStore, WatchlistStore};
use flixfinder_models::Movie;
use serde_json::json;

pub async fn run_watchlist(cmd: WatchlistCommands, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;
    let mut store = ctx.watchlist()?;

    match cmd {
        WatchlistCommands::List => {
            output.movies(&format!("My Watchlist ({})", store.len()), store.movies());
            Ok(())
        }
        WatchlistCommands::Add { id } => {
            let movie = lookup(&ctx, &store, id, output).await?;
            let title = movie.title.clone();
            let added = store.add(movie);
            save(&mut store)?;
            if added {
                output.success(format!("Added '{}' to your watchlist", title));
            } else {
                output.info(format!("'{}' is already on your watchlist", title));
            }
            Ok(())
        }
        WatchlistCommands::Remove { id } => {
            let title = store.get(id).map(|m| m.title.clone());
            let removed = store.remove_id(id);
            save(&mut store)?;
            match (removed, title) {
                (0, _) | (_, None) => output.warn(format!("Movie {} is not on your watchlist", id)),
                (_, Some(title)) => output.success(format!("Removed '{}' from your watchlist", title)),
            }
            Ok(())
        }
        WatchlistCommands::Toggle { id } => {
            let movie = lookup(&ctx, &store, id, output).await?;
            let title = movie.title.clone();
            let saved = store.toggle(movie);
            save(&mut store)?;
            if saved {
                output.success(format!("Added '{}' to your watchlist", title));
            } else {
                output.success(format!("Removed '{}' from your watchlist", title));
            }
            Ok(())
        }
        WatchlistCommands::Summary => {
            output.text("summary", &store.summary_text());
            Ok(())
        }
        WatchlistCommands::Top { limit } => {
            let limit = limit.unwrap_or(ctx.config.watchlist.top_limit);
            output.text("top_rated", &store.top_rated_summary_text(limit));
            Ok(())
        }
        WatchlistCommands::Share { id } => {
            let movie = lookup(&ctx, &store, id, output).await?;
            output.text("share", &store.share_text(&movie));
            Ok(())
        }
        WatchlistCommands::Clear { yes } => {
            if store.is_empty() {
                output.info("Your watchlist is already empty");
                return Ok(());
            }
            let confirmed = yes
                || prompts::prompt_yes_no(
                    &format!("Remove all {} movies from your watchlist?", store.len()),
                    false,
                    output,
                )?;
            if !confirmed {
                output.info("Watchlist left unchanged");
                return Ok(());
            }

            let removed = store.len();
            store.clear();
            save(&mut store)?;
            if output.is_human() {
                output.success(format!("Removed {} movies from your watchlist", removed));
            } else {
                output.json(&json!({ "type": "cleared", "removed": removed }));
            }
            Ok(())
        }
    }
}

/// Surface the write result of the preceding mutation
fn save<B: BlobStore>(store: &mut WatchlistStore<B>) -> Result<()> {
    store
        .persist()
        .map_err(|e| eyre!("Failed to save watchlist under '{}': {}", store.key(), e))
}

/// Saved copy if the movie is on the watchlist, otherwise a catalog lookup
async fn lookup(
    ctx: &AppContext,
    store: &WatchlistStore<FileBlobStore>,
    id: i64,
    output: &Output,
) -> Result<Movie> {
    if let Some(movie) = store.get(id) {
        return Ok(movie.clone());
    }

    let catalog = ctx.catalog()?;
    with_spinner(output, "Looking up movie...", catalog.movie(id))
        .await
        .ok_or_else(|| eyre!("Could not find movie {} in the catalog", id))
}
