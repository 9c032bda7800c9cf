use super::context::{with_spinner, AppContext};
use crate::output::Output;
use color_eyre::Result;
use flixfinder_catalog::MovieCatalog;
use flixfinder_models::{Mood, Movie};
use futures::future::join_all;

pub async fn run_discover(
    mood: Option<Mood>,
    genre: Option<i64>,
    all_moods: bool,
    limit: usize,
    output: &Output,
) -> Result<()> {
    let ctx = AppContext::load()?;
    let catalog = ctx.catalog()?;
    let watchlist = ctx.watchlist()?;

    if all_moods {
        // Independent requests; each resolves on its own, failures come back empty
        let lists = with_spinner(
            output,
            "Fetching movies for every mood...",
            join_all(Mood::ALL.iter().map(|mood| catalog.discover_by_mood(*mood))),
        )
        .await;

        for (mood, movies) in Mood::ALL.iter().zip(lists) {
            let heading = format!("{} {} · {}", mood.emoji(), mood.label(), mood.tagline());
            show(output, &heading, movies, limit);
        }
        return Ok(());
    }

    let (heading, genre_id) = match (mood, genre) {
        (_, Some(genre_id)) => match Mood::from_genre_id(genre_id) {
            Some(mood) => (format!("Perfect for your {} mood", mood.label().to_lowercase()), genre_id),
            None => (format!("Popular in genre {}", genre_id), genre_id),
        },
        (Some(mood), None) => (
            format!("Perfect for your {} mood", mood.label().to_lowercase()),
            mood.genre_id(),
        ),
        (None, None) => {
            let mood = Mood::Happy;
            (
                format!("Perfect for your {} mood", mood.label().to_lowercase()),
                mood.genre_id(),
            )
        }
    };

    tracing::debug!("Discover command for genre {}", genre_id);
    let movies = with_spinner(output, "Fetching movies...", catalog.discover_by_genre(genre_id)).await;

    let saved = movies.iter().filter(|m| watchlist.contains(m)).count();
    show(output, &heading, movies, limit);
    if saved > 0 {
        output.info(format!("{} of these are already on your watchlist", saved));
    }

    Ok(())
}

fn show(output: &Output, heading: &str, mut movies: Vec<Movie>, limit: usize) {
    movies.truncate(limit);
    output.movies(heading, &movies);
}
