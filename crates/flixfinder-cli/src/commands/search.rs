use super::context::{with_spinner, AppContext};
use crate::output::Output;
use color_eyre::Result;
use flixfinder_catalog::{MovieCatalog, SearchQuery};

pub async fn run_search(
    query: &str,
    year: Option<i32>,
    min_rating: f64,
    limit: usize,
    output: &Output,
) -> Result<()> {
    let search = SearchQuery::new(query)
        .with_release_year(year)
        .with_min_rating(min_rating);

    if search.is_blank() {
        output.warn("Enter a title to search for");
        return Ok(());
    }

    let ctx = AppContext::load()?;
    let catalog = ctx.catalog()?;

    let mut movies = with_spinner(output, "Searching...", catalog.search(&search)).await;
    movies.truncate(limit);

    let mut heading = format!("Results for \"{}\"", query.trim());
    if let Some(year) = year {
        heading.push_str(&format!(" ({})", year));
    }
    if search.min_rating() > 0.0 {
        heading.push_str(&format!(" rated {:.1}+", search.min_rating()));
    }

    output.movies(&heading, &movies);
    if movies.is_empty() && output.is_human() {
        output.info("Try different keywords or remove search filters.");
    }

    Ok(())
}
