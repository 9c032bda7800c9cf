//! Plain-text renderings of the watchlist for sharing.

use flixfinder_models::Movie;

const EMPTY_WATCHLIST: &str = "My movie watchlist is currently empty. Time to add some great movies! 🎬";
const SHARED_FOOTER: &str = "Shared from my movie app! 🍿";
const ADDED_FOOTER: &str = "Added to my movie watchlist! 🍿";

fn movies_noun(count: usize) -> &'static str {
    if count == 1 {
        "movie"
    } else {
        "movies"
    }
}

fn listing_line(position: usize, title: &str, rating: Option<f64>) -> String {
    match rating {
        Some(rating) => format!("{}. {} ⭐ {:.1}\n", position, title, rating),
        None => format!("{}. {}\n", position, title),
    }
}

/// Release date as e.g. `Jul 16, 2010`; a date that is not `YYYY-MM-DD` comes back verbatim.
/// `None` when the movie has no (or an empty) release date.
pub fn format_release_date(movie: &Movie) -> Option<String> {
    let raw = movie.release_date.as_deref().filter(|d| !d.is_empty())?;
    Some(match movie.parsed_release_date() {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    })
}

/// Numbered listing of every movie in order
pub fn summary_text(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return EMPTY_WATCHLIST.to_string();
    }

    let mut summary = format!(
        "🎬 My Movie Watchlist ({} {}):\n\n",
        movies.len(),
        movies_noun(movies.len())
    );

    for (index, movie) in movies.iter().enumerate() {
        summary.push_str(&listing_line(index + 1, &movie.title, movie.rating()));
    }

    summary.push('\n');
    summary.push_str(SHARED_FOOTER);
    summary
}

/// Highest rated movies first, at most `limit` of them.
///
/// Movies without a positive rating are left out. Ties keep watchlist order.
pub fn top_rated_summary_text(movies: &[Movie], limit: usize) -> String {
    let mut rated: Vec<(&Movie, f64)> = movies
        .iter()
        .filter_map(|movie| movie.rating().map(|rating| (movie, rating)))
        .collect();
    // stable sort
    rated.sort_by(|a, b| b.1.total_cmp(&a.1));
    rated.truncate(limit);

    if rated.is_empty() {
        return format!(
            "Check out my movie watchlist! I have {} movies ready to watch. 🎬🍿",
            movies.len()
        );
    }

    let mut text = String::from("🏆 Top movies from my watchlist:\n\n");
    for (index, (movie, rating)) in rated.iter().enumerate() {
        text.push_str(&listing_line(index + 1, &movie.title, Some(*rating)));
    }

    if movies.len() > limit {
        text.push_str(&format!("\n...and {} more movies! 🎬", movies.len() - limit));
    }

    text.push_str("\n\n");
    text.push_str(SHARED_FOOTER);
    text
}

/// Share blurb for a single movie; absent fields are left out
pub fn movie_share_text(movie: &Movie) -> String {
    let mut text = format!("🎬 {}\n\n", movie.title);

    if !movie.overview.is_empty() {
        text.push_str(&movie.overview);
        text.push_str("\n\n");
    }

    if let Some(release_date) = format_release_date(movie) {
        text.push_str(&format!("Release Date: {}\n", release_date));
    }

    if let Some(rating) = movie.rating() {
        text.push_str(&format!("Rating: ⭐ {:.1}/10\n", rating));
    }

    text.push('\n');
    text.push_str(ADDED_FOOTER);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(id: i64, title: &str, rating: f64) -> Movie {
        Movie::new(id, title, "").with_vote_average(rating)
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(summary_text(&[]), EMPTY_WATCHLIST);
    }

    #[test]
    fn test_summary_single_movie() {
        let text = summary_text(&[rated(27205, "Inception", 8.8)]);
        assert!(text.starts_with("🎬 My Movie Watchlist (1 movie):\n\n"));
        assert!(text.contains("1. Inception ⭐ 8.8\n"));
        assert!(text.ends_with("\nShared from my movie app! 🍿"));
    }

    #[test]
    fn test_summary_omits_missing_or_zero_rating() {
        let movies = vec![
            Movie::new(1, "Unrated", ""),
            rated(2, "Zero", 0.0),
            rated(3, "Rounded", 7.26),
        ];
        let text = summary_text(&movies);
        assert!(text.contains("(3 movies)"));
        assert!(text.contains("1. Unrated\n"));
        assert!(text.contains("2. Zero\n"));
        assert!(text.contains("3. Rounded ⭐ 7.3\n"));
    }

    #[test]
    fn test_top_rated_orders_and_counts_remaining() {
        let movies = vec![
            rated(1, "Seven", 7.0),
            rated(2, "Nine", 9.0),
            rated(3, "Five", 5.0),
            rated(4, "Eight", 8.0),
        ];
        let text = top_rated_summary_text(&movies, 2);

        let nine = text.find("1. Nine ⭐ 9.0").unwrap();
        let eight = text.find("2. Eight ⭐ 8.0").unwrap();
        assert!(nine < eight);
        assert!(!text.contains("Seven"));
        assert!(text.contains("...and 2 more movies! 🎬"));
        assert!(text.ends_with("Shared from my movie app! 🍿"));
    }

    #[test]
    fn test_top_rated_ties_keep_order() {
        let movies = vec![rated(1, "First", 8.0), rated(2, "Second", 8.0), rated(3, "Third", 9.0)];
        let text = top_rated_summary_text(&movies, 5);

        assert!(text.contains("1. Third ⭐ 9.0\n2. First ⭐ 8.0\n3. Second ⭐ 8.0\n"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_top_rated_skips_unrated() {
        let movies = vec![Movie::new(1, "Unrated", ""), rated(2, "Rated", 6.1)];
        let text = top_rated_summary_text(&movies, 5);
        assert!(text.contains("1. Rated ⭐ 6.1\n"));
        assert!(!text.contains("Unrated"));
    }

    #[test]
    fn test_top_rated_fallback_without_ratings() {
        let movies = vec![Movie::new(1, "A", ""), rated(2, "B", 0.0), Movie::new(3, "C", "")];
        assert_eq!(
            top_rated_summary_text(&movies, 5),
            "Check out my movie watchlist! I have 3 movies ready to watch. 🎬🍿"
        );
        assert_eq!(
            top_rated_summary_text(&[], 5),
            "Check out my movie watchlist! I have 0 movies ready to watch. 🎬🍿"
        );
    }

    #[test]
    fn test_format_release_date() {
        let dated = |date: &str| Movie::new(1, "A", "").with_release_date(date);

        assert_eq!(format_release_date(&dated("2010-07-16")).as_deref(), Some("Jul 16, 2010"));
        assert_eq!(format_release_date(&dated("1999-03-05")).as_deref(), Some("Mar 5, 1999"));
        assert_eq!(format_release_date(&dated("Summer 2010")).as_deref(), Some("Summer 2010"));
        assert_eq!(format_release_date(&dated("2010-13-45")).as_deref(), Some("2010-13-45"));
        assert_eq!(format_release_date(&dated("")), None);
        assert_eq!(format_release_date(&Movie::new(1, "A", "")), None);
    }

    #[test]
    fn test_padded_release_date_is_passed_through() {
        let movie = Movie::new(1, "Padded", "").with_release_date(" 2010-07-16");
        assert_eq!(format_release_date(&movie).as_deref(), Some(" 2010-07-16"));
        assert!(movie_share_text(&movie).contains("Release Date:  2010-07-16\n"));
    }

    #[test]
    fn test_share_text_full() {
        let movie = Movie::new(27205, "Inception", "Dreams within dreams.")
            .with_release_date("2010-07-16")
            .with_vote_average(8.8);
        let text = movie_share_text(&movie);

        assert_eq!(
            text,
            "🎬 Inception\n\nDreams within dreams.\n\nRelease Date: Jul 16, 2010\nRating: ⭐ 8.8/10\n\nAdded to my movie watchlist! 🍿"
        );
        assert!(!text.contains("2010-07-16"));
    }

    #[test]
    fn test_share_text_passes_unparseable_date_through() {
        let movie = Movie::new(1, "Mystery", "").with_release_date("TBA");
        let text = movie_share_text(&movie);
        assert!(text.contains("Release Date: TBA\n"));
    }

    #[test]
    fn test_share_text_omits_absent_fields() {
        let movie = Movie::new(1, "Bare", "").with_release_date("");
        assert_eq!(movie_share_text(&movie), "🎬 Bare\n\n\nAdded to my movie watchlist! 🍿");
    }
}
