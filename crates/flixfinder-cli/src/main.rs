use clap::{ArgAction, Parser, Subcommand};
use commands::{config, discover, moods, search, watchlist};
use flixfinder_models::Mood;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "flixfinder")]
#[command(about = "FlixFinder - Find a movie for your mood and keep a watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Write logs to a daily-rotating file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available moods and the genres they map to
    Moods,
    /// Popular movies for a mood or genre
    #[command(long_about = "Show the most popular movies for a mood (happy, sad, excited, romantic) or for an explicit TMDB genre id. Use --all-moods to fetch every mood at once.")]
    Discover {
        /// Mood to browse
        #[arg(long, conflicts_with_all = ["genre", "all_moods"])]
        mood: Option<Mood>,

        /// TMDB genre id to browse
        #[arg(long, conflicts_with = "all_moods")]
        genre: Option<i64>,

        /// Fetch every mood concurrently
        #[arg(long, action = ArgAction::SetTrue)]
        all_moods: bool,

        /// Maximum number of movies to show per list
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Search the catalog by title
    Search {
        /// Title to search for
        query: String,

        /// Only movies released in this year
        #[arg(long)]
        year: Option<i32>,

        /// Minimum vote average (0-10)
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,

        /// Maximum number of movies to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Manage the personal watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: WatchlistCommands,
    },
    /// View or change configuration and credentials
    #[command(long_about = "Manage configuration and credentials. Running without a subcommand shows the current configuration.")]
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
pub enum WatchlistCommands {
    /// List saved movies in the order they were added
    List,
    /// Look up a movie by TMDB id and save it
    Add { id: i64 },
    /// Remove a saved movie
    Remove { id: i64 },
    /// Save the movie if it is not saved, remove it otherwise
    Toggle { id: i64 },
    /// Shareable numbered summary of the whole watchlist
    Summary,
    /// Shareable summary of the highest rated saved movies
    Top {
        /// Number of movies to include (defaults to watchlist.top_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Shareable blurb for one movie
    Share { id: i64 },
    /// Remove every saved movie
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y', action = ArgAction::SetTrue)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (masks the access token)
    Show {
        /// Show the access token unmasked
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Store the TMDB API read access token
    #[command(long_about = "Store the TMDB API read access token used as the bearer credential for every catalog request. Create one at https://www.themoviedb.org/settings/api.")]
    Token {
        /// Access token (if not provided, will prompt)
        #[arg(long)]
        token: Option<String>,

        /// Remove the stored token
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "token")]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Moods => moods::run_moods(&output),
        Commands::Discover {
            mood,
            genre,
            all_moods,
            limit,
        } => discover::run_discover(mood, genre, all_moods, limit, &output).await,
        Commands::Search {
            query,
            year,
            min_rating,
            limit,
        } => search::run_search(&query, year, min_rating, limit, &output).await,
        Commands::Watchlist { cmd } => watchlist::run_watchlist(cmd, &output).await,
        Commands::Config { cmd } => {
            let cmd = cmd.unwrap_or(ConfigCommands::Show { full: false });
            config::run_config(cmd, &output)
        }
    }
}
