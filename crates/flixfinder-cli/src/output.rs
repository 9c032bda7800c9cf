use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use flixfinder_models::Movie;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message("success", "✓".green().to_string(), msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", msg.as_ref()),
            _ => self.print_json(&json!({ "type": "info", "message": msg.as_ref() })),
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message("warning", "⚠".yellow().to_string(), msg.as_ref());
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        // Errors are shown even in quiet mode
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            _ => self.print_json(&json!({ "type": "error", "message": msg.as_ref() })),
        }
    }

    fn message(&self, kind: &str, marker: String, msg: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{} {}", marker, msg),
            _ => self.print_json(&json!({ "type": kind, "message": msg })),
        }
    }

    /// Raw text block (share texts, summaries), printed verbatim in human mode
    pub fn text(&self, kind: &str, text: &str) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => println!("{}", text),
            _ => self.print_json(&json!({ "type": kind, "text": text })),
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.is_human() {
            return;
        }
        self.print_json(data);
    }

    /// Render a list of movies as a table, or as a JSON array
    pub fn movies(&self, heading: &str, movies: &[Movie]) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                println!("\n{}", heading.bright_cyan().bold());
                if movies.is_empty() {
                    println!("{}", "No movies found.".dimmed());
                    return;
                }
                println!("{}", movie_table(movies));
            }
            _ => {
                let items: Vec<serde_json::Value> = movies.iter().map(movie_json).collect();
                self.print_json(&json!({ "type": "movies", "title": heading, "movies": items }));
            }
        }
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default())
            }
            _ => println!("{}", serde_json::to_string(data).unwrap_or_default()),
        }
    }
}

fn movie_json(movie: &Movie) -> serde_json::Value {
    let mut value = serde_json::to_value(movie).unwrap_or_else(|_| json!({ "id": movie.id }));
    if let (Some(obj), Some(url)) = (value.as_object_mut(), movie.poster_url()) {
        obj.insert("poster_url".to_string(), json!(url));
    }
    value
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

pub fn movie_table(movies: &[Movie]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
        Cell::new("Year").add_attribute(Attribute::Bold),
        Cell::new("Rating").add_attribute(Attribute::Bold),
        Cell::new("Overview").add_attribute(Attribute::Bold),
    ]);

    for (index, movie) in movies.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(movie.id),
            Cell::new(&movie.title),
            Cell::new(movie.release_year().map(|y| y.to_string()).unwrap_or_default()),
            Cell::new(movie.rating().map(|r| format!("⭐ {:.1}", r)).unwrap_or_default()),
            Cell::new(truncate(&movie.overview, 60)),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long overview text", 7), "a long…");
    }

    #[test]
    fn test_movie_json_adds_poster_url() {
        let movie = Movie::new(1, "Poster", "").with_poster_path("/x.jpg");
        let value = movie_json(&movie);
        assert_eq!(value["poster_url"], "https://image.tmdb.org/t/p/w500/x.jpg");

        let value = movie_json(&Movie::new(2, "No poster", ""));
        assert!(value.get("poster_url").is_none());
    }

    #[test]
    fn test_movie_table_has_row_per_movie() {
        let movies = vec![
            Movie::new(1, "One", "").with_vote_average(7.0).with_release_date("2001-01-01"),
            Movie::new(2, "Two", ""),
        ];
        let rendered = movie_table(&movies).to_string();
        assert!(rendered.contains("One"));
        assert!(rendered.contains("2001"));
        assert!(rendered.contains("⭐ 7.0"));
        assert!(rendered.contains("Two"));
    }
}
