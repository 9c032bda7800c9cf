use super::prompts;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use flixfinder_config::credentials::ACCESS_TOKEN_ENV;
use flixfinder_config::{Config, CredentialStore, PathManager};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show { full } => show_config(full, output),
        crate::ConfigCommands::Init { force } => init_config(force, output),
        crate::ConfigCommands::Token { token, clear } => configure_token(token, clear, output),
    }
}

fn show_config(full: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    let config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    let credentials = load_credentials(&path_manager)?;

    let from_env = std::env::var(ACCESS_TOKEN_ENV)
        .map(|t| !t.trim().is_empty())
        .unwrap_or(false);
    let token = credentials.resolve_access_token().unwrap_or_default();
    let token_display = if full { token.clone() } else { mask_string(&token) };
    let token_source = match (from_env, token.is_empty()) {
        (true, _) => ACCESS_TOKEN_ENV,
        (false, false) => "credentials file",
        (false, true) => "none",
    };

    if !output.is_human() {
        output.json(&json!({
            "type": "config",
            "config_file": config_file.display().to_string(),
            "config_file_exists": config_file.exists(),
            "catalog": {
                "base_url": config.catalog.base_url,
                "request_timeout_secs": config.catalog.request_timeout_secs,
                "connect_timeout_secs": config.catalog.connect_timeout_secs,
            },
            "watchlist": {
                "storage_key": config.watchlist.storage_key,
                "top_limit": config.watchlist.top_limit,
                "store_dir": path_manager.store_dir().display().to_string(),
            },
            "access_token": token_display,
            "access_token_source": token_source,
        }));
        return Ok(());
    }

    if output.is_quiet() {
        return Ok(());
    }

    println!("\n{}", "Configuration".bright_cyan().bold());
    if !config_file.exists() {
        output.warn(format!(
            "No config file at {}, showing defaults (run 'flixfinder config init' to create one)",
            config_file.display()
        ));
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Setting").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display().to_string())]);
    table.add_row(vec![
        Cell::new("Catalog").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Base URL"), Cell::new(&config.catalog.base_url)]);
    table.add_row(vec![
        Cell::new("Request Timeout"),
        Cell::new(format!("{}s", config.catalog.request_timeout_secs)),
    ]);
    table.add_row(vec![
        Cell::new("Connect Timeout"),
        Cell::new(format!("{}s", config.catalog.connect_timeout_secs)),
    ]);
    table.add_row(vec![
        Cell::new("Access Token"),
        Cell::new(format!("{} ({})", token_display, token_source)),
    ]);
    table.add_row(vec![
        Cell::new("Watchlist").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("Storage Key"), Cell::new(&config.watchlist.storage_key)]);
    table.add_row(vec![Cell::new("Top Rated Limit"), Cell::new(config.watchlist.top_limit)]);
    table.add_row(vec![
        Cell::new("Store Directory"),
        Cell::new(path_manager.store_dir().display().to_string()),
    ]);
    println!("{}", table);

    Ok(())
}

fn init_config(force: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if config_file.exists() && !force {
        output.warn(format!("Config file already exists at {}", config_file.display()));
        output.info("Use --force to overwrite it with default settings.");
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create directories: {}", e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

fn configure_token(token: Option<String>, clear: bool, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let mut credentials = load_credentials(&path_manager)?;

    if clear {
        credentials.clear_access_token();
        credentials
            .save()
            .map_err(|e| eyre!("Failed to save credentials: {}", e))?;
        output.success("Removed stored access token");
        return Ok(());
    }

    let token = match token {
        Some(token) => token,
        None => {
            if output.is_human() {
                output.info("Create a read access token at https://www.themoviedb.org/settings/api");
            }
            prompts::prompt_secret("TMDB API Read Access Token")?
        }
    };
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(eyre!("Access token cannot be empty"));
    }

    credentials.set_access_token(token);
    credentials
        .save()
        .map_err(|e| eyre!("Failed to save credentials: {}", e))?;

    output.success(format!("Saved access token to {}", credentials.path().display()));
    if std::env::var(ACCESS_TOKEN_ENV).is_ok() {
        output.warn(format!("{} is set and takes precedence over the stored token", ACCESS_TOKEN_ENV));
    }
    Ok(())
}

fn load_credentials(path_manager: &PathManager) -> Result<CredentialStore> {
    let credentials_file = path_manager.credentials_file();
    CredentialStore::load(&credentials_file)
        .map_err(|e| eyre!("Failed to load credentials from {}: {}", credentials_file.display(), e))
}

fn mask_string(s: &str) -> String {
    if s.is_empty() {
        return "<not set>".to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_string() {
        assert_eq!(mask_string(""), "<not set>");
        assert_eq!(mask_string("abc"), "***");
        assert_eq!(mask_string("eyJhbGciOiJIUzI1NiJ9"), "ey***J9");
    }
}
