use crate::output::Output;
use color_eyre::Result;
use dialoguer::{Confirm, Password};

/// Prompt for a secret (masked input)
pub fn prompt_secret(prompt: &str) -> Result<String> {
    Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for yes/no with a default
pub fn prompt_yes_no(prompt: &str, default: bool, output: &Output) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| {
            output.error(format!("Failed to read confirmation: {}", e));
            color_eyre::eyre::eyre!("Failed to read confirmation: {}", e)
        })
}
