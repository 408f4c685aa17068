//! Initialize a Quarry configuration file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    let config_path = base_path.join(CONFIG_FILE);
    if config_path.exists() {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
        return Ok(());
    }

    Config::default().save(&config_path)?;
    println!("  {} Created {}", "✓".green(), config_path.display());
    Ok(())
}
