//! Breed a line of descendants from a single root.

use anyhow::{Context, Result};
use colored::Colorize;
use quarry::prelude::*;
use tracing::info;

use crate::config::Config;

pub fn run(config: &Config, kind: &str, generations: Option<u32>) -> Result<()> {
    let kind: Kind = kind.parse()?;
    let generations = generations.unwrap_or(config.lineage.generations);

    for creature in breed(config, kind, generations)? {
        println!("{} {}", "→".blue(), creature);
    }

    info!(kind = kind.name(), generations, "lineage complete");
    println!();
    println!(
        "{} {} generations of {}",
        "✓".green().bold(),
        generations.to_string().cyan(),
        kind.name().cyan()
    );
    Ok(())
}

/// The root creature followed by `generations` descendants, each the
/// offspring of the one before.
pub fn breed(config: &Config, kind: Kind, generations: u32) -> Result<Vec<Creature>> {
    let root = config
        .builder_for(kind, None)
        .generation(0)
        .build()
        .with_context(|| format!("Failed to build root {}", kind))?;

    let mut line = vec![root];
    for _ in 0..generations {
        let child = line[line.len() - 1]
            .procreate(config.lineage.offspring_food_reserve)
            .context("Procreation failed")?;
        line.push(child);
    }
    Ok(line)
}
