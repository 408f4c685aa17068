//! Quarry CLI - inspect and breed predator-prey agents.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "quarry")]
#[command(author, version, about = "Quarry - validated predator-prey agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default quarry.toml
    Init {
        /// Target directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Build one creature and print it
    Spawn {
        /// Kind: agent, predator, prey, oriented-predator, oriented-prey
        kind: String,

        /// Food reserve (default: from config)
        #[arg(short, long)]
        food: Option<f64>,

        /// Generation to start at
        #[arg(short, long)]
        generation: Option<u64>,

        /// Print a JSON snapshot instead of the summary line
        #[arg(long)]
        json: bool,
    },

    /// Breed a line of descendants and print each generation
    Lineage {
        /// Kind of the root creature
        kind: String,

        /// Number of offspring generations (default: from config)
        #[arg(short, long)]
        generations: Option<u32>,
    },

    /// Generate identifiers
    Uuid {
        /// Species tag: predator or prey
        #[arg(short, long)]
        species: Option<String>,

        /// How many to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Show the effective configuration
    Config,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Spawn {
            kind,
            food,
            generation,
            json,
        } => commands::spawn::run(&Config::load()?, &kind, food, generation, json),
        Commands::Lineage { kind, generations } => {
            commands::lineage::run(&Config::load()?, &kind, generations)
        }
        Commands::Uuid { species, count } => commands::uuid::run(species, count),
        Commands::Config => commands::config::run(&Config::load()?),
    }
}
