//! Configuration management for the Quarry CLI.

use anyhow::{Context, Result};
use quarry::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up from the working directory upwards.
pub const CONFIG_FILE: &str = "quarry.toml";

/// Quarry configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub predator: PredatorConfig,
    #[serde(default)]
    pub prey: PreyConfig,
    #[serde(default)]
    pub lineage: LineageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_food_reserve")]
    pub food_reserve: f64,
    #[serde(default = "default_max_food_reserve")]
    pub max_food_reserve: f64,
    #[serde(default = "default_p_breed")]
    pub p_breed: f64,
    /// Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredatorConfig {
    #[serde(default = "default_p_eat")]
    pub p_eat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreyConfig {
    #[serde(default = "default_p_flee")]
    pub p_flee: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageConfig {
    #[serde(default = "default_offspring_food_reserve")]
    pub offspring_food_reserve: f64,
    #[serde(default = "default_generations")]
    pub generations: u32,
}

// Default value functions
fn default_food_reserve() -> f64 { 10.0 }
fn default_max_food_reserve() -> f64 { 20.0 }
fn default_p_breed() -> f64 { DEFAULT_P_BREED }
fn default_p_eat() -> f64 { 0.5 }
fn default_p_flee() -> f64 { 0.5 }
fn default_offspring_food_reserve() -> f64 { 5.0 }
fn default_generations() -> u32 { 3 }

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            food_reserve: default_food_reserve(),
            max_food_reserve: default_max_food_reserve(),
            p_breed: default_p_breed(),
            memory_limit: None,
        }
    }
}

impl Default for PredatorConfig {
    fn default() -> Self {
        Self { p_eat: default_p_eat() }
    }
}

impl Default for PreyConfig {
    fn default() -> Self {
        Self { p_flee: default_p_flee() }
    }
}

impl Default for LineageConfig {
    fn default() -> Self {
        Self {
            offspring_food_reserve: default_offspring_food_reserve(),
            generations: default_generations(),
        }
    }
}

impl Config {
    /// Load config from quarry.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// A builder preloaded with the configured traits for `kind`.
    pub fn builder_for(&self, kind: Kind, food_reserve: Option<f64>) -> CreatureBuilder {
        let mut builder = Creature::builder(kind, food_reserve.unwrap_or(self.agent.food_reserve))
            .max_food_reserve(self.agent.max_food_reserve)
            .p_breed(self.agent.p_breed);
        if let Some(limit) = self.agent.memory_limit {
            builder = builder.memory_limit(limit);
        }
        match kind.species() {
            Some(Species::Predator) => builder.p_eat(self.predator.p_eat),
            Some(Species::Prey) => builder.p_flee(self.prey.p_flee),
            None => builder,
        }
    }
}

/// Find quarry.toml in `start` or its parent directories.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_round_trips() {
        let config = Config::default();
        let text = config.to_toml().unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str("[predator]\np_eat = 0.9\n").unwrap();
        assert_eq!(config.predator.p_eat, 0.9);
        assert_eq!(config.prey.p_flee, 0.5);
        assert_eq!(config.agent.p_breed, 1.0);
        assert_eq!(config.lineage.generations, 3);
    }

    #[test]
    fn finds_file_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        Config::default().save(&dir.path().join(CONFIG_FILE)).unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
        assert_eq!(Config::load_from(&found).unwrap(), Config::default());
    }

    #[test]
    fn builder_applies_species_traits() {
        let mut config = Config::default();
        config.prey.p_flee = 0.7;
        config.agent.memory_limit = Some(4);
        let prey = config.builder_for(Kind::OrientedPrey, Some(3.0)).build().unwrap();
        assert_eq!(prey.p_flee(), Some(0.7));
        assert_eq!(prey.food_reserve(), 3.0);
        assert_eq!(prey.max_food_reserve(), Some(20.0));
        assert_eq!(prey.memory_limit(), Some(4));

        let agent = config.builder_for(Kind::Agent, None).build().unwrap();
        assert_eq!(agent.food_reserve(), 10.0);
    }

    #[test]
    fn invalid_config_values_surface_as_errors() {
        let mut config = Config::default();
        config.predator.p_eat = 3.0;
        let err = config.builder_for(Kind::Predator, None).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueKind);
    }
}
