use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::factory::{UnknownCodePolicy, WorkoutFactory};
use crate::models::WorkoutType;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub factory: FactoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Display names used in rendered reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelsConfig {
    #[serde(default = "default_running_label")]
    pub running: String,

    #[serde(default = "default_sports_walking_label")]
    pub sports_walking: String,

    #[serde(default = "default_swimming_label")]
    pub swimming: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactoryConfig {
    #[serde(default)]
    pub unknown_code: UnknownCodePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// Default value functions
fn default_running_label() -> String {
    "Running".to_string()
}

fn default_sports_walking_label() -> String {
    "Sports Walking".to_string()
}

fn default_swimming_label() -> String {
    "Swimming".to_string()
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            running: default_running_label(),
            sports_walking: default_sports_walking_label(),
            swimming: default_swimming_label(),
        }
    }
}

impl LabelsConfig {
    pub fn label(&self, workout_type: WorkoutType) -> &str {
        match workout_type {
            WorkoutType::Running => &self.running,
            WorkoutType::SportsWalking => &self.sports_walking,
            WorkoutType::Swimming => &self.swimming,
        }
    }
}

impl Config {
    /// Get config directory path (~/.training-stats/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".training-stats"))
    }

    /// Get config file path (~/.training-stats/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicitly given path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default_file = Self::config_file()?;
                if !default_file.exists() {
                    tracing::info!("Config file not found, using defaults");
                    return Ok(Self::default());
                }
                default_file
            }
        };

        let contents = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file {}", config_file.display()))?;

        let config = Self::from_toml(&contents).context("Failed to parse config file")?;

        tracing::debug!(path = %config_file.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn factory(&self) -> WorkoutFactory {
        WorkoutFactory::new(self.factory.unknown_code)
    }
}
