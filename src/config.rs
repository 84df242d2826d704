//! Configuration file support.
//!
//! Athlete defaults are loaded from `$XDG_CONFIG_HOME/fitmetrics/config.toml`.
//! The file configures the athlete, never the activity set: activity kinds
//! stay a closed enum.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub athlete: AthleteConfig,

    #[serde(default)]
    pub pool: PoolConfig,
}

/// Athlete body parameters used by the calorie formulas
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AthleteConfig {
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,

    #[serde(default = "default_height_cm")]
    pub height_cm: f64,
}

impl Default for AthleteConfig {
    fn default() -> Self {
        Self {
            weight_kg: default_weight_kg(),
            height_cm: default_height_cm(),
        }
    }
}

/// Pool geometry defaults for swimming workouts
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolConfig {
    #[serde(default = "default_pool_length_m")]
    pub length_m: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            length_m: default_pool_length_m(),
        }
    }
}

// Default value functions
fn default_weight_kg() -> f64 {
    70.0
}

fn default_height_cm() -> f64 {
    175.0
}

fn default_pool_length_m() -> u32 {
    25
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fitmetrics").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
