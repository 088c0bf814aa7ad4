//! Configuration management for eternum CLI

use anyhow::{Context, Result};
use eternum::{PriceSnapshot, RewardPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Dataset directory used when none is configured
pub const DEFAULT_DATA_DIR: &str = "public/data";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub lords_price: Option<f64>,
    pub strk_price: Option<f64>,
    #[serde(default)]
    pub policy: RewardPolicy,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("eternum");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        config
            .policy
            .validate()
            .with_context(|| format!("Invalid reward policy in {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Resolve a dataset path: an explicit path wins over `<data_dir>/<file_name>`
    pub fn data_path(&self, explicit: Option<&Path>, file_name: &str) -> PathBuf {
        match explicit {
            Some(path) => path.to_path_buf(),
            None => self.data_dir().join(file_name),
        }
    }

    /// Configured prices, with fallbacks filling any unset currency
    pub fn prices(&self) -> Option<PriceSnapshot> {
        if self.lords_price.is_none() && self.strk_price.is_none() {
            return None;
        }
        let fallback = PriceSnapshot::fallback();
        Some(PriceSnapshot::fixed(
            self.lords_price.unwrap_or(fallback.lords_usd),
            self.strk_price.unwrap_or(fallback.strk_usd),
        ))
    }

    /// Pick prices: saved response, then configured prices, then fallback.
    ///
    /// A missing or unreadable price file is logged, not fatal.
    pub fn resolve_prices(&self, prices_file: Option<&Path>) -> PriceSnapshot {
        if let Some(path) = prices_file {
            match load_price_file(path) {
                Ok(prices) => {
                    tracing::info!("Loaded prices from {}", path.display());
                    return prices;
                }
                Err(e) => tracing::warn!("Failed to load price data: {:#}", e),
            }
        }

        self.prices().unwrap_or_else(PriceSnapshot::fallback)
    }
}

fn load_price_file(path: &Path) -> Result<PriceSnapshot> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    PriceSnapshot::from_coingecko(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
