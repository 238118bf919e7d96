//! Configuration management for tripledger
//!
//! Config stored at: ~/.config/tripledger/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tripledger_types::{ConfigError, CostModel, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Billing rate in Rand per ton-kilometer
    #[serde(default = "default_rate_per_ton_km")]
    pub rate_per_ton_km: f64,

    /// Default diesel price in Rand per litre
    #[serde(default = "default_fuel_price_per_litre")]
    pub fuel_price_per_litre: f64,

    /// Trip duration in days used by the fixed-prorated cost model
    #[serde(default = "default_days_for_trip")]
    pub days_for_trip: f64,

    /// Cost-allocation policy applied when none is given on the command line
    #[serde(default)]
    pub cost_model: CostModel,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Store directory override
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// Cost profile TOML override; built-in profiles are used when unset
    #[serde(default)]
    pub cost_profiles_path: Option<PathBuf>,
}

fn default_rate_per_ton_km() -> f64 {
    2.50
}

fn default_fuel_price_per_litre() -> f64 {
    24.50
}

fn default_days_for_trip() -> f64 {
    1.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_per_ton_km: default_rate_per_ton_km(),
            fuel_price_per_litre: default_fuel_price_per_litre(),
            days_for_trip: default_days_for_trip(),
            cost_model: CostModel::default(),
            output_format: OutputFormat::default(),
            store_dir: None,
            cost_profiles_path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tripledger");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tripledger");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tripledger Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Rate per ton-km:   R{:.2}", self.rate_per_ton_km)?;
        writeln!(f, "Fuel price:        R{:.2}/L", self.fuel_price_per_litre)?;
        writeln!(f, "Days for trip:     {}", self.days_for_trip)?;
        writeln!(f, "Cost model:        {}", self.cost_model)?;
        writeln!(f, "Output format:     {}", self.output_format)?;
        writeln!(
            f,
            "Store dir:         {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Cost profiles:     {}",
            self.cost_profiles_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:       {}", path.display())?;
        }

        Ok(())
    }
}
