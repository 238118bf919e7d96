//! Cost profile master loader from TOML configuration

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tripledger_domain::model::CostProfile;
use tripledger_types::{ConfigError, Error, Result};

/// Container for parsing profiles.toml
#[derive(Debug, Deserialize)]
struct CostProfileConfig {
    profiles: Vec<CostProfile>,
}

/// Cost profile master data loaded from TOML
#[derive(Debug)]
pub struct CostProfileLoader {
    /// Map of truck_id to CostProfile
    profiles: HashMap<String, CostProfile>,
}

impl CostProfileLoader {
    /// Load cost profiles from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read cost profile file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load cost profiles from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: CostProfileConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse cost profile TOML: {}",
                e
            )))
        })?;

        let profiles = config
            .profiles
            .into_iter()
            .map(|p| (p.truck_id.clone(), p))
            .collect();

        Ok(Self { profiles })
    }

    /// Look up a profile by truck identifier
    ///
    /// Returns None for unknown trucks; the application layer substitutes
    /// the default profile.
    pub fn get_profile(&self, truck_id: &str) -> Option<&CostProfile> {
        self.profiles.get(truck_id)
    }

    /// Get all profiles
    pub fn all_profiles(&self) -> Vec<&CostProfile> {
        self.profiles.values().collect()
    }

    /// Check if a truck exists in the master data
    pub fn has_truck(&self, truck_id: &str) -> bool {
        self.profiles.contains_key(truck_id)
    }

    /// Number of registered profiles
    pub fn count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[profiles]]
truck_id = "TRK-001"
cost_per_km = 6.94
fixed_monthly = 21400.0
fuel_l_per_100km = 45.0

[[profiles]]
truck_id = "TRK-002"
cost_per_km = 7.12
fixed_monthly = 22800.0
fuel_l_per_100km = 48.0
"#;

    #[test]
    fn test_load_from_str() {
        let loader = CostProfileLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.count(), 2);
    }

    #[test]
    fn test_get_profile() {
        let loader = CostProfileLoader::load_from_str(TEST_TOML).unwrap();
        let profile = loader.get_profile("TRK-002").unwrap();
        assert_eq!(profile.cost_per_km, 7.12);
        assert!(loader.get_profile("TRK-999").is_none());
    }

    #[test]
    fn test_has_truck() {
        let loader = CostProfileLoader::load_from_str(TEST_TOML).unwrap();
        assert!(loader.has_truck("TRK-001"));
        assert!(!loader.has_truck("TRK-999"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = CostProfileLoader::load_from_str("profiles = 3");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
