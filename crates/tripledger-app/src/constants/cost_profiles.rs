//! Built-in cost profiles for the fleet
//!
//! These stand in for the operator's cost sheet when no profile TOML is
//! configured. Unknown trucks fall back to the default profile rather than
//! failing a calculation.

use std::collections::HashMap;
use std::sync::LazyLock;

use tripledger_domain::model::CostProfile;

/// Truck whose profile backs lookups for unknown truck ids
pub const DEFAULT_TRUCK_ID: &str = "TRK-001";

/// Built-in per-truck cost constants
pub static COST_PROFILES: LazyLock<HashMap<&'static str, CostProfile>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "TRK-001",
        CostProfile {
            truck_id: "TRK-001".to_string(),
            cost_per_km: 6.94,
            fixed_monthly: 21400.0,
            fuel_l_per_100km: 45.0,
        },
    );

    m.insert(
        "TRK-002",
        CostProfile {
            truck_id: "TRK-002".to_string(),
            cost_per_km: 7.12,
            fixed_monthly: 22800.0,
            fuel_l_per_100km: 48.0,
        },
    );

    m.insert(
        "TRK-003",
        CostProfile {
            truck_id: "TRK-003".to_string(),
            cost_per_km: 6.78,
            fixed_monthly: 20900.0,
            fuel_l_per_100km: 42.0,
        },
    );

    m
});

/// Look up a built-in profile by truck id
pub fn get_cost_profile(truck_id: &str) -> Option<&'static CostProfile> {
    COST_PROFILES.get(truck_id)
}

/// The profile applied when a truck id is unrecognized
pub fn default_cost_profile() -> CostProfile {
    COST_PROFILES[DEFAULT_TRUCK_ID].clone()
}

/// All built-in profiles, ordered by truck id
pub fn builtin_cost_profiles() -> Vec<CostProfile> {
    let mut profiles: Vec<CostProfile> = COST_PROFILES.values().cloned().collect();
    profiles.sort_by(|a, b| a.truck_id.cmp(&b.truck_id));
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_truck() {
        let profile = get_cost_profile("TRK-002").unwrap();
        assert_eq!(profile.cost_per_km, 7.12);
    }

    #[test]
    fn test_default_profile_is_trk001() {
        let profile = default_cost_profile();
        assert_eq!(profile.truck_id, "TRK-001");
        assert_eq!(profile.cost_per_km, 6.94);
    }

    #[test]
    fn test_builtin_profiles_sorted() {
        let profiles = builtin_cost_profiles();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].truck_id, "TRK-001");
        assert_eq!(profiles[2].truck_id, "TRK-003");
    }
}
