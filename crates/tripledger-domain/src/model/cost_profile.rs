//! Per-truck cost constants

use serde::{Deserialize, Serialize};

/// Per-truck constants used to compute variable operating cost
///
/// Keyed by truck identifier. Lookups for unknown trucks fall back to a
/// default profile at the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostProfile {
    pub truck_id: String,
    pub cost_per_km: f64,
    pub fixed_monthly: f64,
    pub fuel_l_per_100km: f64,
}

impl CostProfile {
    /// Expected fuel consumption in litres over a distance
    pub fn expected_litres(&self, distance_km: f64) -> f64 {
        distance_km / 100.0 * self.fuel_l_per_100km
    }
}
