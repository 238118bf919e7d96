//! Trip record and lifecycle status

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trip lifecycle status
///
/// A trip is created `Active` and may be marked `Completed` once. Only
/// active trips accept new slips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Active,
    Completed,
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripStatus::Active => write!(f, "Active"),
            TripStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// A single truck journey tracked from creation to completion
///
/// Financial figures are not stored on the trip; they are computed on
/// demand by the profitability engine from the trip and its slips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub truck_id: String,
    pub driver_id: String,
    pub route: String,
    pub date: NaiveDate,
    pub status: TripStatus,
    #[serde(default)]
    pub distance_km: f64,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Create a new active trip with a generated identifier
    pub fn new(truck_id: &str, driver_id: &str, route: &str, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            truck_id: truck_id.to_string(),
            driver_id: driver_id.to_string(),
            route: route.to_string(),
            date,
            status: TripStatus::Active,
            distance_km: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TripStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trip_is_active_with_zero_distance() {
        let trip = Trip::new("TRK-001", "DRV-001", "JHB to DBN", NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert!(trip.is_active());
        assert_eq!(trip.distance_km, 0.0);
        assert!(!trip.id.is_empty());
    }

    #[test]
    fn test_completed_trip_is_not_active() {
        let mut trip = Trip::new("TRK-002", "DRV-007", "CPT to PE", NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        trip.status = TripStatus::Completed;
        assert!(!trip.is_active());
    }
}
