//! Field-captured slip records
//!
//! Slips are immutable once created: there are no mutating methods, and
//! repositories only append them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Slip captured when cargo is collected at a loading point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingSlip {
    pub id: String,
    pub trip_id: String,
    pub tonnage_collected: f64,
    pub loading_point: String,
    pub client: String,
    pub ticket_number: String,
    #[serde(default)]
    pub photo_base64: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LoadingSlip {
    pub fn new(
        trip_id: &str,
        tonnage_collected: f64,
        loading_point: &str,
        client: &str,
        ticket_number: &str,
        photo_base64: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            tonnage_collected,
            loading_point: loading_point.to_string(),
            client: client.to_string(),
            ticket_number: ticket_number.to_string(),
            photo_base64,
            created_at: Utc::now(),
        }
    }
}

/// Slip captured when cargo is dropped at the receiver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffloadingSlip {
    pub id: String,
    pub trip_id: String,
    pub tonnage_dropped: f64,
    pub drop_point: String,
    pub receiver: String,
    pub signed_by: String,
    #[serde(default)]
    pub photo_base64: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl OffloadingSlip {
    pub fn new(
        trip_id: &str,
        tonnage_dropped: f64,
        drop_point: &str,
        receiver: &str,
        signed_by: &str,
        photo_base64: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            tonnage_dropped,
            drop_point: drop_point.to_string(),
            receiver: receiver.to_string(),
            signed_by: signed_by.to_string(),
            photo_base64,
            created_at: Utc::now(),
        }
    }
}

/// Fuel purchase receipt for a trip
///
/// The slip stores litres and unit price only; the total is always derived
/// so it cannot drift from its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelSlip {
    pub id: String,
    pub trip_id: String,
    pub litres: f64,
    pub price_per_litre: f64,
    pub station: String,
    #[serde(default)]
    pub photo_base64: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl FuelSlip {
    pub fn new(
        trip_id: &str,
        litres: f64,
        price_per_litre: f64,
        station: &str,
        photo_base64: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id: trip_id.to_string(),
            litres,
            price_per_litre,
            station: station.to_string(),
            photo_base64,
            created_at: Utc::now(),
        }
    }

    /// Total cost of the purchase: `litres * price_per_litre`
    pub fn total_cost(&self) -> f64 {
        self.litres * self.price_per_litre
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_slip_total_cost() {
        let slip = FuelSlip::new("trip-1", 185.0, 24.50, "Engen N3", None);
        assert_eq!(slip.total_cost(), 4532.50);
    }

    #[test]
    fn test_fuel_slip_total_cost_zero_price() {
        let slip = FuelSlip::new("trip-1", 50.0, 0.0, "Depot pump", None);
        assert_eq!(slip.total_cost(), 0.0);
    }
}
