//! Trip profitability engine
//!
//! Aggregates slip records per trip and applies the slip-costed model:
//! revenue from delivered tonnage over distance, variable cost per km, fuel
//! cost from slips. All functions are pure and order-independent; they never
//! mutate their inputs.

use serde::{Deserialize, Serialize};

use crate::model::{CostProfile, FuelSlip, LoadingSlip, OffloadingSlip, Trip};

/// Per-trip sums over the slips referencing one trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripAggregates {
    pub total_tonnage_loaded: f64,
    pub total_tonnage_delivered: f64,
    pub total_fuel_cost: f64,
    pub total_litres: f64,
}

/// Sum tonnage and fuel figures across the slips referencing `trip_id`
///
/// Slips referencing other trips are ignored. Empty matching sets yield
/// zero aggregates, not an error.
pub fn aggregate_trip(
    trip_id: &str,
    loading_slips: &[LoadingSlip],
    offloading_slips: &[OffloadingSlip],
    fuel_slips: &[FuelSlip],
) -> TripAggregates {
    let total_tonnage_loaded = loading_slips
        .iter()
        .filter(|s| s.trip_id == trip_id)
        .map(|s| s.tonnage_collected)
        .sum();

    let total_tonnage_delivered = offloading_slips
        .iter()
        .filter(|s| s.trip_id == trip_id)
        .map(|s| s.tonnage_dropped)
        .sum();

    let matching_fuel: Vec<&FuelSlip> = fuel_slips.iter().filter(|s| s.trip_id == trip_id).collect();
    let total_fuel_cost = matching_fuel.iter().map(|s| s.total_cost()).sum();
    let total_litres = matching_fuel.iter().map(|s| s.litres).sum();

    TripAggregates {
        total_tonnage_loaded,
        total_tonnage_delivered,
        total_fuel_cost,
        total_litres,
    }
}

/// Profitability figures for a single trip under the slip-costed model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripProfitability {
    pub revenue: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub tonnage_delivered: f64,
    pub fuel_cost: f64,
    pub margin_percent: f64,
}

/// Slip-costed profitability from raw figures
///
/// Returns None unless both distance and delivered tonnage are positive;
/// callers render that as "not yet computable" rather than an error.
pub fn slip_costed_profitability(
    distance_km: f64,
    tonnage_delivered: f64,
    total_fuel_cost: f64,
    cost_per_km: f64,
    rate_per_ton_km: f64,
) -> Option<TripProfitability> {
    if distance_km <= 0.0 || tonnage_delivered <= 0.0 {
        return None;
    }

    let revenue = distance_km * tonnage_delivered * rate_per_ton_km;
    let variable_cost = distance_km * cost_per_km;
    let total_cost = variable_cost + total_fuel_cost;
    let profit = revenue - total_cost;
    let margin_percent = if revenue > 0.0 {
        (profit / revenue) * 100.0
    } else {
        0.0
    };

    Some(TripProfitability {
        revenue,
        total_cost,
        profit,
        tonnage_delivered,
        fuel_cost: total_fuel_cost,
        margin_percent,
    })
}

/// Compute profitability for a trip from its aggregates and cost profile
pub fn calculate_profitability(
    trip: &Trip,
    aggregates: &TripAggregates,
    profile: &CostProfile,
    rate_per_ton_km: f64,
) -> Option<TripProfitability> {
    slip_costed_profitability(
        trip.distance_km,
        aggregates.total_tonnage_delivered,
        aggregates.total_fuel_cost,
        profile.cost_per_km,
        rate_per_ton_km,
    )
}

/// Tonnage threshold at which revenue covers variable cost over a route
///
/// Kept as the literal `cost_per_km / rate_per_ton_km`. Undefined when the
/// rate is not positive.
pub fn breakeven_tonnage(cost_per_km: f64, rate_per_ton_km: f64) -> Option<f64> {
    if rate_per_ton_km <= 0.0 {
        return None;
    }
    Some(cost_per_km / rate_per_ton_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trk001() -> CostProfile {
        CostProfile {
            truck_id: "TRK-001".to_string(),
            cost_per_km: 6.94,
            fixed_monthly: 21400.0,
            fuel_l_per_100km: 45.0,
        }
    }

    fn trip_with_distance(distance_km: f64) -> Trip {
        let mut trip = Trip::new(
            "TRK-001",
            "DRV-001",
            "JHB to DBN",
            NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        );
        trip.distance_km = distance_km;
        trip
    }

    fn loading(trip_id: &str, tons: f64) -> LoadingSlip {
        LoadingSlip::new(trip_id, tons, "Quarry A", "Client A", "T-100", None)
    }

    fn offloading(trip_id: &str, tons: f64) -> OffloadingSlip {
        OffloadingSlip::new(trip_id, tons, "Site B", "Receiver B", "J. Dlamini", None)
    }

    fn fuel(trip_id: &str, litres: f64, price: f64) -> FuelSlip {
        FuelSlip::new(trip_id, litres, price, "Engen N3", None)
    }

    #[test]
    fn test_aggregate_empty_slip_sets() {
        let agg = aggregate_trip("trip-1", &[], &[], &[]);
        assert_eq!(agg, TripAggregates::default());
    }

    #[test]
    fn test_aggregate_filters_by_trip() {
        let loading_slips = vec![loading("trip-1", 10.0), loading("trip-2", 99.0), loading("trip-1", 5.5)];
        let offloading_slips = vec![offloading("trip-1", 9.5), offloading("trip-2", 50.0)];
        let fuel_slips = vec![fuel("trip-1", 100.0, 24.50), fuel("trip-2", 300.0, 20.0)];

        let agg = aggregate_trip("trip-1", &loading_slips, &offloading_slips, &fuel_slips);
        assert!((agg.total_tonnage_loaded - 15.5).abs() < 1e-9);
        assert!((agg.total_tonnage_delivered - 9.5).abs() < 1e-9);
        assert!((agg.total_fuel_cost - 2450.0).abs() < 1e-9);
        assert!((agg.total_litres - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let mut fuel_slips = vec![fuel("trip-1", 100.0, 24.50), fuel("trip-1", 85.0, 23.10), fuel("trip-1", 40.0, 25.00)];
        let forward = aggregate_trip("trip-1", &[], &[], &fuel_slips);
        fuel_slips.reverse();
        let reversed = aggregate_trip("trip-1", &[], &[], &fuel_slips);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_trk001_full_load_jhb_dbn() {
        // 450 km, 27.5 t delivered, R2.50 per ton-km, no fuel slips
        let trip = trip_with_distance(450.0);
        let aggregates = TripAggregates {
            total_tonnage_loaded: 27.5,
            total_tonnage_delivered: 27.5,
            total_fuel_cost: 0.0,
            total_litres: 0.0,
        };

        let result = calculate_profitability(&trip, &aggregates, &trk001(), 2.50).unwrap();
        assert!((result.revenue - 30937.50).abs() < 1e-9);
        assert!((result.total_cost - 3123.00).abs() < 1e-9);
        assert!((result.profit - 27814.50).abs() < 1e-9);
        assert!((result.margin_percent - 89.91).abs() < 0.01);
    }

    #[test]
    fn test_fuel_cost_reduces_profit() {
        let trip = trip_with_distance(450.0);
        let aggregates = TripAggregates {
            total_tonnage_loaded: 27.5,
            total_tonnage_delivered: 27.5,
            total_fuel_cost: 4532.50,
            total_litres: 185.0,
        };

        let result = calculate_profitability(&trip, &aggregates, &trk001(), 2.50).unwrap();
        assert!((result.total_cost - (3123.00 + 4532.50)).abs() < 1e-9);
        assert!((result.profit - (30937.50 - 3123.00 - 4532.50)).abs() < 1e-9);
        assert!((result.fuel_cost - 4532.50).abs() < 1e-9);
    }

    #[test]
    fn test_profit_equals_revenue_minus_cost() {
        let result = slip_costed_profitability(320.0, 18.0, 2100.0, 7.12, 2.50).unwrap();
        assert_eq!(result.profit, result.revenue - result.total_cost);
        assert!(result.revenue >= 0.0);
    }

    #[test]
    fn test_absent_when_distance_zero() {
        let trip = trip_with_distance(0.0);
        let aggregates = TripAggregates {
            total_tonnage_delivered: 27.5,
            ..Default::default()
        };
        assert!(calculate_profitability(&trip, &aggregates, &trk001(), 2.50).is_none());
    }

    #[test]
    fn test_absent_when_nothing_delivered() {
        let trip = trip_with_distance(450.0);
        let aggregates = TripAggregates::default();
        assert!(calculate_profitability(&trip, &aggregates, &trk001(), 2.50).is_none());
    }

    #[test]
    fn test_margin_zero_when_revenue_zero() {
        // Zero rate makes revenue zero while the preconditions still hold
        let result = slip_costed_profitability(450.0, 27.5, 0.0, 6.94, 0.0).unwrap();
        assert_eq!(result.revenue, 0.0);
        assert_eq!(result.margin_percent, 0.0);
    }

    #[test]
    fn test_breakeven_tonnage() {
        let breakeven = breakeven_tonnage(6.94, 2.50).unwrap();
        assert!((breakeven - 2.776).abs() < 1e-9);
    }

    #[test]
    fn test_breakeven_undefined_at_zero_rate() {
        assert!(breakeven_tonnage(6.94, 0.0).is_none());
        assert!(breakeven_tonnage(6.94, -1.0).is_none());
    }
}
