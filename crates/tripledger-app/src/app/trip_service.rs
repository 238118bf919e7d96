//! Trip Service - Core Use Cases for Trip and Slip Tracking
//!
//! This service orchestrates the ledger workflow:
//! 1. Create trips and record distance / completion
//! 2. Attach field-captured slips to active trips
//! 3. Aggregate slips and run the profitability engine
//! 4. Summarize the fleet for the dashboard view
//!
//! The service owns its repositories and holds no other state; every
//! calculation goes through the pure engine in the domain crate.

use chrono::NaiveDate;
use serde::Serialize;

use tripledger_domain::model::{CostProfile, FuelSlip, LoadingSlip, OffloadingSlip, Trip, TripStatus};
use tripledger_domain::repository::{
    CostProfileRepository, FuelSlipRepository, LoadingSlipRepository, OffloadingSlipRepository,
    TripRepository,
};
use tripledger_domain::service::{
    aggregate_trip, calculate_profitability, evaluate_cost_model, TripAggregates, TripCostInputs,
    TripEvaluation, TripProfitability,
};
use tripledger_types::{CostModel, Error, Result};

use crate::constants::default_cost_profile;

/// Fleet-level summary figures for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub active_trips: usize,
    pub completed_trips: usize,
    pub loading_slips: usize,
    pub offloading_slips: usize,
    pub fuel_slips: usize,
    /// Sum of profit across trips whose profitability is computable
    pub total_profit: f64,
}

/// Application service over the trip and slip repositories
pub struct TripService<T, L, O, F, C>
where
    T: TripRepository,
    L: LoadingSlipRepository,
    O: OffloadingSlipRepository,
    F: FuelSlipRepository,
    C: CostProfileRepository,
{
    trips: T,
    loading: L,
    offloading: O,
    fuel: F,
    profiles: C,
}

impl<T, L, O, F, C> TripService<T, L, O, F, C>
where
    T: TripRepository,
    L: LoadingSlipRepository,
    O: OffloadingSlipRepository,
    F: FuelSlipRepository,
    C: CostProfileRepository,
{
    pub fn new(trips: T, loading: L, offloading: O, fuel: F, profiles: C) -> Self {
        Self {
            trips,
            loading,
            offloading,
            fuel,
            profiles,
        }
    }

    /// Create a new active trip
    pub fn create_trip(
        &mut self,
        truck_id: &str,
        driver_id: &str,
        route: &str,
        date: NaiveDate,
    ) -> Result<Trip> {
        if truck_id.is_empty() || driver_id.is_empty() || route.is_empty() {
            return Err(Error::InvalidTrip(
                "truck, driver, and route are required".to_string(),
            ));
        }
        let trip = Trip::new(truck_id, driver_id, route, date);
        self.trips.save(&trip)?;
        Ok(trip)
    }

    /// Record the distance driven on a trip
    pub fn set_distance(&mut self, trip_id: &str, distance_km: f64) -> Result<Trip> {
        if distance_km < 0.0 {
            return Err(Error::InvalidTrip(format!(
                "distance must not be negative: {distance_km}"
            )));
        }
        let mut trip = self.require_trip(trip_id)?;
        trip.distance_km = distance_km;
        self.trips.save(&trip)?;
        Ok(trip)
    }

    /// Mark a trip completed; it stops accepting slips
    pub fn complete_trip(&mut self, trip_id: &str) -> Result<Trip> {
        let mut trip = self.require_trip(trip_id)?;
        trip.status = TripStatus::Completed;
        self.trips.save(&trip)?;
        Ok(trip)
    }

    pub fn trip(&self, trip_id: &str) -> Result<Option<Trip>> {
        self.trips.find_by_id(trip_id)
    }

    pub fn all_trips(&self) -> Result<Vec<Trip>> {
        self.trips.find_all()
    }

    pub fn active_trips(&self) -> Result<Vec<Trip>> {
        self.trips.find_active()
    }

    /// Attach a loading slip to an active trip
    pub fn add_loading_slip(
        &mut self,
        trip_id: &str,
        tonnage_collected: f64,
        loading_point: &str,
        client: &str,
        ticket_number: &str,
        photo_base64: Option<String>,
    ) -> Result<LoadingSlip> {
        if tonnage_collected <= 0.0 {
            return Err(Error::InvalidSlip(format!(
                "tonnage collected must be positive: {tonnage_collected}"
            )));
        }
        self.require_active_trip(trip_id)?;
        let slip = LoadingSlip::new(
            trip_id,
            tonnage_collected,
            loading_point,
            client,
            ticket_number,
            photo_base64,
        );
        self.loading.save(&slip)?;
        Ok(slip)
    }

    /// Attach an offloading slip to an active trip
    pub fn add_offloading_slip(
        &mut self,
        trip_id: &str,
        tonnage_dropped: f64,
        drop_point: &str,
        receiver: &str,
        signed_by: &str,
        photo_base64: Option<String>,
    ) -> Result<OffloadingSlip> {
        if tonnage_dropped <= 0.0 {
            return Err(Error::InvalidSlip(format!(
                "tonnage dropped must be positive: {tonnage_dropped}"
            )));
        }
        self.require_active_trip(trip_id)?;
        let slip = OffloadingSlip::new(
            trip_id,
            tonnage_dropped,
            drop_point,
            receiver,
            signed_by,
            photo_base64,
        );
        self.offloading.save(&slip)?;
        Ok(slip)
    }

    /// Attach a fuel slip to an active trip
    pub fn add_fuel_slip(
        &mut self,
        trip_id: &str,
        litres: f64,
        price_per_litre: f64,
        station: &str,
        photo_base64: Option<String>,
    ) -> Result<FuelSlip> {
        if litres <= 0.0 {
            return Err(Error::InvalidSlip(format!(
                "litres must be positive: {litres}"
            )));
        }
        if price_per_litre < 0.0 {
            return Err(Error::InvalidSlip(format!(
                "price per litre must not be negative: {price_per_litre}"
            )));
        }
        self.require_active_trip(trip_id)?;
        let slip = FuelSlip::new(trip_id, litres, price_per_litre, station, photo_base64);
        self.fuel.save(&slip)?;
        Ok(slip)
    }

    /// Import pre-built loading slips, applying the same gating as manual capture
    pub fn import_loading_slips(&mut self, slips: Vec<LoadingSlip>) -> Result<usize> {
        for slip in &slips {
            self.require_active_trip(&slip.trip_id)?;
        }
        let count = slips.len();
        for slip in &slips {
            self.loading.save(slip)?;
        }
        Ok(count)
    }

    /// Import pre-built offloading slips
    pub fn import_offloading_slips(&mut self, slips: Vec<OffloadingSlip>) -> Result<usize> {
        for slip in &slips {
            self.require_active_trip(&slip.trip_id)?;
        }
        let count = slips.len();
        for slip in &slips {
            self.offloading.save(slip)?;
        }
        Ok(count)
    }

    /// Import pre-built fuel slips
    pub fn import_fuel_slips(&mut self, slips: Vec<FuelSlip>) -> Result<usize> {
        for slip in &slips {
            self.require_active_trip(&slip.trip_id)?;
        }
        let count = slips.len();
        for slip in &slips {
            self.fuel.save(slip)?;
        }
        Ok(count)
    }

    pub fn loading_slips(&self) -> Result<Vec<LoadingSlip>> {
        self.loading.find_all()
    }

    pub fn offloading_slips(&self) -> Result<Vec<OffloadingSlip>> {
        self.offloading.find_all()
    }

    pub fn fuel_slips(&self) -> Result<Vec<FuelSlip>> {
        self.fuel.find_all()
    }

    /// Sum the slips referencing a trip
    pub fn aggregates_for(&self, trip_id: &str) -> Result<TripAggregates> {
        let loading = self.loading.find_all()?;
        let offloading = self.offloading.find_all()?;
        let fuel = self.fuel.find_all()?;
        Ok(aggregate_trip(trip_id, &loading, &offloading, &fuel))
    }

    /// The cost profile for a truck, falling back to the default profile
    pub fn resolve_cost_profile(&self, truck_id: &str) -> Result<CostProfile> {
        Ok(self
            .profiles
            .find_by_truck(truck_id)?
            .unwrap_or_else(default_cost_profile))
    }

    /// Slip-costed profitability for a stored trip
    ///
    /// None means the trip has no recorded distance or no delivered tonnage
    /// yet; the caller renders it as "not yet computable".
    pub fn trip_profitability(
        &self,
        trip_id: &str,
        rate_per_ton_km: f64,
    ) -> Result<Option<TripProfitability>> {
        let trip = self.require_trip(trip_id)?;
        let aggregates = self.aggregates_for(trip_id)?;
        let profile = self.resolve_cost_profile(&trip.truck_id)?;
        Ok(calculate_profitability(
            &trip,
            &aggregates,
            &profile,
            rate_per_ton_km,
        ))
    }

    /// Evaluate a stored trip under an explicitly selected cost model
    pub fn evaluate_trip(
        &self,
        trip_id: &str,
        model: CostModel,
        rate_per_ton_km: f64,
        fuel_price: f64,
        days_for_trip: f64,
    ) -> Result<Option<TripEvaluation>> {
        let trip = self.require_trip(trip_id)?;
        let aggregates = self.aggregates_for(trip_id)?;
        let profile = self.resolve_cost_profile(&trip.truck_id)?;

        let inputs = TripCostInputs {
            distance_km: trip.distance_km,
            tonnage_delivered: aggregates.total_tonnage_delivered,
            rate_per_ton_km,
            cost_per_km: profile.cost_per_km,
            total_fuel_cost: aggregates.total_fuel_cost,
            litres_used: aggregates.total_litres,
            fuel_price,
            fixed_monthly: profile.fixed_monthly,
            days_for_trip,
        };

        Ok(evaluate_cost_model(model, &inputs))
    }

    /// Trips paired with their profitability where computable
    pub fn report_rows(
        &self,
        rate_per_ton_km: f64,
    ) -> Result<Vec<(Trip, Option<TripProfitability>)>> {
        let loading = self.loading.find_all()?;
        let offloading = self.offloading.find_all()?;
        let fuel = self.fuel.find_all()?;

        let mut rows = Vec::new();
        for trip in self.trips.find_all()? {
            let aggregates = aggregate_trip(&trip.id, &loading, &offloading, &fuel);
            let profile = self.resolve_cost_profile(&trip.truck_id)?;
            let profitability =
                calculate_profitability(&trip, &aggregates, &profile, rate_per_ton_km);
            rows.push((trip, profitability));
        }
        Ok(rows)
    }

    /// Fleet summary for the dashboard view
    pub fn dashboard(&self, rate_per_ton_km: f64) -> Result<DashboardSummary> {
        let rows = self.report_rows(rate_per_ton_km)?;
        let active_trips = rows.iter().filter(|(t, _)| t.is_active()).count();
        let completed_trips = rows.len() - active_trips;
        let total_profit = rows
            .iter()
            .filter_map(|(_, p)| p.as_ref().map(|p| p.profit))
            .sum();

        Ok(DashboardSummary {
            active_trips,
            completed_trips,
            loading_slips: self.loading.find_all()?.len(),
            offloading_slips: self.offloading.find_all()?.len(),
            fuel_slips: self.fuel.find_all()?.len(),
            total_profit,
        })
    }

    fn require_trip(&self, trip_id: &str) -> Result<Trip> {
        self.trips
            .find_by_id(trip_id)?
            .ok_or_else(|| Error::TripNotFound(trip_id.to_string()))
    }

    fn require_active_trip(&self, trip_id: &str) -> Result<Trip> {
        let trip = self.require_trip(trip_id)?;
        if !trip.is_active() {
            return Err(Error::TripNotActive(trip_id.to_string()));
        }
        Ok(trip)
    }
}
