//! In-memory repository implementations
//!
//! Used as synthetic fixtures in tests and anywhere the engine is driven
//! without a store directory.

use tripledger_domain::model::{CostProfile, FuelSlip, LoadingSlip, OffloadingSlip, Trip};
use tripledger_domain::repository::{
    CostProfileRepository, FuelSlipRepository, LoadingSlipRepository, OffloadingSlipRepository,
    TripRepository,
};
use tripledger_types::Error;

/// In-memory trip repository
#[derive(Debug, Default)]
pub struct InMemoryTripRepository {
    trips: Vec<Trip>,
}

impl InMemoryTripRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TripRepository for InMemoryTripRepository {
    fn save(&mut self, trip: &Trip) -> Result<(), Error> {
        if let Some(existing) = self.trips.iter_mut().find(|t| t.id == trip.id) {
            *existing = trip.clone();
        } else {
            self.trips.push(trip.clone());
        }
        Ok(())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Trip>, Error> {
        Ok(self.trips.iter().find(|t| t.id == id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Trip>, Error> {
        let mut trips = self.trips.clone();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    fn find_active(&self) -> Result<Vec<Trip>, Error> {
        Ok(self.trips.iter().filter(|t| t.is_active()).cloned().collect())
    }
}

/// In-memory loading slip repository
#[derive(Debug, Default)]
pub struct InMemoryLoadingSlipRepository {
    slips: Vec<LoadingSlip>,
}

impl InMemoryLoadingSlipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadingSlipRepository for InMemoryLoadingSlipRepository {
    fn save(&mut self, slip: &LoadingSlip) -> Result<(), Error> {
        self.slips.push(slip.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<LoadingSlip>, Error> {
        Ok(self.slips.clone())
    }

    fn find_by_trip(&self, trip_id: &str) -> Result<Vec<LoadingSlip>, Error> {
        Ok(self
            .slips
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

/// In-memory offloading slip repository
#[derive(Debug, Default)]
pub struct InMemoryOffloadingSlipRepository {
    slips: Vec<OffloadingSlip>,
}

impl InMemoryOffloadingSlipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OffloadingSlipRepository for InMemoryOffloadingSlipRepository {
    fn save(&mut self, slip: &OffloadingSlip) -> Result<(), Error> {
        self.slips.push(slip.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<OffloadingSlip>, Error> {
        Ok(self.slips.clone())
    }

    fn find_by_trip(&self, trip_id: &str) -> Result<Vec<OffloadingSlip>, Error> {
        Ok(self
            .slips
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

/// In-memory fuel slip repository
#[derive(Debug, Default)]
pub struct InMemoryFuelSlipRepository {
    slips: Vec<FuelSlip>,
}

impl InMemoryFuelSlipRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FuelSlipRepository for InMemoryFuelSlipRepository {
    fn save(&mut self, slip: &FuelSlip) -> Result<(), Error> {
        self.slips.push(slip.clone());
        Ok(())
    }

    fn find_all(&self) -> Result<Vec<FuelSlip>, Error> {
        Ok(self.slips.clone())
    }

    fn find_by_trip(&self, trip_id: &str) -> Result<Vec<FuelSlip>, Error> {
        Ok(self
            .slips
            .iter()
            .filter(|s| s.trip_id == trip_id)
            .cloned()
            .collect())
    }
}

/// In-memory cost profile repository
#[derive(Debug, Default)]
pub struct InMemoryCostProfileRepository {
    profiles: Vec<CostProfile>,
}

impl InMemoryCostProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles(profiles: Vec<CostProfile>) -> Self {
        Self { profiles }
    }
}

impl CostProfileRepository for InMemoryCostProfileRepository {
    fn find_all(&self) -> Result<Vec<CostProfile>, Error> {
        Ok(self.profiles.clone())
    }

    fn find_by_truck(&self, truck_id: &str) -> Result<Option<CostProfile>, Error> {
        Ok(self.profiles.iter().find(|p| p.truck_id == truck_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trip_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn test_trip_save_and_find() {
        let mut repo = InMemoryTripRepository::new();
        let trip = Trip::new("TRK-001", "DRV-001", "JHB to DBN", trip_date());
        repo.save(&trip).unwrap();

        let found = repo.find_by_id(&trip.id).unwrap().unwrap();
        assert_eq!(found.route, "JHB to DBN");
        assert!(repo.find_by_id("missing").unwrap().is_none());
    }

    #[test]
    fn test_trip_save_overwrites_by_id() {
        let mut repo = InMemoryTripRepository::new();
        let mut trip = Trip::new("TRK-001", "DRV-001", "JHB to DBN", trip_date());
        repo.save(&trip).unwrap();

        trip.distance_km = 450.0;
        repo.save(&trip).unwrap();

        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert_eq!(repo.find_by_id(&trip.id).unwrap().unwrap().distance_km, 450.0);
    }

    #[test]
    fn test_find_active_excludes_completed() {
        let mut repo = InMemoryTripRepository::new();
        let active = Trip::new("TRK-001", "DRV-001", "JHB to DBN", trip_date());
        let mut done = Trip::new("TRK-002", "DRV-002", "CPT to PE", trip_date());
        done.status = tripledger_domain::model::TripStatus::Completed;
        repo.save(&active).unwrap();
        repo.save(&done).unwrap();

        let active_trips = repo.find_active().unwrap();
        assert_eq!(active_trips.len(), 1);
        assert_eq!(active_trips[0].id, active.id);
    }

    #[test]
    fn test_slip_find_by_trip_filters() {
        let mut repo = InMemoryFuelSlipRepository::new();
        repo.save(&FuelSlip::new("trip-1", 100.0, 24.50, "Engen N3", None)).unwrap();
        repo.save(&FuelSlip::new("trip-2", 80.0, 23.00, "Shell Ultra City", None)).unwrap();

        let slips = repo.find_by_trip("trip-1").unwrap();
        assert_eq!(slips.len(), 1);
        assert_eq!(slips[0].litres, 100.0);
    }

    #[test]
    fn test_cost_profile_lookup() {
        let repo = InMemoryCostProfileRepository::from_profiles(vec![CostProfile {
            truck_id: "TRK-001".to_string(),
            cost_per_km: 6.94,
            fixed_monthly: 21400.0,
            fuel_l_per_100km: 45.0,
        }]);

        assert!(repo.find_by_truck("TRK-001").unwrap().is_some());
        assert!(repo.find_by_truck("TRK-999").unwrap().is_none());
    }
}
