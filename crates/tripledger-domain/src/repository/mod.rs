//! Repository trait definitions for trip and slip storage
//!
//! The engine itself never loads data; callers own the collections and pass
//! them in. These traits let the application layer swap file-backed storage
//! for in-memory fixtures in tests.

use crate::model::{CostProfile, FuelSlip, LoadingSlip, OffloadingSlip, Trip};
use tripledger_types::Error;

/// Repository for trip records
pub trait TripRepository {
    /// Save a new trip or overwrite an existing one by id
    fn save(&mut self, trip: &Trip) -> Result<(), Error>;

    /// Find a trip by its identifier
    fn find_by_id(&self, id: &str) -> Result<Option<Trip>, Error>;

    /// Find all trips, newest first
    fn find_all(&self) -> Result<Vec<Trip>, Error>;

    /// Find trips still accepting slips
    fn find_active(&self) -> Result<Vec<Trip>, Error>;
}

/// Repository for loading slips
pub trait LoadingSlipRepository {
    /// Append a slip
    fn save(&mut self, slip: &LoadingSlip) -> Result<(), Error>;

    /// Load all loading slips
    fn find_all(&self) -> Result<Vec<LoadingSlip>, Error>;

    /// Find slips referencing a trip
    fn find_by_trip(&self, trip_id: &str) -> Result<Vec<LoadingSlip>, Error>;
}

/// Repository for offloading slips
pub trait OffloadingSlipRepository {
    /// Append a slip
    fn save(&mut self, slip: &OffloadingSlip) -> Result<(), Error>;

    /// Load all offloading slips
    fn find_all(&self) -> Result<Vec<OffloadingSlip>, Error>;

    /// Find slips referencing a trip
    fn find_by_trip(&self, trip_id: &str) -> Result<Vec<OffloadingSlip>, Error>;
}

/// Repository for fuel slips
pub trait FuelSlipRepository {
    /// Append a slip
    fn save(&mut self, slip: &FuelSlip) -> Result<(), Error>;

    /// Load all fuel slips
    fn find_all(&self) -> Result<Vec<FuelSlip>, Error>;

    /// Find slips referencing a trip
    fn find_by_trip(&self, trip_id: &str) -> Result<Vec<FuelSlip>, Error>;
}

/// Repository for per-truck cost profiles
pub trait CostProfileRepository {
    /// Load all cost profiles
    fn find_all(&self) -> Result<Vec<CostProfile>, Error>;

    /// Find the profile for a truck, None when the truck is unknown
    fn find_by_truck(&self, truck_id: &str) -> Result<Option<CostProfile>, Error>;
}
