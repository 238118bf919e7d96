//! File-based implementation of TripRepository
//!
//! Trips live in a single `trips.json` keyed by trip id. The file is
//! rewritten on every save, matching the append-rate of field capture.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tripledger_domain::model::Trip;
use tripledger_domain::repository::TripRepository;
use tripledger_types::Error;

use super::{load_json_or_default, save_json};

/// File-based trip repository (JSON)
pub struct FileTripRepository {
    path: PathBuf,
    trips: HashMap<String, Trip>,
}

impl FileTripRepository {
    /// Open the repository inside a store directory
    pub fn open(store_dir: &Path) -> Result<Self, Error> {
        let path = store_dir.join("trips.json");
        let trips = load_json_or_default(&path)?;
        Ok(Self { path, trips })
    }

    /// Number of stored trips
    pub fn count(&self) -> usize {
        self.trips.len()
    }
}

impl TripRepository for FileTripRepository {
    fn save(&mut self, trip: &Trip) -> Result<(), Error> {
        self.trips.insert(trip.id.clone(), trip.clone());
        save_json(&self.path, &self.trips)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Trip>, Error> {
        Ok(self.trips.get(id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Trip>, Error> {
        let mut trips: Vec<Trip> = self.trips.values().cloned().collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }

    fn find_active(&self) -> Result<Vec<Trip>, Error> {
        let mut trips: Vec<Trip> = self.trips.values().filter(|t| t.is_active()).cloned().collect();
        trips.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(trips)
    }
}
