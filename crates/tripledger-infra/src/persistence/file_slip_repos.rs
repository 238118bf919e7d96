//! File-based slip repositories
//!
//! Each slip kind keeps its own JSON file in the store directory. Slips are
//! append-only; saving rewrites the file with the slip added.

use std::path::{Path, PathBuf};

use tripledger_domain::model::{FuelSlip, LoadingSlip, OffloadingSlip};
use tripledger_domain::repository::{
    FuelSlipRepository, LoadingSlipRepository, OffloadingSlipRepository,
};
use tripledger_types::Error;

use super::{load_json_or_default, save_json};

/// File-based loading slip repository (JSON)
pub struct FileLoadingSlipRepository {
    path: PathBuf,
    slips: Vec<LoadingSlip>,
}

impl FileLoadingSlipRepository {
    pub fn open(store_dir: &Path) -> Result<Self, Error> {
        let path = store_dir.join("loading_slips.json");
        let slips = load_json_or_default(&path)?;
        Ok(Self { path, slips })
    }

    pub fn count(&self) -> usize {
        self.slips.len()
    }
}

impl LoadingSlipRepository for FileLoadingSlipRepository {
    fn save(&mut self, slip: &LoadingSlip) -> Result<(), Error> {
        self.slips.push(slip.clone());
        save_json(&self.path, &self.slips)
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

/// File-based offloading slip repository (JSON)
pub struct FileOffloadingSlipRepository {
    path: PathBuf,
    slips: Vec<OffloadingSlip>,
}

impl FileOffloadingSlipRepository {
    pub fn open(store_dir: &Path) -> Result<Self, Error> {
        let path = store_dir.join("offloading_slips.json");
        let slips = load_json_or_default(&path)?;
        Ok(Self { path, slips })
    }

    pub fn count(&self) -> usize {
        self.slips.len()
    }
}

impl OffloadingSlipRepository for FileOffloadingSlipRepository {
    fn save(&mut self, slip: &OffloadingSlip) -> Result<(), Error> {
        self.slips.push(slip.clone());
        save_json(&self.path, &self.slips)
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

/// File-based fuel slip repository (JSON)
pub struct FileFuelSlipRepository {
    path: PathBuf,
    slips: Vec<FuelSlip>,
}

impl FileFuelSlipRepository {
    pub fn open(store_dir: &Path) -> Result<Self, Error> {
        let path = store_dir.join("fuel_slips.json");
        let slips = load_json_or_default(&path)?;
        Ok(Self { path, slips })
    }

    pub fn count(&self) -> usize {
        self.slips.len()
    }
}

impl FuelSlipRepository for FileFuelSlipRepository {
    fn save(&mut self, slip: &FuelSlip) -> Result<(), Error> {
        self.slips.push(slip.clone());
        save_json(&self.path, &self.slips)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fuel_slips_persist_across_open() {
        let dir = tempdir().unwrap();

        {
            let mut repo = FileFuelSlipRepository::open(dir.path()).unwrap();
            repo.save(&FuelSlip::new("trip-1", 185.0, 24.50, "Engen N3", None)).unwrap();
            repo.save(&FuelSlip::new("trip-2", 60.0, 23.80, "Sasol Midway", None)).unwrap();
        }

        let reopened = FileFuelSlipRepository::open(dir.path()).unwrap();
        assert_eq!(reopened.count(), 2);
        let for_trip = reopened.find_by_trip("trip-1").unwrap();
        assert_eq!(for_trip.len(), 1);
        assert_eq!(for_trip[0].total_cost(), 4532.50);
    }

    #[test]
    fn test_slip_kinds_use_separate_files() {
        let dir = tempdir().unwrap();

        let mut loading = FileLoadingSlipRepository::open(dir.path()).unwrap();
        loading
            .save(&LoadingSlip::new("trip-1", 27.5, "Quarry A", "Client A", "T-100", None))
            .unwrap();

        let offloading = FileOffloadingSlipRepository::open(dir.path()).unwrap();
        assert_eq!(offloading.count(), 0);
        assert!(dir.path().join("loading_slips.json").exists());
        assert!(!dir.path().join("offloading_slips.json").exists());
    }
}
