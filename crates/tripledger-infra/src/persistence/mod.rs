//! Persistence implementations of the domain repository traits

pub mod file_slip_repos;
pub mod file_trip_repo;
pub mod memory;

pub use file_slip_repos::{
    FileFuelSlipRepository, FileLoadingSlipRepository, FileOffloadingSlipRepository,
};
pub use file_trip_repo::FileTripRepository;
pub use memory::{
    InMemoryCostProfileRepository, InMemoryFuelSlipRepository, InMemoryLoadingSlipRepository,
    InMemoryOffloadingSlipRepository, InMemoryTripRepository,
};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tripledger_types::{Error, StoreError};

/// Load a JSON collection, or the default when the file does not exist yet
pub(crate) fn load_json_or_default<T>(path: &Path) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| StoreError::Corrupted(format!("{}: {}", path.display(), e)).into())
}

/// Write a JSON collection, creating the parent directory if needed
pub(crate) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
