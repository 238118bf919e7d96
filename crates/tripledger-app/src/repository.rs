//! Repository adapters for the persistence layer

use tripledger_infra::cost_profile_loader::CostProfileLoader;
use tripledger_infra::persistence::{
    FileFuelSlipRepository, FileLoadingSlipRepository, FileOffloadingSlipRepository,
    FileTripRepository, InMemoryCostProfileRepository,
};
use tripledger_types::Result;

use crate::config::Config;
use crate::constants::builtin_cost_profiles;

/// Open the file-based trip repository
pub fn open_trip_repo(config: &Config) -> Result<FileTripRepository> {
    let store_dir = config.store_dir()?;
    FileTripRepository::open(&store_dir)
}

/// Open the file-based loading slip repository
pub fn open_loading_slip_repo(config: &Config) -> Result<FileLoadingSlipRepository> {
    let store_dir = config.store_dir()?;
    FileLoadingSlipRepository::open(&store_dir)
}

/// Open the file-based offloading slip repository
pub fn open_offloading_slip_repo(config: &Config) -> Result<FileOffloadingSlipRepository> {
    let store_dir = config.store_dir()?;
    FileOffloadingSlipRepository::open(&store_dir)
}

/// Open the file-based fuel slip repository
pub fn open_fuel_slip_repo(config: &Config) -> Result<FileFuelSlipRepository> {
    let store_dir = config.store_dir()?;
    FileFuelSlipRepository::open(&store_dir)
}

/// Open the cost profile repository
///
/// Profiles come from the configured TOML when set, otherwise from the
/// built-in fleet constants.
pub fn open_cost_profile_repo(config: &Config) -> Result<InMemoryCostProfileRepository> {
    match &config.cost_profiles_path {
        Some(path) => {
            let loader = CostProfileLoader::load_from_file(path)?;
            let profiles = loader.all_profiles().into_iter().cloned().collect();
            Ok(InMemoryCostProfileRepository::from_profiles(profiles))
        }
        None => Ok(InMemoryCostProfileRepository::from_profiles(
            builtin_cost_profiles(),
        )),
    }
}
