//! Domain models

pub mod cost_profile;
pub mod slip;
pub mod trip;

pub use cost_profile::CostProfile;
pub use slip::{FuelSlip, LoadingSlip, OffloadingSlip};
pub use trip::{Trip, TripStatus};
