//! Built-in constants

pub mod cost_profiles;

pub use cost_profiles::{builtin_cost_profiles, default_cost_profile, get_cost_profile, DEFAULT_TRUCK_ID};
