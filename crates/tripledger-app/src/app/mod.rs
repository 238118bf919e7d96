//! Application use cases

pub mod trip_service;

pub use trip_service::{DashboardSummary, TripService};
