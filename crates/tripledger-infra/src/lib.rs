//! Infrastructure layer
//!
//! Concrete implementations of the domain repository traits, plus file
//! loaders for cost-profile masters and slip CSV imports.

pub mod cost_profile_loader;
pub mod persistence;
pub mod slip_csv;
