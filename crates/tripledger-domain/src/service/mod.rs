//! Domain services
//!
//! Pure calculation logic over caller-supplied records.

pub mod cost_model;
pub mod profitability;

pub use cost_model::{
    evaluate_cost_model, extended_cost_breakdown, CostBreakdown, ExtendedCostInputs,
    TripCostInputs, TripEvaluation,
};
pub use profitability::{
    aggregate_trip, breakeven_tonnage, calculate_profitability, slip_costed_profitability,
    TripAggregates, TripProfitability,
};
