//! Cost-allocation strategies
//!
//! Two policies exist side by side and are selected explicitly by the
//! caller. `SlipCosted` charges distance-variable cost plus fuel as captured
//! on fuel slips. `FixedProrated` charges metered litres and a per-day share
//! of the fixed monthly cost. They produce different totals for the same
//! trip and are kept as separate formulas.

use serde::{Deserialize, Serialize};
use tripledger_types::CostModel;

use super::profitability::{slip_costed_profitability, TripProfitability};

/// Inputs for the fixed-cost prorated breakdown
#[derive(Debug, Clone, Copy)]
pub struct ExtendedCostInputs {
    pub distance_km: f64,
    pub tonnage_delivered: f64,
    pub litres_used: f64,
    pub fuel_price: f64,
    pub variable_cost_per_km: f64,
    pub fixed_monthly_cost: f64,
    pub days_for_trip: f64,
    pub rate_per_ton_km: f64,
}

/// Cost breakdown under the fixed-cost prorated policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fuel_cost: f64,
    pub variable_cost: f64,
    pub fixed_cost_allocation: f64,
    pub total_cost: f64,
    pub revenue: f64,
    pub profit: f64,
    pub profit_per_km: Option<f64>,
}

/// Break a trip's costs down, prorating the fixed monthly cost by trip days
pub fn extended_cost_breakdown(inputs: &ExtendedCostInputs) -> CostBreakdown {
    let fuel_cost = inputs.litres_used * inputs.fuel_price;
    let variable_cost = inputs.distance_km * inputs.variable_cost_per_km;
    let fixed_cost_allocation = (inputs.fixed_monthly_cost / 30.0) * inputs.days_for_trip;
    let total_cost = fuel_cost + variable_cost + fixed_cost_allocation;
    let revenue = inputs.tonnage_delivered * inputs.distance_km * inputs.rate_per_ton_km;
    let profit = revenue - total_cost;
    let profit_per_km = if inputs.distance_km != 0.0 {
        Some(profit / inputs.distance_km)
    } else {
        None
    };

    CostBreakdown {
        fuel_cost,
        variable_cost,
        fixed_cost_allocation,
        total_cost,
        revenue,
        profit,
        profit_per_km,
    }
}

/// Scalar inputs shared by both policies
///
/// The application layer assembles these from a trip, its aggregates, and
/// the truck's cost profile. `SlipCosted` reads `total_fuel_cost` and
/// ignores the fixed-cost fields; `FixedProrated` reads `litres_used`,
/// `fuel_price`, `fixed_monthly`, and `days_for_trip` and ignores
/// `total_fuel_cost`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripCostInputs {
    pub distance_km: f64,
    pub tonnage_delivered: f64,
    pub rate_per_ton_km: f64,
    pub cost_per_km: f64,
    pub total_fuel_cost: f64,
    pub litres_used: f64,
    pub fuel_price: f64,
    pub fixed_monthly: f64,
    pub days_for_trip: f64,
}

/// Outcome of evaluating a trip under a selected policy
///
/// The two variants are not reconciled into one shape; their figures
/// genuinely differ for the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum TripEvaluation {
    SlipCosted(TripProfitability),
    FixedProrated(CostBreakdown),
}

impl TripEvaluation {
    pub fn revenue(&self) -> f64 {
        match self {
            TripEvaluation::SlipCosted(p) => p.revenue,
            TripEvaluation::FixedProrated(b) => b.revenue,
        }
    }

    pub fn total_cost(&self) -> f64 {
        match self {
            TripEvaluation::SlipCosted(p) => p.total_cost,
            TripEvaluation::FixedProrated(b) => b.total_cost,
        }
    }

    pub fn profit(&self) -> f64 {
        match self {
            TripEvaluation::SlipCosted(p) => p.profit,
            TripEvaluation::FixedProrated(b) => b.profit,
        }
    }
}

/// Evaluate a trip under the selected cost-allocation policy
///
/// `SlipCosted` returns None when distance or delivered tonnage is missing;
/// `FixedProrated` is always computable.
pub fn evaluate_cost_model(model: CostModel, inputs: &TripCostInputs) -> Option<TripEvaluation> {
    match model {
        CostModel::SlipCosted => slip_costed_profitability(
            inputs.distance_km,
            inputs.tonnage_delivered,
            inputs.total_fuel_cost,
            inputs.cost_per_km,
            inputs.rate_per_ton_km,
        )
        .map(TripEvaluation::SlipCosted),
        CostModel::FixedProrated => {
            Some(TripEvaluation::FixedProrated(extended_cost_breakdown(
                &ExtendedCostInputs {
                    distance_km: inputs.distance_km,
                    tonnage_delivered: inputs.tonnage_delivered,
                    litres_used: inputs.litres_used,
                    fuel_price: inputs.fuel_price,
                    variable_cost_per_km: inputs.cost_per_km,
                    fixed_monthly_cost: inputs.fixed_monthly,
                    days_for_trip: inputs.days_for_trip,
                    rate_per_ton_km: inputs.rate_per_ton_km,
                },
            )))
        }
    }
}
