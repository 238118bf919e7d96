//! Core types for trip and slip tracking

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Cost-allocation policy selector
///
/// The two policies deliberately diverge: `SlipCosted` charges fuel as
/// captured on fuel slips and no fixed cost, `FixedProrated` charges metered
/// litres plus a per-day share of the fixed monthly cost. They are never
/// merged into one formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    #[default]
    SlipCosted,
    FixedProrated,
}

impl std::fmt::Display for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModel::SlipCosted => write!(f, "slip-costed"),
            CostModel::FixedProrated => write!(f, "fixed-prorated"),
        }
    }
}
