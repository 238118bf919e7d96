//! CLI definition using clap

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tripledger_types::{CostModel, OutputFormat};

/// Slip kind selector for listings and imports
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SlipKind {
    Loading,
    Offloading,
    Fuel,
}

#[derive(Parser)]
#[command(name = "tripledger")]
#[command(version)]
#[command(about = "Truck trip and slip tracking with per-trip profitability")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new trip
    CreateTrip {
        /// Truck identifier (e.g., TRK-001)
        #[arg(long)]
        truck: String,

        /// Driver identifier (e.g., DRV-001)
        #[arg(long)]
        driver: String,

        /// Route description (e.g., "JHB to DBN")
        #[arg(long)]
        route: String,

        /// Trip date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record the distance driven on a trip
    SetDistance {
        /// Trip identifier
        trip: String,

        /// Distance in kilometers
        km: f64,
    },

    /// Mark a trip completed; it stops accepting slips
    CompleteTrip {
        /// Trip identifier
        trip: String,
    },

    /// Attach a loading slip to an active trip
    AddLoading {
        /// Trip identifier
        #[arg(long)]
        trip: String,

        /// Tonnage collected
        #[arg(long, short = 't')]
        tonnage: f64,

        /// Loading point
        #[arg(long)]
        point: String,

        /// Client name
        #[arg(long)]
        client: String,

        /// Ticket number
        #[arg(long)]
        ticket: String,

        /// Photo of the slip to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Attach an offloading slip to an active trip
    AddOffloading {
        /// Trip identifier
        #[arg(long)]
        trip: String,

        /// Tonnage dropped
        #[arg(long, short = 't')]
        tonnage: f64,

        /// Drop point
        #[arg(long)]
        point: String,

        /// Receiver name
        #[arg(long)]
        receiver: String,

        /// Who signed for the load
        #[arg(long)]
        signed_by: String,

        /// Photo of the slip to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// Attach a fuel slip to an active trip
    AddFuel {
        /// Trip identifier
        #[arg(long)]
        trip: String,

        /// Litres purchased
        #[arg(long, short = 'l')]
        litres: f64,

        /// Price per litre (R). Uses config value if not specified.
        #[arg(long)]
        price: Option<f64>,

        /// Fuel station
        #[arg(long)]
        station: String,

        /// Photo of the receipt to attach
        #[arg(long)]
        photo: Option<PathBuf>,
    },

    /// List trips
    Trips {
        /// Only trips still accepting slips
        #[arg(long)]
        active: bool,
    },

    /// List captured slips
    Slips {
        /// Slip kind to list; all kinds if not specified
        kind: Option<SlipKind>,
    },

    /// Calculate profitability for a stored trip
    Profit {
        /// Trip identifier
        trip: String,

        /// Cost-allocation policy. Uses config value if not specified.
        #[arg(long)]
        model: Option<CostModel>,

        /// Rate per ton-km (R). Uses config value if not specified.
        #[arg(long)]
        rate: Option<f64>,

        /// Trip duration in days for the fixed-prorated model
        #[arg(long)]
        days: Option<f64>,

        /// Fuel price per litre for the fixed-prorated model
        #[arg(long)]
        fuel_price: Option<f64>,
    },

    /// Ad-hoc profitability calculator (no stored trip needed)
    Calc {
        /// Truck whose cost profile to use
        #[arg(long)]
        truck: Option<String>,

        /// Distance in kilometers
        #[arg(long, short = 'd')]
        distance: f64,

        /// Tonnage delivered
        #[arg(long, short = 't')]
        tonnage: f64,

        /// Rate per ton-km (R). Uses config value if not specified.
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Breakeven tonnage for a route
    Breakeven {
        /// Truck whose cost profile to use
        #[arg(long)]
        truck: Option<String>,

        /// Cost per km override
        #[arg(long)]
        cost_per_km: Option<f64>,

        /// Rate per ton-km (R). Uses config value if not specified.
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Fleet summary
    Dashboard,

    /// Import slips from a CSV file
    ImportSlips {
        /// Slip kind contained in the file
        kind: SlipKind,

        /// Path to CSV file
        csv: PathBuf,
    },

    /// Export a trip report to Excel
    Export {
        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Rate per ton-km (R). Uses config value if not specified.
        #[arg(long)]
        rate: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set rate per ton-km
        #[arg(long)]
        set_rate: Option<f64>,

        /// Set default fuel price per litre
        #[arg(long)]
        set_fuel_price: Option<f64>,

        /// Set default trip days for the fixed-prorated model
        #[arg(long)]
        set_days: Option<f64>,

        /// Set default cost model
        #[arg(long)]
        set_model: Option<CostModel>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Set cost profile TOML path
        #[arg(long)]
        set_profiles: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
