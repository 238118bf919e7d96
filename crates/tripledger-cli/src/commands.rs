//! Command handlers

use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{Local, NaiveDate};

use tripledger_app::app::TripService;
use tripledger_app::config::Config;
use tripledger_app::constants::default_cost_profile;
use tripledger_app::export::export_trip_report;
use tripledger_app::repository::{
    open_cost_profile_repo, open_fuel_slip_repo, open_loading_slip_repo,
    open_offloading_slip_repo, open_trip_repo,
};
use tripledger_domain::model::CostProfile;
use tripledger_domain::repository::CostProfileRepository;
use tripledger_domain::service::{breakeven_tonnage, slip_costed_profitability};
use tripledger_infra::persistence::{
    FileFuelSlipRepository, FileLoadingSlipRepository, FileOffloadingSlipRepository,
    FileTripRepository, InMemoryCostProfileRepository,
};
use tripledger_infra::slip_csv;
use tripledger_types::{CostModel, Error, OutputFormat, Result};

use crate::cli::{Cli, Commands, SlipKind};
use crate::output;

type FileService = TripService<
    FileTripRepository,
    FileLoadingSlipRepository,
    FileOffloadingSlipRepository,
    FileFuelSlipRepository,
    InMemoryCostProfileRepository,
>;

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(dir) = &cli.store_dir {
        config.store_dir = Some(dir.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::CreateTrip {
            truck,
            driver,
            route,
            date,
        } => cmd_create_trip(&config, output_format, &truck, &driver, &route, date),
        Commands::SetDistance { trip, km } => cmd_set_distance(&config, &trip, km),
        Commands::CompleteTrip { trip } => cmd_complete_trip(&config, &trip),
        Commands::AddLoading {
            trip,
            tonnage,
            point,
            client,
            ticket,
            photo,
        } => cmd_add_loading(&config, &trip, tonnage, &point, &client, &ticket, photo),
        Commands::AddOffloading {
            trip,
            tonnage,
            point,
            receiver,
            signed_by,
            photo,
        } => cmd_add_offloading(&config, &trip, tonnage, &point, &receiver, &signed_by, photo),
        Commands::AddFuel {
            trip,
            litres,
            price,
            station,
            photo,
        } => cmd_add_fuel(&config, &trip, litres, price, &station, photo),
        Commands::Trips { active } => cmd_trips(&config, output_format, active),
        Commands::Slips { kind } => cmd_slips(&config, output_format, kind),
        Commands::Profit {
            trip,
            model,
            rate,
            days,
            fuel_price,
        } => cmd_profit(&config, output_format, &trip, model, rate, days, fuel_price),
        Commands::Calc {
            truck,
            distance,
            tonnage,
            rate,
        } => cmd_calc(&config, output_format, truck.as_deref(), distance, tonnage, rate),
        Commands::Breakeven {
            truck,
            cost_per_km,
            rate,
        } => cmd_breakeven(&config, output_format, truck.as_deref(), cost_per_km, rate),
        Commands::Dashboard => cmd_dashboard(&config, output_format),
        Commands::ImportSlips { kind, csv } => cmd_import_slips(&config, kind, &csv),
        Commands::Export { output, rate } => cmd_export(&config, output, rate),
        Commands::Config {
            show,
            set_rate,
            set_fuel_price,
            set_days,
            set_model,
            set_output,
            set_store_dir,
            set_profiles,
            reset,
        } => cmd_config(
            show,
            set_rate,
            set_fuel_price,
            set_days,
            set_model,
            set_output,
            set_store_dir,
            set_profiles,
            reset,
        ),
    }
}

fn open_service(config: &Config) -> Result<FileService> {
    Ok(TripService::new(
        open_trip_repo(config)?,
        open_loading_slip_repo(config)?,
        open_offloading_slip_repo(config)?,
        open_fuel_slip_repo(config)?,
        open_cost_profile_repo(config)?,
    ))
}

/// Read a slip photo and encode it for storage
fn read_photo(photo: Option<PathBuf>) -> Result<Option<String>> {
    match photo {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound(path.display().to_string()));
            }
            let bytes = std::fs::read(&path)?;
            Ok(Some(STANDARD.encode(bytes)))
        }
        None => Ok(None),
    }
}

fn resolve_profile(config: &Config, truck_id: Option<&str>) -> Result<CostProfile> {
    let repo = open_cost_profile_repo(config)?;
    let truck_id = truck_id.unwrap_or(tripledger_app::constants::DEFAULT_TRUCK_ID);
    Ok(repo
        .find_by_truck(truck_id)?
        .unwrap_or_else(default_cost_profile))
}

fn cmd_create_trip(
    config: &Config,
    output_format: OutputFormat,
    truck: &str,
    driver: &str,
    route: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    let mut service = open_service(config)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let trip = service.create_trip(truck, driver, route, date)?;

    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&trip)?);
    } else {
        println!("Trip created: {}", trip.id);
    }
    Ok(())
}

fn cmd_set_distance(config: &Config, trip_id: &str, km: f64) -> Result<()> {
    let mut service = open_service(config)?;
    let trip = service.set_distance(trip_id, km)?;
    println!("Distance recorded: {:.1} km on trip {}", trip.distance_km, trip.id);
    Ok(())
}

fn cmd_complete_trip(config: &Config, trip_id: &str) -> Result<()> {
    let mut service = open_service(config)?;
    let trip = service.complete_trip(trip_id)?;
    println!("Trip {} marked {}", trip.id, trip.status);
    Ok(())
}

fn cmd_add_loading(
    config: &Config,
    trip_id: &str,
    tonnage: f64,
    point: &str,
    client: &str,
    ticket: &str,
    photo: Option<PathBuf>,
) -> Result<()> {
    let mut service = open_service(config)?;
    let photo_base64 = read_photo(photo)?;
    let slip = service.add_loading_slip(trip_id, tonnage, point, client, ticket, photo_base64)?;
    println!("Loading slip saved: {} ({:.2} t)", slip.id, slip.tonnage_collected);
    Ok(())
}

fn cmd_add_offloading(
    config: &Config,
    trip_id: &str,
    tonnage: f64,
    point: &str,
    receiver: &str,
    signed_by: &str,
    photo: Option<PathBuf>,
) -> Result<()> {
    let mut service = open_service(config)?;
    let photo_base64 = read_photo(photo)?;
    let slip =
        service.add_offloading_slip(trip_id, tonnage, point, receiver, signed_by, photo_base64)?;
    println!("Offloading slip saved: {} ({:.2} t)", slip.id, slip.tonnage_dropped);
    Ok(())
}

fn cmd_add_fuel(
    config: &Config,
    trip_id: &str,
    litres: f64,
    price: Option<f64>,
    station: &str,
    photo: Option<PathBuf>,
) -> Result<()> {
    let mut service = open_service(config)?;
    let photo_base64 = read_photo(photo)?;
    let price = price.unwrap_or(config.fuel_price_per_litre);
    let slip = service.add_fuel_slip(trip_id, litres, price, station, photo_base64)?;
    println!(
        "Fuel slip saved: {} ({:.1} L, R{:.2})",
        slip.id,
        slip.litres,
        slip.total_cost()
    );
    Ok(())
}

fn cmd_trips(config: &Config, output_format: OutputFormat, active_only: bool) -> Result<()> {
    let service = open_service(config)?;
    let trips = if active_only {
        service.active_trips()?
    } else {
        service.all_trips()?
    };
    output::print_trips(output_format, &trips)
}

fn cmd_slips(config: &Config, output_format: OutputFormat, kind: Option<SlipKind>) -> Result<()> {
    let service = open_service(config)?;

    match kind {
        Some(SlipKind::Loading) => output::print_loading_slips(output_format, &service.loading_slips()?),
        Some(SlipKind::Offloading) => {
            output::print_offloading_slips(output_format, &service.offloading_slips()?)
        }
        Some(SlipKind::Fuel) => output::print_fuel_slips(output_format, &service.fuel_slips()?),
        None => {
            output::print_loading_slips(output_format, &service.loading_slips()?)?;
            output::print_offloading_slips(output_format, &service.offloading_slips()?)?;
            output::print_fuel_slips(output_format, &service.fuel_slips()?)
        }
    }
}

fn cmd_profit(
    config: &Config,
    output_format: OutputFormat,
    trip_id: &str,
    model: Option<CostModel>,
    rate: Option<f64>,
    days: Option<f64>,
    fuel_price: Option<f64>,
) -> Result<()> {
    let service = open_service(config)?;
    let model = model.unwrap_or(config.cost_model);
    let rate = rate.unwrap_or(config.rate_per_ton_km);

    let trip = service
        .trip(trip_id)?
        .ok_or_else(|| Error::TripNotFound(trip_id.to_string()))?;
    let aggregates = service.aggregates_for(trip_id)?;

    match model {
        CostModel::SlipCosted => {
            let result = service.trip_profitability(trip_id, rate)?;
            output::print_profitability(output_format, &trip, &aggregates, result.as_ref())
        }
        CostModel::FixedProrated => {
            let days = days.unwrap_or(config.days_for_trip);
            let fuel_price = fuel_price.unwrap_or(config.fuel_price_per_litre);
            match service.evaluate_trip(trip_id, model, rate, fuel_price, days)? {
                Some(evaluation) => output::print_evaluation(output_format, &evaluation),
                None => {
                    println!("Not yet computable: record distance and at least one offloading slip.");
                    Ok(())
                }
            }
        }
    }
}

fn cmd_calc(
    config: &Config,
    output_format: OutputFormat,
    truck: Option<&str>,
    distance: f64,
    tonnage: f64,
    rate: Option<f64>,
) -> Result<()> {
    let rate = rate.unwrap_or(config.rate_per_ton_km);
    let profile = resolve_profile(config, truck)?;

    // Calculator path has no fuel slips; fuel cost is zero
    let result = slip_costed_profitability(distance, tonnage, 0.0, profile.cost_per_km, rate);
    let breakeven = breakeven_tonnage(profile.cost_per_km, rate);
    let expected_litres = profile.expected_litres(distance);

    if output_format == OutputFormat::Json {
        let payload = serde_json::json!({
            "truck_id": profile.truck_id,
            "cost_per_km": profile.cost_per_km,
            "rate_per_ton_km": rate,
            "result": result,
            "breakeven_tonnage": breakeven,
            "expected_litres": expected_litres,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\nProfitability Analysis");
    println!("======================");
    println!("Truck:           {} (R{:.2}/km)", profile.truck_id, profile.cost_per_km);
    println!("Distance:        {:.1} km", distance);
    println!("Tonnage:         {:.2} t", tonnage);
    println!("Rate:            R{:.2} per ton-km", rate);
    println!("Expected fuel:   {:.1} L", expected_litres);

    match result {
        Some(p) => {
            println!("\nRevenue:         R{:.2}", p.revenue);
            println!("Total cost:      R{:.2}", p.total_cost);
            println!("Profit:          R{:.2}", p.profit);
            println!("Margin:          {:.1}%", p.margin_percent);
            if p.profit > 0.0 {
                println!("\nThis trip is profitable with a {:.1}% margin", p.margin_percent);
            } else {
                println!("\nThis trip will lose R{:.2}", p.profit.abs());
            }
        }
        None => {
            println!("\nNot computable: distance and tonnage must both be positive.");
        }
    }

    match breakeven {
        Some(tons) => println!("Breakeven tonnage for this route: {:.1} tons per km", tons),
        None => println!("Breakeven undefined: rate must be positive."),
    }

    Ok(())
}

fn cmd_breakeven(
    config: &Config,
    output_format: OutputFormat,
    truck: Option<&str>,
    cost_per_km: Option<f64>,
    rate: Option<f64>,
) -> Result<()> {
    let rate = rate.unwrap_or(config.rate_per_ton_km);
    let cost_per_km = match cost_per_km {
        Some(value) => value,
        None => resolve_profile(config, truck)?.cost_per_km,
    };

    let breakeven = breakeven_tonnage(cost_per_km, rate);

    if output_format == OutputFormat::Json {
        let payload = serde_json::json!({
            "cost_per_km": cost_per_km,
            "rate_per_ton_km": rate,
            "breakeven_tonnage": breakeven,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match breakeven {
        Some(tons) => println!("Breakeven tonnage: {:.1} tons per km", tons),
        None => println!("Breakeven undefined: rate must be positive."),
    }
    Ok(())
}

fn cmd_dashboard(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = open_service(config)?;
    let summary = service.dashboard(config.rate_per_ton_km)?;
    output::print_dashboard(output_format, &summary)
}

fn cmd_import_slips(config: &Config, kind: SlipKind, csv_path: &PathBuf) -> Result<()> {
    let mut service = open_service(config)?;

    let count = match kind {
        SlipKind::Loading => {
            let slips = slip_csv::load_loading_slips(csv_path)
                .map_err(|e| Error::CsvImport(e.to_string()))?;
            service.import_loading_slips(slips)?
        }
        SlipKind::Offloading => {
            let slips = slip_csv::load_offloading_slips(csv_path)
                .map_err(|e| Error::CsvImport(e.to_string()))?;
            service.import_offloading_slips(slips)?
        }
        SlipKind::Fuel => {
            let slips = slip_csv::load_fuel_slips(csv_path)
                .map_err(|e| Error::CsvImport(e.to_string()))?;
            service.import_fuel_slips(slips)?
        }
    };

    println!("Imported {} slips from {}", count, csv_path.display());
    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>, rate: Option<f64>) -> Result<()> {
    let service = open_service(config)?;
    let rate = rate.unwrap_or(config.rate_per_ton_km);
    let rows = service.report_rows(rate)?;
    let output = output.unwrap_or_else(|| PathBuf::from("trip_report.xlsx"));

    export_trip_report(&rows, &output)?;
    println!("Report written to {} ({} trips)", output.display(), rows.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    show: bool,
    set_rate: Option<f64>,
    set_fuel_price: Option<f64>,
    set_days: Option<f64>,
    set_model: Option<CostModel>,
    set_output: Option<OutputFormat>,
    set_store_dir: Option<PathBuf>,
    set_profiles: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    let mut changed = false;

    if reset {
        config = Config::default();
        changed = true;
    }
    if let Some(rate) = set_rate {
        config.rate_per_ton_km = rate;
        changed = true;
    }
    if let Some(price) = set_fuel_price {
        config.fuel_price_per_litre = price;
        changed = true;
    }
    if let Some(days) = set_days {
        config.days_for_trip = days;
        changed = true;
    }
    if let Some(model) = set_model {
        config.cost_model = model;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        changed = true;
    }
    if let Some(path) = set_profiles {
        config.cost_profiles_path = Some(path);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
