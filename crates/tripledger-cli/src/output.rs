//! Output formatting module

use tripledger_app::app::DashboardSummary;
use tripledger_domain::model::{FuelSlip, LoadingSlip, OffloadingSlip, Trip};
use tripledger_domain::service::{TripAggregates, TripEvaluation, TripProfitability};
use tripledger_types::{OutputFormat, Result};

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

pub fn print_trips(output_format: OutputFormat, trips: &[Trip]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(trips)?);
        return Ok(());
    }

    if trips.is_empty() {
        println!("No trips recorded yet.");
        return Ok(());
    }

    println!(
        "{:<10} {:<9} {:<9} {:<22} {:<11} {:<10} {:>9}",
        "Trip", "Truck", "Driver", "Route", "Date", "Status", "km"
    );
    println!("{}", "-".repeat(84));
    for trip in trips {
        println!(
            "{:<10} {:<9} {:<9} {:<22} {:<11} {:<10} {:>9.1}",
            truncate(&trip.id, 8),
            truncate(&trip.truck_id, 8),
            truncate(&trip.driver_id, 8),
            truncate(&trip.route, 21),
            trip.date,
            trip.status,
            trip.distance_km
        );
    }

    Ok(())
}

pub fn print_loading_slips(output_format: OutputFormat, slips: &[LoadingSlip]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(slips)?);
        return Ok(());
    }

    println!("Loading slips: {}", slips.len());
    for slip in slips {
        println!(
            "  {:<10} trip {:<10} {:>7.2} t  {} / {} (ticket {}){}",
            truncate(&slip.id, 8),
            truncate(&slip.trip_id, 8),
            slip.tonnage_collected,
            slip.loading_point,
            slip.client,
            slip.ticket_number,
            if slip.photo_base64.is_some() { "  [photo]" } else { "" }
        );
    }

    Ok(())
}

pub fn print_offloading_slips(output_format: OutputFormat, slips: &[OffloadingSlip]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(slips)?);
        return Ok(());
    }

    println!("Offloading slips: {}", slips.len());
    for slip in slips {
        println!(
            "  {:<10} trip {:<10} {:>7.2} t  {} / {} (signed {}){}",
            truncate(&slip.id, 8),
            truncate(&slip.trip_id, 8),
            slip.tonnage_dropped,
            slip.drop_point,
            slip.receiver,
            slip.signed_by,
            if slip.photo_base64.is_some() { "  [photo]" } else { "" }
        );
    }

    Ok(())
}

pub fn print_fuel_slips(output_format: OutputFormat, slips: &[FuelSlip]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(slips)?);
        return Ok(());
    }

    println!("Fuel slips: {}", slips.len());
    for slip in slips {
        println!(
            "  {:<10} trip {:<10} {:>7.1} L @ R{:<6.2} = R{:<10.2} {}{}",
            truncate(&slip.id, 8),
            truncate(&slip.trip_id, 8),
            slip.litres,
            slip.price_per_litre,
            slip.total_cost(),
            slip.station,
            if slip.photo_base64.is_some() { "  [photo]" } else { "" }
        );
    }

    Ok(())
}

pub fn print_profitability(
    output_format: OutputFormat,
    trip: &Trip,
    aggregates: &TripAggregates,
    result: Option<&TripProfitability>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("\nTrip Profitability");
    println!("==================");
    println!("Trip:            {}", trip.id);
    println!("Truck:           {}", trip.truck_id);
    println!("Route:           {}", trip.route);
    println!("Distance:        {:.1} km", trip.distance_km);
    println!("Loaded:          {:.2} t", aggregates.total_tonnage_loaded);
    println!("Delivered:       {:.2} t", aggregates.total_tonnage_delivered);

    match result {
        Some(p) => {
            println!("\nRevenue:         R{:.2}", p.revenue);
            println!("Total cost:      R{:.2}", p.total_cost);
            println!("Fuel cost:       R{:.2}", p.fuel_cost);
            println!("Profit:          R{:.2}", p.profit);
            println!("Margin:          {:.1}%", p.margin_percent);
        }
        None => {
            println!("\nNot yet computable: record distance and at least one offloading slip.");
        }
    }

    Ok(())
}

pub fn print_evaluation(output_format: OutputFormat, evaluation: &TripEvaluation) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(evaluation)?);
        return Ok(());
    }

    match evaluation {
        TripEvaluation::SlipCosted(p) => {
            println!("\nEvaluation (slip-costed)");
            println!("========================");
            println!("Revenue:         R{:.2}", p.revenue);
            println!("Total cost:      R{:.2}", p.total_cost);
            println!("Fuel cost:       R{:.2}", p.fuel_cost);
            println!("Profit:          R{:.2}", p.profit);
            println!("Margin:          {:.1}%", p.margin_percent);
        }
        TripEvaluation::FixedProrated(b) => {
            println!("\nEvaluation (fixed-prorated)");
            println!("===========================");
            println!("Fuel cost:       R{:.2}", b.fuel_cost);
            println!("Variable cost:   R{:.2}", b.variable_cost);
            println!("Fixed share:     R{:.2}", b.fixed_cost_allocation);
            println!("Total cost:      R{:.2}", b.total_cost);
            println!("Revenue:         R{:.2}", b.revenue);
            println!("Profit:          R{:.2}", b.profit);
            match b.profit_per_km {
                Some(per_km) => println!("Profit per km:   R{:.2}", per_km),
                None => println!("Profit per km:   (undefined, no distance)"),
            }
        }
    }

    Ok(())
}

pub fn print_dashboard(output_format: OutputFormat, summary: &DashboardSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!("\nFleet Dashboard");
    println!("===============");
    println!("Active trips:     {}", summary.active_trips);
    println!("Completed trips:  {}", summary.completed_trips);
    println!(
        "Slips captured:   {} loading / {} offloading / {} fuel",
        summary.loading_slips, summary.offloading_slips, summary.fuel_slips
    );
    println!("Total profit:     R{:.2}", summary.total_profit);

    Ok(())
}
