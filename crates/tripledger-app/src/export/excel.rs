//! Excel export functionality

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tripledger_domain::model::Trip;
use tripledger_domain::service::TripProfitability;
use tripledger_types::{Error, Result};

/// Export trips and their profitability to an Excel file
pub fn export_trip_report(
    rows: &[(Trip, Option<TripProfitability>)],
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, rows)?;

    let trips_sheet = workbook.add_worksheet();
    write_trips_sheet(trips_sheet, rows)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, rows: &[(Trip, Option<TripProfitability>)]) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Trip Profitability Report", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let active = rows.iter().filter(|(t, _)| t.is_active()).count();
    let calculated = rows.iter().filter(|(_, p)| p.is_some()).count();
    let total_profit: f64 = rows
        .iter()
        .filter_map(|(_, p)| p.as_ref().map(|p| p.profit))
        .sum();
    let total_revenue: f64 = rows
        .iter()
        .filter_map(|(_, p)| p.as_ref().map(|p| p.revenue))
        .sum();

    sheet
        .write_string(2, 0, "Total Trips:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(2, 1, rows.len() as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(3, 0, "Active:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(3, 1, active as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(4, 0, "Calculated:")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(4, 1, calculated as f64)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(5, 0, "Total Revenue (R):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(5, 1, total_revenue)
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .write_string(6, 0, "Total Profit (R):")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_number(6, 1, total_profit)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_trips_sheet(sheet: &mut Worksheet, rows: &[(Trip, Option<TripProfitability>)]) -> Result<()> {
    sheet
        .set_name("Trips")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [
        "Trip ID",
        "Truck",
        "Driver",
        "Route",
        "Date",
        "Status",
        "Distance (km)",
        "Tonnage (t)",
        "Revenue (R)",
        "Total Cost (R)",
        "Profit (R)",
        "Margin (%)",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (idx, (trip, profitability)) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet
            .write_string(row, 0, &trip.id)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &trip.truck_id)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &trip.driver_id)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 3, &trip.route)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 4, &trip.date.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 5, &trip.status.to_string())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, trip.distance_km)
            .map_err(|e| Error::Excel(e.to_string()))?;

        if let Some(p) = profitability {
            sheet
                .write_number(row, 7, p.tonnage_delivered)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 8, p.revenue)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 9, p.total_cost)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 10, p.profit)
                .map_err(|e| Error::Excel(e.to_string()))?;
            sheet
                .write_number(row, 11, p.margin_percent)
                .map_err(|e| Error::Excel(e.to_string()))?;
        } else {
            sheet
                .write_string(row, 8, "not yet computable")
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        let mut trip = Trip::new(
            "TRK-001",
            "DRV-001",
            "JHB to DBN",
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        );
        trip.distance_km = 450.0;
        let profitability = TripProfitability {
            revenue: 30937.50,
            total_cost: 3123.00,
            profit: 27814.50,
            tonnage_delivered: 27.5,
            fuel_cost: 0.0,
            margin_percent: 89.90537,
        };

        let rows = vec![
            (trip, Some(profitability)),
            (
                Trip::new(
                    "TRK-002",
                    "DRV-002",
                    "CPT to PE",
                    NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
                ),
                None,
            ),
        ];

        export_trip_report(&rows, &path).unwrap();
        assert!(path.exists());
    }
}
