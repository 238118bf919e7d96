//! CSV importer for slip records
//!
//! Lets a site capture slips in a spreadsheet and pull them into the ledger
//! in one go. One file per slip kind, UTF-8, headers required.
//!
//! Expected headers:
//! - loading:    trip_id,tonnage_collected,loading_point,client,ticket_number
//! - offloading: trip_id,tonnage_dropped,drop_point,receiver,signed_by
//! - fuel:       trip_id,litres,price_per_litre,station

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use tripledger_domain::model::{FuelSlip, LoadingSlip, OffloadingSlip};

#[derive(Error, Debug)]
pub enum SlipCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value in row {row}, column {column}: {value}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

#[derive(Debug, Deserialize)]
struct LoadingRow {
    trip_id: String,
    tonnage_collected: f64,
    loading_point: String,
    client: String,
    ticket_number: String,
}

#[derive(Debug, Deserialize)]
struct OffloadingRow {
    trip_id: String,
    tonnage_dropped: f64,
    drop_point: String,
    receiver: String,
    signed_by: String,
}

#[derive(Debug, Deserialize)]
struct FuelRow {
    trip_id: String,
    litres: f64,
    price_per_litre: f64,
    station: String,
}

fn reader_for(path: &Path) -> Result<csv::Reader<File>, SlipCsvError> {
    let file = File::open(path)?;
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file))
}

/// Load loading slips from a CSV file
pub fn load_loading_slips(path: &Path) -> Result<Vec<LoadingSlip>, SlipCsvError> {
    let mut reader = reader_for(path)?;
    let mut slips = Vec::new();

    for (idx, result) in reader.deserialize::<LoadingRow>().enumerate() {
        let row_num = idx + 2; // header is row 1
        let row = result?;
        if row.tonnage_collected <= 0.0 {
            return Err(SlipCsvError::InvalidValue {
                row: row_num,
                column: "tonnage_collected",
                value: row.tonnage_collected.to_string(),
            });
        }
        slips.push(LoadingSlip::new(
            &row.trip_id,
            row.tonnage_collected,
            &row.loading_point,
            &row.client,
            &row.ticket_number,
            None,
        ));
    }

    Ok(slips)
}

/// Load offloading slips from a CSV file
pub fn load_offloading_slips(path: &Path) -> Result<Vec<OffloadingSlip>, SlipCsvError> {
    let mut reader = reader_for(path)?;
    let mut slips = Vec::new();

    for (idx, result) in reader.deserialize::<OffloadingRow>().enumerate() {
        let row_num = idx + 2;
        let row = result?;
        if row.tonnage_dropped <= 0.0 {
            return Err(SlipCsvError::InvalidValue {
                row: row_num,
                column: "tonnage_dropped",
                value: row.tonnage_dropped.to_string(),
            });
        }
        slips.push(OffloadingSlip::new(
            &row.trip_id,
            row.tonnage_dropped,
            &row.drop_point,
            &row.receiver,
            &row.signed_by,
            None,
        ));
    }

    Ok(slips)
}

/// Load fuel slips from a CSV file
pub fn load_fuel_slips(path: &Path) -> Result<Vec<FuelSlip>, SlipCsvError> {
    let mut reader = reader_for(path)?;
    let mut slips = Vec::new();

    for (idx, result) in reader.deserialize::<FuelRow>().enumerate() {
        let row_num = idx + 2;
        let row = result?;
        if row.litres <= 0.0 {
            return Err(SlipCsvError::InvalidValue {
                row: row_num,
                column: "litres",
                value: row.litres.to_string(),
            });
        }
        if row.price_per_litre < 0.0 {
            return Err(SlipCsvError::InvalidValue {
                row: row_num,
                column: "price_per_litre",
                value: row.price_per_litre.to_string(),
            });
        }
        slips.push(FuelSlip::new(
            &row.trip_id,
            row.litres,
            row.price_per_litre,
            &row.station,
            None,
        ));
    }

    Ok(slips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_loading_slips() {
        let file = csv_file(
            "trip_id,tonnage_collected,loading_point,client,ticket_number\n\
             trip-1,27.5,Quarry A,Client A,T-100\n\
             trip-1,14.0,Quarry B,Client A,T-101\n",
        );

        let slips = load_loading_slips(file.path()).unwrap();
        assert_eq!(slips.len(), 2);
        assert_eq!(slips[0].trip_id, "trip-1");
        assert_eq!(slips[1].tonnage_collected, 14.0);
    }

    #[test]
    fn test_zero_tonnage_is_rejected_with_row_number() {
        let file = csv_file(
            "trip_id,tonnage_collected,loading_point,client,ticket_number\n\
             trip-1,27.5,Quarry A,Client A,T-100\n\
             trip-1,0,Quarry B,Client A,T-101\n",
        );

        let err = load_loading_slips(file.path()).unwrap_err();
        match err {
            SlipCsvError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 3);
                assert_eq!(column, "tonnage_collected");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_fuel_slips_computes_total() {
        let file = csv_file(
            "trip_id,litres,price_per_litre,station\n\
             trip-1,185,24.50,Engen N3\n",
        );

        let slips = load_fuel_slips(file.path()).unwrap();
        assert_eq!(slips.len(), 1);
        assert_eq!(slips[0].total_cost(), 4532.50);
    }

    #[test]
    fn test_load_offloading_slips() {
        let file = csv_file(
            "trip_id,tonnage_dropped,drop_point,receiver,signed_by\n\
             trip-1,27.0,Durban Depot,Acme Mills,J. Dlamini\n",
        );

        let slips = load_offloading_slips(file.path()).unwrap();
        assert_eq!(slips.len(), 1);
        assert_eq!(slips[0].receiver, "Acme Mills");
    }

    #[test]
    fn test_missing_column_is_csv_error() {
        let file = csv_file("trip_id,litres\ntrip-1,185\n");
        assert!(matches!(
            load_fuel_slips(file.path()),
            Err(SlipCsvError::CsvError(_))
        ));
    }
}
