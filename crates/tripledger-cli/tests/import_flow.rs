//! CSV import flow, as driven by the import-slips command

use std::io::Write;

use chrono::NaiveDate;
use tempfile::{tempdir, NamedTempFile};

use tripledger_app::app::TripService;
use tripledger_app::constants::builtin_cost_profiles;
use tripledger_infra::persistence::{
    FileFuelSlipRepository, FileLoadingSlipRepository, FileOffloadingSlipRepository,
    FileTripRepository, InMemoryCostProfileRepository,
};
use tripledger_infra::slip_csv;

type FileService = TripService<
    FileTripRepository,
    FileLoadingSlipRepository,
    FileOffloadingSlipRepository,
    FileFuelSlipRepository,
    InMemoryCostProfileRepository,
>;

fn open_service(store_dir: &std::path::Path) -> FileService {
    TripService::new(
        FileTripRepository::open(store_dir).unwrap(),
        FileLoadingSlipRepository::open(store_dir).unwrap(),
        FileOffloadingSlipRepository::open(store_dir).unwrap(),
        FileFuelSlipRepository::open(store_dir).unwrap(),
        InMemoryCostProfileRepository::from_profiles(builtin_cost_profiles()),
    )
}

#[test]
fn test_import_csv_slips_then_calculate() {
    let dir = tempdir().unwrap();
    let mut service = open_service(dir.path());

    let trip = service
        .create_trip(
            "TRK-003",
            "DRV-021",
            "Richards Bay to JHB",
            NaiveDate::from_ymd_opt(2025, 8, 6).unwrap(),
        )
        .unwrap();
    service.set_distance(&trip.id, 600.0).unwrap();

    let mut offloading_csv = NamedTempFile::new().unwrap();
    write!(
        offloading_csv,
        "trip_id,tonnage_dropped,drop_point,receiver,signed_by\n\
         {id},15.0,City Deep,Acme Mills,J. Dlamini\n\
         {id},12.5,City Deep,Acme Mills,P. Nkosi\n",
        id = trip.id
    )
    .unwrap();

    let mut fuel_csv = NamedTempFile::new().unwrap();
    write!(
        fuel_csv,
        "trip_id,litres,price_per_litre,station\n\
         {id},185,24.50,Engen N3\n",
        id = trip.id
    )
    .unwrap();

    let offloading = slip_csv::load_offloading_slips(offloading_csv.path()).unwrap();
    assert_eq!(service.import_offloading_slips(offloading).unwrap(), 2);

    let fuel = slip_csv::load_fuel_slips(fuel_csv.path()).unwrap();
    assert_eq!(service.import_fuel_slips(fuel).unwrap(), 1);

    let result = service.trip_profitability(&trip.id, 2.50).unwrap().unwrap();
    // 600 km * 27.5 t * R2.50 = R41,250; cost 600 * 6.78 + 4,532.50
    assert!((result.revenue - 41250.0).abs() < 1e-9);
    assert!((result.total_cost - (600.0 * 6.78 + 4532.50)).abs() < 1e-9);
    assert_eq!(result.profit, result.revenue - result.total_cost);
}

#[test]
fn test_import_referencing_unknown_trip_fails() {
    let dir = tempdir().unwrap();
    let mut service = open_service(dir.path());

    let mut csv = NamedTempFile::new().unwrap();
    write!(
        csv,
        "trip_id,litres,price_per_litre,station\n\
         no-such-trip,60,23.80,Sasol Midway\n"
    )
    .unwrap();

    let slips = slip_csv::load_fuel_slips(csv.path()).unwrap();
    assert!(service.import_fuel_slips(slips).is_err());
    assert!(service.fuel_slips().unwrap().is_empty());
}
