//! End-to-end flow through the file-backed repositories

use chrono::NaiveDate;
use tempfile::tempdir;

use tripledger_app::app::TripService;
use tripledger_app::constants::builtin_cost_profiles;
use tripledger_infra::persistence::{
    FileFuelSlipRepository, FileLoadingSlipRepository, FileOffloadingSlipRepository,
    FileTripRepository, InMemoryCostProfileRepository,
};

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
fn test_capture_and_calculate_across_reopen() {
    let dir = tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();

    let trip_id = {
        let mut svc = open_service(dir.path());
        let trip = svc.create_trip("TRK-001", "DRV-014", "JHB to DBN", date).unwrap();
        svc.set_distance(&trip.id, 450.0).unwrap();
        svc.add_loading_slip(&trip.id, 27.5, "Quarry A", "Acme Mills", "T-2204", None)
            .unwrap();
        svc.add_offloading_slip(&trip.id, 27.5, "Durban Depot", "Acme Mills", "J. Dlamini", None)
            .unwrap();
        svc.add_fuel_slip(&trip.id, 185.0, 24.50, "Engen N3 Harrismith", None)
            .unwrap();
        trip.id
    };

    // Everything must survive a fresh open of the store directory
    let svc = open_service(dir.path());
    let trip = svc.trip(&trip_id).unwrap().unwrap();
    assert_eq!(trip.distance_km, 450.0);

    let aggregates = svc.aggregates_for(&trip_id).unwrap();
    assert!((aggregates.total_tonnage_loaded - 27.5).abs() < 1e-9);
    assert!((aggregates.total_tonnage_delivered - 27.5).abs() < 1e-9);
    assert!((aggregates.total_fuel_cost - 4532.50).abs() < 1e-9);

    let result = svc.trip_profitability(&trip_id, 2.50).unwrap().unwrap();
    assert!((result.revenue - 30937.50).abs() < 1e-9);
    assert!((result.total_cost - (3123.00 + 4532.50)).abs() < 1e-9);
    assert_eq!(result.profit, result.revenue - result.total_cost);

    let summary = svc.dashboard(2.50).unwrap();
    assert_eq!(summary.active_trips, 1);
    assert_eq!(summary.fuel_slips, 1);
}

#[test]
fn test_completed_trip_rejects_new_slips_after_reopen() {
    let dir = tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();

    let trip_id = {
        let mut svc = open_service(dir.path());
        let trip = svc.create_trip("TRK-002", "DRV-002", "CPT to PE", date).unwrap();
        svc.complete_trip(&trip.id).unwrap();
        trip.id
    };

    let mut svc = open_service(dir.path());
    assert!(svc
        .add_fuel_slip(&trip_id, 60.0, 23.80, "Sasol Midway", None)
        .is_err());
    assert!(svc.active_trips().unwrap().is_empty());
}
