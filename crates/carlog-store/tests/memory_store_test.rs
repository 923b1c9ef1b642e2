//! Integration tests for the in-memory store.

use carlog_core::error::CarlogError;
use carlog_core::models::car::CreateCar;
use carlog_core::models::evidence::CreateEvidenceItem;
use carlog_core::models::maintenance::{CreateMaintenanceRecord, MaintenanceCategory};
use carlog_core::repository::{
    CarRepository, MaintenanceRecordRepository, OwnershipVerifier, SnapshotRepository,
};
use carlog_store::MemoryStore;

async fn setup_car(store: &MemoryStore, owner_id: &str) -> String {
    store
        .create(CreateCar {
            owner_id: owner_id.into(),
            display_name: "Daily driver".into(),
            make: "Toyota".into(),
            model: "Corolla".into(),
            year: 2019,
        })
        .await
        .unwrap()
        .id
}

async fn add_record(store: &MemoryStore, car_id: &str, performed_at_millis: i64) -> String {
    store
        .add(CreateMaintenanceRecord {
            car_id: car_id.into(),
            performed_at_millis,
            odometer_km: 42_000,
            category: MaintenanceCategory::OilChange,
            title: "Oil and filter".into(),
            notes: None,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn create_and_get_car() {
    let store = MemoryStore::new();
    let car_id = setup_car(&store, "alice").await;

    let car = store.get_by_id(&car_id).await.unwrap();
    assert_eq!(car.owner_id, "alice");
    assert_eq!(car.make, "Toyota");
}

#[tokio::test]
async fn get_missing_car_is_not_found() {
    let store = MemoryStore::new();
    let err = store.get_by_id("no-such-car").await.unwrap_err();
    assert!(matches!(err, CarlogError::NotFound { .. }));
}

#[tokio::test]
async fn list_by_owner_only_returns_own_cars() {
    let store = MemoryStore::new();
    setup_car(&store, "alice").await;
    setup_car(&store, "alice").await;
    setup_car(&store, "bob").await;

    let cars = store.list_by_owner("alice").await.unwrap();
    assert_eq!(cars.len(), 2);
    assert!(cars.iter().all(|c| c.owner_id == "alice"));
}

#[tokio::test]
async fn record_requires_existing_car() {
    let store = MemoryStore::new();
    let err = store
        .add(CreateMaintenanceRecord {
            car_id: "no-such-car".into(),
            performed_at_millis: 1_700_000_000_000,
            odometer_km: 1,
            category: MaintenanceCategory::Repair,
            title: "Ghost repair".into(),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CarlogError::NotFound { .. }));
}

#[tokio::test]
async fn records_list_newest_first() {
    let store = MemoryStore::new();
    let car_id = setup_car(&store, "alice").await;
    add_record(&store, &car_id, 1_000).await;
    add_record(&store, &car_id, 3_000).await;
    add_record(&store, &car_id, 2_000).await;

    let records = store.list_for_car(&car_id).await.unwrap();
    let times: Vec<i64> = records.iter().map(|r| r.performed_at_millis).collect();
    assert_eq!(times, vec![3_000, 2_000, 1_000]);
}

#[tokio::test]
async fn evidence_requires_existing_record() {
    let store = MemoryStore::new();
    let err = store
        .add_evidence(CreateEvidenceItem {
            record_id: "no-such-record".into(),
            file_name: "receipt.jpg".into(),
            content_type: "image/jpeg".into(),
            size_bytes: 1024,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CarlogError::NotFound { .. }));
}

#[tokio::test]
async fn snapshot_joins_records_and_evidence() {
    let store = MemoryStore::new();
    let car_id = setup_car(&store, "alice").await;
    let record_id = add_record(&store, &car_id, 1_700_000_000_000).await;
    store
        .add_evidence(CreateEvidenceItem {
            record_id: record_id.clone(),
            file_name: "receipt.jpg".into(),
            content_type: "image/jpeg".into(),
            size_bytes: 2048,
        })
        .await
        .unwrap();

    let snapshot = store.public_snapshot(&car_id).await.unwrap();
    assert_eq!(snapshot.car_id, car_id);
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(snapshot.evidence.len(), 1);
    assert_eq!(snapshot.evidence[0].record_id, record_id);
}

#[tokio::test]
async fn snapshot_excludes_other_cars() {
    let store = MemoryStore::new();
    let car_a = setup_car(&store, "alice").await;
    let car_b = setup_car(&store, "bob").await;
    add_record(&store, &car_a, 1_000).await;
    add_record(&store, &car_b, 2_000).await;

    let snapshot = store.public_snapshot(&car_a).await.unwrap();
    assert_eq!(snapshot.records.len(), 1);
    assert!(snapshot.records.iter().all(|r| r.car_id == car_a));
}

#[tokio::test]
async fn ownership_check() {
    let store = MemoryStore::new();
    let car_id = setup_car(&store, "alice").await;

    store.verify_owner("alice", &car_id).await.unwrap();

    let err = store.verify_owner("mallory", &car_id).await.unwrap_err();
    assert!(matches!(err, CarlogError::AuthorizationDenied { .. }));

    // Missing car is indistinguishable from a foreign one.
    let err = store.verify_owner("alice", "no-such-car").await.unwrap_err();
    assert!(matches!(err, CarlogError::AuthorizationDenied { .. }));
}
