//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. The share subsystem only ever
//! consumes these as injected capabilities, so it can be tested with
//! in-memory fakes and stays portable across storage backends.

use crate::error::CarlogResult;
use crate::models::{
    car::{Car, CreateCar},
    evidence::{CreateEvidenceItem, EvidenceItem},
    maintenance::{CreateMaintenanceRecord, MaintenanceRecord},
    snapshot::PublicCarSnapshot,
};

pub trait CarRepository: Send + Sync {
    fn create(&self, input: CreateCar) -> impl Future<Output = CarlogResult<Car>> + Send;
    fn get_by_id(&self, id: &str) -> impl Future<Output = CarlogResult<Car>> + Send;
    fn list_by_owner(&self, owner_id: &str) -> impl Future<Output = CarlogResult<Vec<Car>>> + Send;
}

pub trait MaintenanceRecordRepository: Send + Sync {
    fn add(
        &self,
        input: CreateMaintenanceRecord,
    ) -> impl Future<Output = CarlogResult<MaintenanceRecord>> + Send;
    fn list_for_car(
        &self,
        car_id: &str,
    ) -> impl Future<Output = CarlogResult<Vec<MaintenanceRecord>>> + Send;
    fn add_evidence(
        &self,
        input: CreateEvidenceItem,
    ) -> impl Future<Output = CarlogResult<EvidenceItem>> + Send;
    fn list_evidence_for_record(
        &self,
        record_id: &str,
    ) -> impl Future<Output = CarlogResult<Vec<EvidenceItem>>> + Send;
}

/// Read side consumed by the share access gate.
///
/// The gate passes exactly one car id — the one extracted from a
/// verified token — and receives the public projection for it.
pub trait SnapshotRepository: Send + Sync {
    fn public_snapshot(
        &self,
        car_id: &str,
    ) -> impl Future<Output = CarlogResult<PublicCarSnapshot>> + Send;
}

/// Ownership check consumed by the share issuance flow.
///
/// Succeeds only when `owner_id` is the recorded owner of `car_id`.
pub trait OwnershipVerifier: Send + Sync {
    fn verify_owner(
        &self,
        owner_id: &str,
        car_id: &str,
    ) -> impl Future<Output = CarlogResult<()>> + Send;
}
