//! In-memory repository implementations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use carlog_core::error::{CarlogError, CarlogResult};
use carlog_core::models::car::{Car, CreateCar};
use carlog_core::models::evidence::{CreateEvidenceItem, EvidenceItem};
use carlog_core::models::maintenance::{CreateMaintenanceRecord, MaintenanceRecord};
use carlog_core::models::snapshot::PublicCarSnapshot;
use carlog_core::repository::{
    CarRepository, MaintenanceRecordRepository, OwnershipVerifier, SnapshotRepository,
};

#[derive(Debug, Default)]
struct Inner {
    cars: HashMap<String, Car>,
    records: HashMap<String, MaintenanceRecord>,
    evidence: HashMap<String, EvidenceItem>,
}

/// In-memory document store.
///
/// Cheap to clone — clones share the same underlying maps, the same
/// way database handles share a connection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CarRepository for MemoryStore {
    async fn create(&self, input: CreateCar) -> CarlogResult<Car> {
        let car = Car {
            id: Uuid::new_v4().to_string(),
            owner_id: input.owner_id,
            display_name: input.display_name,
            make: input.make,
            model: input.model,
            year: input.year,
            created_at: Utc::now(),
        };
        let mut inner = self.inner.write().await;
        inner.cars.insert(car.id.clone(), car.clone());
        Ok(car)
    }

    async fn get_by_id(&self, id: &str) -> CarlogResult<Car> {
        let inner = self.inner.read().await;
        inner.cars.get(id).cloned().ok_or_else(|| CarlogError::NotFound {
            entity: "car".into(),
            id: id.to_string(),
        })
    }

    async fn list_by_owner(&self, owner_id: &str) -> CarlogResult<Vec<Car>> {
        let inner = self.inner.read().await;
        let mut cars: Vec<Car> = inner
            .cars
            .values()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect();
        cars.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(cars)
    }
}

impl MaintenanceRecordRepository for MemoryStore {
    async fn add(&self, input: CreateMaintenanceRecord) -> CarlogResult<MaintenanceRecord> {
        let mut inner = self.inner.write().await;
        if !inner.cars.contains_key(&input.car_id) {
            return Err(CarlogError::NotFound {
                entity: "car".into(),
                id: input.car_id,
            });
        }
        let record = MaintenanceRecord {
            id: Uuid::new_v4().to_string(),
            car_id: input.car_id,
            performed_at_millis: input.performed_at_millis,
            odometer_km: input.odometer_km,
            category: input.category,
            title: input.title,
            notes: input.notes,
        };
        inner.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn list_for_car(&self, car_id: &str) -> CarlogResult<Vec<MaintenanceRecord>> {
        let inner = self.inner.read().await;
        let mut records: Vec<MaintenanceRecord> = inner
            .records
            .values()
            .filter(|r| r.car_id == car_id)
            .cloned()
            .collect();
        // Newest first.
        records.sort_by(|a, b| b.performed_at_millis.cmp(&a.performed_at_millis));
        Ok(records)
    }

    async fn add_evidence(&self, input: CreateEvidenceItem) -> CarlogResult<EvidenceItem> {
        let mut inner = self.inner.write().await;
        if !inner.records.contains_key(&input.record_id) {
            return Err(CarlogError::NotFound {
                entity: "maintenance_record".into(),
                id: input.record_id,
            });
        }
        let item = EvidenceItem {
            id: Uuid::new_v4().to_string(),
            record_id: input.record_id,
            file_name: input.file_name,
            content_type: input.content_type,
            size_bytes: input.size_bytes,
        };
        inner.evidence.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    async fn list_evidence_for_record(&self, record_id: &str) -> CarlogResult<Vec<EvidenceItem>> {
        let inner = self.inner.read().await;
        let mut items: Vec<EvidenceItem> = inner
            .evidence
            .values()
            .filter(|e| e.record_id == record_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(items)
    }
}

impl SnapshotRepository for MemoryStore {
    async fn public_snapshot(&self, car_id: &str) -> CarlogResult<PublicCarSnapshot> {
        let inner = self.inner.read().await;
        let car = inner.cars.get(car_id).ok_or_else(|| CarlogError::NotFound {
            entity: "car".into(),
            id: car_id.to_string(),
        })?;

        let mut records: Vec<MaintenanceRecord> = inner
            .records
            .values()
            .filter(|r| r.car_id == car_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.performed_at_millis.cmp(&a.performed_at_millis));

        let mut evidence: Vec<EvidenceItem> = records
            .iter()
            .flat_map(|record| {
                inner
                    .evidence
                    .values()
                    .filter(|e| e.record_id == record.id)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        evidence.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        Ok(PublicCarSnapshot {
            car_id: car.id.clone(),
            display_name: car.display_name.clone(),
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year,
            records,
            evidence,
        })
    }
}

impl OwnershipVerifier for MemoryStore {
    async fn verify_owner(&self, owner_id: &str, car_id: &str) -> CarlogResult<()> {
        let inner = self.inner.read().await;
        // A missing car and a foreign car look the same to the caller.
        match inner.cars.get(car_id) {
            Some(car) if car.owner_id == owner_id => Ok(()),
            _ => Err(CarlogError::AuthorizationDenied {
                reason: "caller does not own this car".into(),
            }),
        }
    }
}
