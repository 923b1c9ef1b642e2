//! Maintenance record domain model.

use serde::{Deserialize, Serialize};

/// Category of maintenance work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceCategory {
    OilChange,
    Tires,
    Brakes,
    Inspection,
    Repair,
    Other,
}

/// A single maintenance entry in a car's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    pub car_id: String,
    /// When the work was performed (epoch milliseconds).
    pub performed_at_millis: i64,
    pub odometer_km: u32,
    pub category: MaintenanceCategory,
    pub title: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceRecord {
    pub car_id: String,
    pub performed_at_millis: i64,
    pub odometer_km: u32,
    pub category: MaintenanceCategory,
    pub title: String,
    pub notes: Option<String>,
}
