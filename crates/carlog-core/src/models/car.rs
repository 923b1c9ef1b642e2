//! Car domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle tracked by the maintenance log.
///
/// Ids are opaque strings: they travel inside share tokens and URLs,
/// so nothing downstream may assume a particular shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub owner_id: String,
    pub display_name: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCar {
    pub owner_id: String,
    pub display_name: String,
    pub make: String,
    pub model: String,
    pub year: u16,
}
