//! Public share snapshot.

use serde::{Deserialize, Serialize};

use crate::models::evidence::EvidenceItem;
use crate::models::maintenance::MaintenanceRecord;

/// Read-only projection of one car's maintenance history, as rendered
/// to a share-link visitor.
///
/// Deliberately omits `owner_id` and anything else a stranger holding
/// a share link has no business seeing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicCarSnapshot {
    pub car_id: String,
    pub display_name: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    /// History in reverse chronological order (newest first).
    pub records: Vec<MaintenanceRecord>,
    /// Evidence metadata for every record in `records`.
    pub evidence: Vec<EvidenceItem>,
}
