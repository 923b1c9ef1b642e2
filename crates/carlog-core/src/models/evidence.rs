//! Evidence metadata domain model.
//!
//! Evidence is an uploaded receipt or photo attached to a maintenance
//! record. Only the metadata lives here; blob storage is external.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: String,
    pub record_id: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvidenceItem {
    pub record_id: String,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}
