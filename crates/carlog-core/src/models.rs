//! Domain models for CARLOG.
//!
//! These are the core types shared across all crates.

pub mod car;
pub mod evidence;
pub mod maintenance;
pub mod snapshot;
