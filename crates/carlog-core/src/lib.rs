//! CARLOG Core — domain models, error types, and repository traits
//! shared across all crates.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{CarlogError, CarlogResult};
