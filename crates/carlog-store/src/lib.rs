//! CARLOG Store — in-memory document store implementing the
//! `carlog-core` repository traits.
//!
//! Used by the server binary and by integration tests that need a
//! real store behind the share access gate.

mod memory;

pub use memory::MemoryStore;
