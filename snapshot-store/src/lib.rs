//! Named snapshot persistence for star-count captures.
//!
//! This crate provides:
//! - Derivation of storage-legal container names from raw query parameters
//! - A snapshot store over a document-store backend (MongoDB or in-memory),
//!   scoped to one identity container at a time
//!
//! The design is flat (no deep nesting) and splits responsibilities into
//! focused modules. Backends are enum-dispatched: no async-trait, no boxed
//! futures.

mod backend;
mod errors;
mod memory;
mod model;
mod mongo;
mod name;

pub use backend::{SnapshotStore, StoreBackend};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryBackend;
pub use model::{MetricRecord, Snapshot};
pub use mongo::MongoBackend;
pub use name::container_name;

/// Default snapshot name inside an identity container.
///
/// Every commit without an explicit name writes here, and every comparison
/// reads from here.
pub const DEFAULT_SNAPSHOT: &str = "stars1";
