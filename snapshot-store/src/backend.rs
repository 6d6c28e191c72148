//! Store facade without async-trait or dynamic trait objects.
//!
//! We expose enums with concrete implementations per backend. This keeps
//! async fns simple and avoids boxing futures.

use chrono::{DateTime, Utc};

use crate::errors::StoreResult;
use crate::memory::{MemoryBackend, MemoryStore};
use crate::model::{MetricRecord, Snapshot};
use crate::mongo::{MongoBackend, MongoStore};

/// Concrete store backend (enum-dispatch).
///
/// A backend owns the connection; [`StoreBackend::container`] scopes it to
/// one identity container, yielding a [`SnapshotStore`].
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Mongo(MongoBackend),
    Memory(MemoryBackend),
}

impl StoreBackend {
    /// Scopes the backend to one identity container.
    pub fn container(&self, name: &str) -> SnapshotStore {
        match self {
            Self::Mongo(b) => SnapshotStore::Mongo(b.container(name)),
            Self::Memory(b) => SnapshotStore::Memory(b.container(name)),
        }
    }
}

/// Snapshot operations scoped to one identity container.
#[derive(Debug, Clone)]
pub enum SnapshotStore {
    Mongo(MongoStore),
    Memory(MemoryStore),
}

impl SnapshotStore {
    /// Atomically replaces the snapshot under `name` with a fresh capture.
    ///
    /// Drops any existing content for `name`, then inserts the capture-time
    /// marker followed by all records. The prior capture under that name
    /// becomes unrecoverable; there is no versioning.
    pub async fn write(
        &self,
        name: &str,
        captured_at: DateTime<Utc>,
        records: &[MetricRecord],
    ) -> StoreResult<()> {
        match self {
            Self::Mongo(s) => s.write(name, captured_at, records).await,
            Self::Memory(s) => s.write(name, captured_at, records),
        }
    }

    /// Reads the complete snapshot under `name`.
    ///
    /// Returns `Ok(None)` when `name` is absent or holds no capture-time
    /// marker — the "no baseline yet" signal, distinct from a backend
    /// failure and never partial data.
    pub async fn read(&self, name: &str) -> StoreResult<Option<Snapshot>> {
        match self {
            Self::Mongo(s) => s.read(name).await,
            Self::Memory(s) => s.read(name),
        }
    }

    /// Enumerates snapshot names in this container, sorted.
    ///
    /// Re-queries current backend state on every call; nothing is cached.
    pub async fn list_names(&self) -> StoreResult<Vec<String>> {
        match self {
            Self::Mongo(s) => s.list_names().await,
            Self::Memory(s) => s.list_names(),
        }
    }

    /// Reads only the capture time of the snapshot under `name`.
    pub async fn captured_at(&self, name: &str) -> StoreResult<Option<DateTime<Utc>>> {
        match self {
            Self::Mongo(s) => s.captured_at(name).await,
            Self::Memory(s) => s.captured_at(name),
        }
    }
}
