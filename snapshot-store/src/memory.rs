//! In-memory backend for tests and offline runs.
//!
//! Mirrors the document-store layout (container → snapshot name → capture)
//! with the same replace-not-merge semantics as the MongoDB backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::{StoreError, StoreResult};
use crate::model::{MetricRecord, Snapshot};

#[derive(Debug, Clone)]
struct StoredSet {
    captured_at: DateTime<Utc>,
    records: Vec<MetricRecord>,
}

type Containers = HashMap<String, HashMap<String, StoredSet>>;

/// Shared in-memory state; cheap to clone, reads see the last completed
/// write across clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    containers: Arc<Mutex<Containers>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes the backend to one identity container.
    pub fn container(&self, name: &str) -> MemoryStore {
        MemoryStore {
            containers: Arc::clone(&self.containers),
            container: name.to_owned(),
        }
    }
}

/// Snapshot operations over one in-memory container.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    containers: Arc<Mutex<Containers>>,
    container: String,
}

impl MemoryStore {
    pub fn write(
        &self,
        name: &str,
        captured_at: DateTime<Utc>,
        records: &[MetricRecord],
    ) -> StoreResult<()> {
        let mut containers = self.lock()?;
        let sets = containers.entry(self.container.clone()).or_default();
        debug!(
            "Committing snapshot '{}' with {} records to container '{}'",
            name,
            records.len(),
            self.container
        );
        sets.insert(
            name.to_owned(),
            StoredSet {
                captured_at,
                records: records.to_vec(),
            },
        );
        Ok(())
    }

    pub fn read(&self, name: &str) -> StoreResult<Option<Snapshot>> {
        let containers = self.lock()?;
        let set = containers
            .get(&self.container)
            .and_then(|sets| sets.get(name));
        Ok(set.map(|s| Snapshot {
            name: name.to_owned(),
            captured_at: s.captured_at,
            records: s.records.clone(),
        }))
    }

    pub fn list_names(&self) -> StoreResult<Vec<String>> {
        let containers = self.lock()?;
        let mut names: Vec<String> = containers
            .get(&self.container)
            .map(|sets| sets.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        Ok(names)
    }

    pub fn captured_at(&self, name: &str) -> StoreResult<Option<DateTime<Utc>>> {
        let containers = self.lock()?;
        Ok(containers
            .get(&self.container)
            .and_then(|sets| sets.get(name))
            .map(|s| s.captured_at))
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Containers>> {
        self.containers.lock().map_err(|_| StoreError::Poisoned)
    }
}
