//! Snapshot data model.

use chrono::{DateTime, Utc};

/// One repository's star count at capture time. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    /// Repository full name, unique within a snapshot.
    pub title: String,
    /// Star count at capture time.
    pub stars: u64,
}

impl MetricRecord {
    pub fn new(title: impl Into<String>, stars: u64) -> Self {
        Self {
            title: title.into(),
            stars,
        }
    }
}

/// A named, complete, point-in-time capture.
///
/// `records` keeps stored order; comparison output follows it. Writing a
/// snapshot under an existing name replaces it in full, so a snapshot is
/// never a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub name: String,
    pub captured_at: DateTime<Utc>,
    pub records: Vec<MetricRecord>,
}
