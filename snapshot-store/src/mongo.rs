//! Thin adapter around the `mongodb` driver to isolate API usage.
//!
//! This facade concentrates all driver interactions behind a minimal API
//! and keeps the rest of the application decoupled from `mongodb`.
//!
//! Persisted layout: one database per query identity, one collection per
//! snapshot name. Each collection holds exactly one capture-time marker
//! document (`{ capture_time: <unix millis> }`) plus one
//! `{ title, stars }` document per repository.

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Database};
use tracing::{debug, info};

use crate::errors::{StoreError, StoreResult};
use crate::model::{MetricRecord, Snapshot};

const MARKER_FIELD: &str = "capture_time";

/// Owns the MongoDB client; cheap to clone.
#[derive(Debug, Clone)]
pub struct MongoBackend {
    client: Client,
}

impl MongoBackend {
    /// Connects to MongoDB at the given URI, e.g. `mongodb://localhost:27017`.
    pub async fn connect(uri: &str) -> StoreResult<Self> {
        info!("Connecting to MongoDB at {}", uri);
        let client = Client::with_uri_str(uri).await?;
        Ok(Self { client })
    }

    /// Scopes the backend to one identity container (a database).
    pub fn container(&self, name: &str) -> MongoStore {
        MongoStore {
            db: self.client.database(name),
        }
    }
}

/// Snapshot operations over one database.
#[derive(Debug, Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn write(
        &self,
        name: &str,
        captured_at: DateTime<Utc>,
        records: &[MetricRecord],
    ) -> StoreResult<()> {
        let coll = self.db.collection::<Document>(name);

        // Replace-not-merge: the old capture goes away in full.
        coll.drop().await?;
        coll.insert_one(doc! { MARKER_FIELD: captured_at.timestamp_millis() })
            .await?;

        if !records.is_empty() {
            let docs: Vec<Document> = records
                .iter()
                .map(|r| doc! { "title": &r.title, "stars": r.stars as i64 })
                .collect();
            coll.insert_many(docs).await?;
        }

        info!(
            "Committed snapshot '{}' with {} records to db '{}'",
            name,
            records.len(),
            self.db.name()
        );
        Ok(())
    }

    pub async fn read(&self, name: &str) -> StoreResult<Option<Snapshot>> {
        let coll = self.db.collection::<Document>(name);
        let mut cursor = coll.find(doc! {}).await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }

        let snapshot = fold_snapshot(name, documents)?;
        if snapshot.is_none() {
            debug!("No capture marker under '{}.{}'", self.db.name(), name);
        }
        Ok(snapshot)
    }

    pub async fn list_names(&self) -> StoreResult<Vec<String>> {
        let mut names = self.db.list_collection_names().await?;
        names.sort();
        Ok(names)
    }

    pub async fn captured_at(&self, name: &str) -> StoreResult<Option<DateTime<Utc>>> {
        let coll = self.db.collection::<Document>(name);
        let marker = coll
            .find_one(doc! { MARKER_FIELD: { "$exists": true } })
            .await?;
        marker.map(|d| marker_time(&d)).transpose()
    }
}

/// Folds a full collection scan into a snapshot.
///
/// A scan without a capture-time marker yields `None` even when record
/// documents are present — an unmarked collection is treated as absent,
/// never as partial data.
fn fold_snapshot(
    name: &str,
    documents: impl IntoIterator<Item = Document>,
) -> StoreResult<Option<Snapshot>> {
    let mut captured_at: Option<DateTime<Utc>> = None;
    let mut records = Vec::new();
    for document in documents {
        if document.contains_key(MARKER_FIELD) {
            captured_at = Some(marker_time(&document)?);
        } else {
            records.push(metric_record(&document)?);
        }
    }

    Ok(captured_at.map(|captured_at| Snapshot {
        name: name.to_owned(),
        captured_at,
        records,
    }))
}

fn marker_time(document: &Document) -> StoreResult<DateTime<Utc>> {
    let millis = document
        .get_i64(MARKER_FIELD)
        .map_err(|e| StoreError::Corrupt(format!("bad capture marker: {e}")))?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| StoreError::Corrupt(format!("capture time out of range: {millis}")))
}

fn metric_record(document: &Document) -> StoreResult<MetricRecord> {
    let title = document
        .get_str("title")
        .map_err(|e| StoreError::Corrupt(format!("bad record title: {e}")))?;
    let stars = document
        .get_i64("stars")
        .map_err(|e| StoreError::Corrupt(format!("bad record stars: {e}")))?;
    let stars = u64::try_from(stars)
        .map_err(|_| StoreError::Corrupt(format!("negative star count: {stars}")))?;
    Ok(MetricRecord {
        title: title.to_owned(),
        stars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn marker_and_records_fold_to_snapshot() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let snapshot = fold_snapshot(
            "stars1",
            vec![
                doc! { "capture_time": t0.timestamp_millis() },
                doc! { "title": "octo/repo", "stars": 100_i64 },
                doc! { "title": "b/b", "stars": 20_i64 },
            ],
        )
        .unwrap()
        .unwrap();

        assert_eq!(snapshot.name, "stars1");
        assert_eq!(snapshot.captured_at, t0);
        assert_eq!(
            snapshot.records,
            vec![
                MetricRecord::new("octo/repo", 100),
                MetricRecord::new("b/b", 20),
            ]
        );
    }

    #[test]
    fn records_without_marker_fold_to_none() {
        let snapshot = fold_snapshot(
            "stars1",
            vec![
                doc! { "title": "octo/repo", "stars": 100_i64 },
                doc! { "title": "b/b", "stars": 20_i64 },
            ],
        )
        .unwrap();

        // Never partial data: unmarked collections read as absent.
        assert!(snapshot.is_none());
    }

    #[test]
    fn empty_scan_folds_to_none() {
        assert!(fold_snapshot("stars1", vec![]).unwrap().is_none());
    }

    #[test]
    fn extraneous_fields_are_ignored() {
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let snapshot = fold_snapshot(
            "stars1",
            vec![
                doc! { "_id": 1, "capture_time": t0.timestamp_millis() },
                doc! { "_id": 2, "title": "octo/repo", "stars": 100_i64 },
            ],
        )
        .unwrap()
        .unwrap();

        assert_eq!(snapshot.records.len(), 1);
    }

    #[test]
    fn malformed_marker_is_corrupt() {
        let err = fold_snapshot("stars1", vec![doc! { "capture_time": "yesterday" }]).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(msg) if msg.contains("capture marker")));
    }

    #[test]
    fn malformed_record_is_corrupt() {
        let err = fold_snapshot(
            "stars1",
            vec![
                doc! { "capture_time": 0_i64 },
                doc! { "title": "octo/repo", "stars": "many" },
            ],
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(msg) if msg.contains("record stars")));
    }

    #[test]
    fn negative_star_count_is_corrupt() {
        let err = fold_snapshot(
            "stars1",
            vec![
                doc! { "capture_time": 0_i64 },
                doc! { "title": "octo/repo", "stars": -5_i64 },
            ],
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(msg) if msg.contains("negative star count")));
    }
}
