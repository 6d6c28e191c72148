//! Store semantics against the in-memory backend.

use chrono::{TimeZone, Utc};
use snapshot_store::{DEFAULT_SNAPSHOT, MemoryBackend, MetricRecord, StoreBackend};

fn records(pairs: &[(&str, u64)]) -> Vec<MetricRecord> {
    pairs
        .iter()
        .map(|(title, stars)| MetricRecord::new(*title, *stars))
        .collect()
}

#[tokio::test]
async fn write_then_read_round_trips() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let store = backend.container("rustgr1000");
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    store
        .write(DEFAULT_SNAPSHOT, t0, &records(&[("octo/repo", 100)]))
        .await
        .unwrap();

    let snapshot = store.read(DEFAULT_SNAPSHOT).await.unwrap().unwrap();
    assert_eq!(snapshot.name, DEFAULT_SNAPSHOT);
    assert_eq!(snapshot.captured_at, t0);
    assert_eq!(snapshot.records, records(&[("octo/repo", 100)]));
}

#[tokio::test]
async fn write_replaces_never_merges() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let store = backend.container("rustgr1000");
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    store
        .write(DEFAULT_SNAPSHOT, t0, &records(&[("a/a", 1), ("b/b", 2)]))
        .await
        .unwrap();
    store
        .write(DEFAULT_SNAPSHOT, t1, &records(&[("c/c", 3)]))
        .await
        .unwrap();

    let snapshot = store.read(DEFAULT_SNAPSHOT).await.unwrap().unwrap();
    assert_eq!(snapshot.captured_at, t1);
    assert_eq!(snapshot.records, records(&[("c/c", 3)]));
    assert!(!snapshot.records.iter().any(|r| r.title == "a/a"));
}

#[tokio::test]
async fn read_of_absent_name_is_none_not_error() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let store = backend.container("rustgr1000");

    assert!(store.read(DEFAULT_SNAPSHOT).await.unwrap().is_none());
    assert!(store.captured_at(DEFAULT_SNAPSHOT).await.unwrap().is_none());
}

#[tokio::test]
async fn containers_are_isolated() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    backend
        .container("rustgr1000")
        .write(DEFAULT_SNAPSHOT, t0, &records(&[("a/a", 1)]))
        .await
        .unwrap();

    let other = backend.container("gogr1000");
    assert!(other.read(DEFAULT_SNAPSHOT).await.unwrap().is_none());
}

#[tokio::test]
async fn list_names_reflects_current_state() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let store = backend.container("rustgr1000");
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    assert!(store.list_names().await.unwrap().is_empty());

    store.write("stars1", t0, &records(&[("a/a", 1)])).await.unwrap();
    store.write("before-1.0", t0, &records(&[("a/a", 1)])).await.unwrap();

    assert_eq!(
        store.list_names().await.unwrap(),
        vec!["before-1.0".to_string(), "stars1".to_string()]
    );
}

#[tokio::test]
async fn clones_share_state() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let writer = backend.container("rustgr1000");
    let reader = backend.container("rustgr1000");
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    writer
        .write(DEFAULT_SNAPSHOT, t0, &records(&[("a/a", 1)]))
        .await
        .unwrap();

    assert!(reader.read(DEFAULT_SNAPSHOT).await.unwrap().is_some());
}

#[tokio::test]
async fn empty_snapshot_is_distinct_from_missing() {
    let backend = StoreBackend::Memory(MemoryBackend::new());
    let store = backend.container("rustgr1000");
    let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    store.write(DEFAULT_SNAPSHOT, t0, &[]).await.unwrap();

    let snapshot = store.read(DEFAULT_SNAPSHOT).await.unwrap().unwrap();
    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.captured_at, t0);
}
