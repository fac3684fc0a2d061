//! Unit tests for snapshot store management

use chrono::{TimeZone, Utc};
use docsnap::config::StoreConfig;
use docsnap::metrics::MetricsAnalyzer;
use docsnap::SnapshotStore;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_store_creation_writes_config() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::create_new(temp_dir.path().join("snaps")).unwrap();

    assert!(store.root.is_dir());
    let config: StoreConfig =
        serde_json::from_str(&fs::read_to_string(&store.config_path).unwrap()).unwrap();
    assert_eq!(config.version, docsnap::FORMAT_VERSION);
    assert!(config.created.is_some());
}

#[test]
fn test_existing_config_is_kept_unless_forced() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::create_new(temp_dir.path().to_path_buf()).unwrap();
    fs::write(&store.config_path, r#"{"similarity_threshold": 0.5}"#).unwrap();

    SnapshotStore::create_new(temp_dir.path().to_path_buf()).unwrap();
    assert_eq!(store.load_config().unwrap().similarity_threshold, 0.5);

    store.create_config_with_force(true).unwrap();
    assert_eq!(store.load_config().unwrap().similarity_threshold, 0.70);
}

#[test]
fn test_empty_store_lists_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::from_root(temp_dir.path().join("missing"));

    assert!(store.list_snapshots().unwrap().is_empty());
    assert!(store.latest_snapshot().unwrap().is_none());
}

#[test]
fn test_list_orders_by_creation_time() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::create_new(temp_dir.path().join("snaps")).unwrap();
    let input = temp_dir.path().join("guide.md");
    fs::write(&input, "# Guide\n").unwrap();
    let analyzer = MetricsAnalyzer::default();

    // Written out of order on purpose
    let later = store
        .create_snapshot(&input, Utc.with_ymd_and_hms(2026, 5, 2, 0, 0, 0).unwrap(), &analyzer)
        .unwrap();
    let earlier = store
        .create_snapshot(&input, Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(), &analyzer)
        .unwrap();

    let entries = store.list_snapshots().unwrap();
    let paths: Vec<_> = entries.iter().map(|e| e.path.clone()).collect();
    assert_eq!(paths, vec![earlier, later]);
    assert!(entries[0].relative_path.starts_with("2025/12/31"));
}

#[test]
fn test_days_since_latest_never_negative() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::create_new(temp_dir.path().join("snaps")).unwrap();
    let input = temp_dir.path().join("guide.md");
    fs::write(&input, "# Guide\n").unwrap();

    let future = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    store.create_snapshot(&input, future, &MetricsAnalyzer::default()).unwrap();

    let past = Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(store.days_since_latest(past).unwrap(), 0);
}
