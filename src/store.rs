//! Snapshot store: a directory of snapshots bucketed by date

use crate::config::StoreConfig;
use crate::error::{DocsnapError, Result};
use crate::metrics::MetricsAnalyzer;
use crate::snapshot::{SnapshotMetadata, SnapshotParser, SnapshotWriter};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default store location relative to the project root
pub const DEFAULT_STORE_DIR: &str = "docs/snapshots";

const CONFIG_FILE: &str = "config.json";

/// Manages the snapshot output directory
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    /// Store root (holds `config.json` and the `YYYY/MM/DD` buckets)
    pub root: PathBuf,
    pub config_path: PathBuf,
}

/// A snapshot file found in the store
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEntry {
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub created: DateTime<Utc>,
}

impl SnapshotStore {
    /// Create store from root directory path
    pub fn from_root(root: PathBuf) -> Self {
        let config_path = root.join(CONFIG_FILE);
        Self { root, config_path }
    }

    /// Create a new store in the specified root directory
    pub fn create_new(root: PathBuf) -> Result<Self> {
        let store = Self::from_root(root);
        fs::create_dir_all(&store.root)?;
        store.create_config_with_force(false)?;

        log::info!("Created snapshot store at: {}", store.root.display());
        Ok(store)
    }

    /// Write the default configuration file, keeping an existing one unless forced
    pub fn create_config_with_force(&self, force: bool) -> Result<()> {
        if self.config_path.exists() && !force {
            return Ok(());
        }

        let config = StoreConfig {
            created: Some(Utc::now()),
            ..StoreConfig::default()
        };
        fs::write(&self.config_path, serde_json::to_string_pretty(&config)?)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<StoreConfig> {
        StoreConfig::load(&self.config_path)
    }

    /// Bucketed path for a new snapshot of `source`
    pub fn snapshot_path(&self, source: &Path, created: DateTime<Utc>) -> PathBuf {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("snapshot");
        let bucket = self
            .root
            .join(created.format("%Y").to_string())
            .join(created.format("%m").to_string())
            .join(created.format("%d").to_string());
        let base = format!("{}-{}", stem, created.format("%H%M%S"));

        let mut candidate = bucket.join(format!("{}.md", base));
        let mut counter = 1;
        while candidate.exists() {
            candidate = bucket.join(format!("{}-{}.md", base, counter));
            counter += 1;
        }
        candidate
    }

    /// List all snapshots, oldest first
    pub fn list_snapshots(&self) -> Result<Vec<SnapshotEntry>> {
        let mut entries = Vec::new();

        if !self.root.exists() {
            return Ok(entries);
        }

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "md") {
                continue;
            }

            let document = match SnapshotParser::parse(path) {
                Ok(document) => document,
                Err(e) => {
                    log::debug!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let Ok(created) = DateTime::parse_from_rfc3339(&document.metadata.created_at) else {
                log::debug!("Skipping {}: no valid creation time", path.display());
                continue;
            };

            entries.push(SnapshotEntry {
                path: path.to_path_buf(),
                relative_path: path.strip_prefix(&self.root).unwrap_or(path).to_path_buf(),
                created: created.with_timezone(&Utc),
            });
        }

        entries.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.path.cmp(&b.path)));
        Ok(entries)
    }

    /// Find the most recent snapshot by creation time
    pub fn latest_snapshot(&self) -> Result<Option<SnapshotEntry>> {
        Ok(self.list_snapshots()?.pop())
    }

    /// Whole days between the latest snapshot and `now`, 0 if there is none
    pub fn days_since_latest(&self, now: DateTime<Utc>) -> Result<u64> {
        Ok(self
            .latest_snapshot()?
            .map(|entry| (now - entry.created).num_days().max(0) as u64)
            .unwrap_or(0))
    }

    /// Analyze a markdown file and write its snapshot into the store
    pub fn create_snapshot(
        &self,
        input: &Path,
        now: DateTime<Utc>,
        analyzer: &MetricsAnalyzer,
    ) -> Result<PathBuf> {
        if !input.is_file() {
            return Err(DocsnapError::invalid_input(format!(
                "Input file does not exist: {}",
                input.display()
            )));
        }

        let body = fs::read_to_string(input)?;
        let days = self.days_since_latest(now)?;
        let timestamp = now.to_rfc3339();
        let metrics = analyzer.analyze(&body, &timestamp, days);

        let metadata = SnapshotMetadata {
            version: crate::FORMAT_VERSION.to_string(),
            created_at: timestamp.clone(),
            updated_at: timestamp,
            metrics: Some(metrics),
        };
        let title = input
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let rendered = SnapshotWriter::render(&title, &metadata, &body);

        let path = self.snapshot_path(input, now);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, rendered)?;

        log::info!("Wrote snapshot of {} to {}", input.display(), path.display());
        Ok(path)
    }
}
