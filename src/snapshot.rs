//! Snapshot documents: rendering and parsing

use crate::error::{DocsnapError, Result};
use crate::extract::{
    MetricExtractor, LABEL_CODE_BLOCKS, LABEL_COMPLETION, LABEL_DAYS_SINCE_LAST,
    LABEL_READING_TIME, LABEL_SECTIONS, LABEL_TODOS, LABEL_WORD_COUNT,
};
use crate::hash::{HashComputer, HashValue};
use crate::metrics::HealthMetrics;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Line separating the metadata header from the body
pub const SEPARATOR: &str = "---";

/// Snapshot metadata rendered into the document header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub version: String,
    pub created_at: String,
    pub updated_at: String,
    pub metrics: Option<HealthMetrics>,
}

/// A parsed snapshot document
#[derive(Debug, Clone)]
pub struct SnapshotDocument {
    pub path: PathBuf,
    pub metadata: SnapshotMetadata,
    /// Body lines with blank lines removed
    pub content_lines: Vec<String>,
}

impl SnapshotDocument {
    /// Metrics recorded in the header, or zeroed metrics if absent
    pub fn metrics(&self) -> HealthMetrics {
        self.metadata.metrics.clone().unwrap_or_default()
    }

    /// Fingerprint of the body lines
    pub fn content_hash(&self) -> HashValue {
        HashComputer::new().hash_lines(&self.content_lines)
    }
}

/// Splits snapshot documents into header and body
pub struct SnapshotParser;

impl SnapshotParser {
    /// Read and parse a snapshot file
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<SnapshotDocument> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::parse_str(path, &text)
    }

    /// Parse snapshot text; `path` is only used for labeling and errors
    pub fn parse_str<P: AsRef<Path>>(path: P, text: &str) -> Result<SnapshotDocument> {
        let path = path.as_ref();
        let lines: Vec<&str> = text.lines().collect();

        let separator = lines
            .iter()
            .position(|line| *line == SEPARATOR)
            .ok_or_else(|| {
                DocsnapError::format(path, format!("missing '{}' separator line", SEPARATOR))
            })?;

        let metadata = MetricExtractor::extract(&lines[..separator]);
        let content_lines: Vec<String> = lines[separator + 1..]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect();

        log::debug!(
            "Parsed {}: {} metadata lines, {} content lines",
            path.display(),
            separator,
            content_lines.len()
        );

        Ok(SnapshotDocument {
            path: path.to_path_buf(),
            metadata,
            content_lines,
        })
    }
}

/// Renders snapshot documents in the format [`SnapshotParser`] reads
pub struct SnapshotWriter;

impl SnapshotWriter {
    pub fn render(title: &str, metadata: &SnapshotMetadata, body: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Snapshot: {}\n", title));
        out.push_str(&format!("Version: {}\n", metadata.version));
        out.push_str(&format!("Created: {}\n", metadata.created_at));
        out.push_str(&format!("Updated: {}\n", metadata.updated_at));

        if let Some(metrics) = &metadata.metrics {
            out.push('\n');
            out.push_str("## Health Metrics\n");
            out.push_str(&format!("- {}: {}\n", LABEL_WORD_COUNT, metrics.word_count));
            out.push_str(&format!("- {}: {} minutes\n", LABEL_READING_TIME, metrics.reading_time));
            out.push_str(&format!("- {}: {}\n", LABEL_TODOS, metrics.todo_count));
            out.push_str(&format!("- {}: {}%\n", LABEL_COMPLETION, metrics.completion_percentage));
            out.push_str(&format!("- {}: {}\n", LABEL_SECTIONS, metrics.section_count));
            out.push_str(&format!("- {}: {}\n", LABEL_CODE_BLOCKS, metrics.code_blocks));
            out.push_str(&format!(
                "- {}: {}\n",
                LABEL_DAYS_SINCE_LAST, metrics.last_snapshot_delta
            ));
        }

        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}
