//! Metric extraction from rendered snapshot headers
//!
//! Snapshot documents store their metrics as formatted text. This module is the
//! only place that knows how to read that text back into a [`HealthMetrics`]
//! record. Extraction is tolerant: a missing or malformed entry resolves to its
//! zero value instead of failing.

use crate::metrics::HealthMetrics;
use crate::snapshot::SnapshotMetadata;

pub const LABEL_WORD_COUNT: &str = "Word Count";
pub const LABEL_READING_TIME: &str = "Reading Time";
pub const LABEL_TODOS: &str = "TODOs";
pub const LABEL_COMPLETION: &str = "Completion";
pub const LABEL_SECTIONS: &str = "Sections";
pub const LABEL_CODE_BLOCKS: &str = "Code Blocks";
pub const LABEL_DAYS_SINCE_LAST: &str = "Days Since Last Snapshot";

/// Reads snapshot metadata back from header lines
pub struct MetricExtractor;

impl MetricExtractor {
    /// Extract version, timestamps and metrics from the metadata section
    pub fn extract<S: AsRef<str>>(lines: &[S]) -> SnapshotMetadata {
        let version = Self::top_level(lines, "Version").unwrap_or_default();
        let created_at = Self::top_level(lines, "Created").unwrap_or_default();
        let updated_at = Self::top_level(lines, "Updated").unwrap_or_else(|| created_at.clone());

        let metrics = Self::extract_metrics(lines, &updated_at);

        SnapshotMetadata {
            version,
            created_at,
            updated_at,
            metrics: Some(metrics),
        }
    }

    /// Extract only the metrics record
    pub fn extract_metrics<S: AsRef<str>>(lines: &[S], last_updated: &str) -> HealthMetrics {
        let todo_count = Self::integer(lines, LABEL_TODOS);

        HealthMetrics {
            last_updated: last_updated.to_string(),
            word_count: Self::integer(lines, LABEL_WORD_COUNT),
            reading_time: Self::integer(lines, LABEL_READING_TIME),
            has_todos: todo_count > 0,
            todo_count,
            completion_percentage: Self::percentage(lines, LABEL_COMPLETION),
            section_count: Self::integer(lines, LABEL_SECTIONS),
            code_blocks: Self::integer(lines, LABEL_CODE_BLOCKS),
            last_snapshot_delta: Self::integer(lines, LABEL_DAYS_SINCE_LAST),
            // Not represented in the header
            ..HealthMetrics::default()
        }
    }

    /// Trimmed text after `- <label>:` on the first line containing it
    fn labeled_value<'a, S: AsRef<str>>(lines: &'a [S], label: &str) -> Option<&'a str> {
        let marker = format!("- {}:", label);
        lines.iter().find_map(|line| {
            let line = line.as_ref();
            line.find(&marker)
                .map(|pos| line[pos + marker.len()..].trim())
        })
    }

    fn integer<S: AsRef<str>>(lines: &[S], label: &str) -> u64 {
        let Some(raw) = Self::labeled_value(lines, label) else {
            log::debug!("Metric '{}' not found, defaulting to 0", label);
            return 0;
        };

        match numeric_prefix(raw, false).parse::<u64>() {
            Ok(value) => value,
            Err(_) => {
                log::debug!("Metric '{}' has unparseable value '{}', defaulting to 0", label, raw);
                0
            }
        }
    }

    fn percentage<S: AsRef<str>>(lines: &[S], label: &str) -> f64 {
        let Some(raw) = Self::labeled_value(lines, label) else {
            log::debug!("Metric '{}' not found, defaulting to 0", label);
            return 0.0;
        };

        match numeric_prefix(raw, true).parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            _ => {
                log::debug!("Metric '{}' has unparseable value '{}', defaulting to 0", label, raw);
                0.0
            }
        }
    }

    /// Value of a `<Key>: <value>` line outside the bulleted list
    fn top_level<S: AsRef<str>>(lines: &[S], key: &str) -> Option<String> {
        let prefix = format!("{}:", key);
        lines
            .iter()
            .map(|line| line.as_ref().trim())
            .find_map(|line| line.strip_prefix(&prefix))
            .map(|value| value.trim().to_string())
    }
}

/// Leading digits of `raw`, with at most one `.` when `fractional`
fn numeric_prefix(raw: &str, fractional: bool) -> &str {
    let mut seen_dot = false;
    let end = raw
        .char_indices()
        .find(|&(_, c)| {
            if c == '.' && fractional && !seen_dot {
                seen_dot = true;
                return false;
            }
            !c.is_ascii_digit()
        })
        .map_or(raw.len(), |(i, _)| i);
    &raw[..end]
}
