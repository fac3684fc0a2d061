//! Change detection between two documentation snapshots

use crate::error::Result;
use crate::metrics::{HealthMetrics, MetricValue};
use crate::snapshot::{SnapshotDocument, SnapshotParser};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Complete comparison result for two snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDiff {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub metrics: MetricChanges,
    pub content: ContentChanges,
}

/// Metric-level changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricChanges {
    pub old: HealthMetrics,
    pub new: HealthMetrics,
    /// Only fields whose values differ, in declaration order
    pub changes: IndexMap<String, MetricChange>,
}

/// One changed metric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricChange {
    pub old: MetricValue,
    pub new: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

/// Line-level changes in the snapshot bodies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<LineModification>,
}

/// A line that was revised between snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineModification {
    pub old: String,
    pub new: String,
}

/// How a changed line is paired with a prior revision of itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// First old line over the threshold, in old-sequence order
    First,
    /// Most similar old line; ties go to the earliest
    Best,
}

impl MatchStrategy {
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "best" => Ok(Self::Best),
            _ => Err(format!("Invalid match strategy: {}. Use 'first' or 'best'", s)),
        }
    }
}

/// Tuning for content classification
#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub similarity_threshold: f64,
    pub strategy: MatchStrategy,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: crate::DEFAULT_SIMILARITY_THRESHOLD,
            strategy: MatchStrategy::First,
        }
    }
}

/// Change detector for snapshot comparisons
pub struct ChangeDetector;

impl ChangeDetector {
    /// Parse two snapshot files and compare them
    pub fn compare_files(
        old_path: &Path,
        new_path: &Path,
        options: &DiffOptions,
    ) -> Result<SnapshotDiff> {
        let (old_doc, new_doc) = rayon::join(
            || SnapshotParser::parse(old_path),
            || SnapshotParser::parse(new_path),
        );
        Ok(Self::compare_documents(&old_doc?, &new_doc?, options))
    }

    /// Compare two already-parsed snapshots
    pub fn compare_documents(
        old: &SnapshotDocument,
        new: &SnapshotDocument,
        options: &DiffOptions,
    ) -> SnapshotDiff {
        let old_metrics = old.metrics();
        let new_metrics = new.metrics();
        let changes = Self::detect_metric_changes(&old_metrics, &new_metrics);

        let content = if old.content_hash() == new.content_hash() {
            log::debug!("Snapshot bodies are identical, skipping line classification");
            ContentChanges::default()
        } else {
            Self::detect_content_changes(&old.content_lines, &new.content_lines, options)
        };

        log::debug!(
            "Compared {} and {}: {} metric changes, {} content changes",
            old.path.display(),
            new.path.display(),
            changes.len(),
            content.total_changes()
        );

        SnapshotDiff {
            old_path: old.path.clone(),
            new_path: new.path.clone(),
            metrics: MetricChanges {
                old: old_metrics,
                new: new_metrics,
                changes,
            },
            content,
        }
    }

    /// Compare metric records field by field, keeping only differing fields
    pub fn detect_metric_changes(
        old: &HealthMetrics,
        new: &HealthMetrics,
    ) -> IndexMap<String, MetricChange> {
        old.fields()
            .into_iter()
            .zip(new.fields())
            .filter(|((_, old_value), (_, new_value))| old_value != new_value)
            .map(|((name, old_value), (_, new_value))| {
                let delta = match (old_value.as_f64(), new_value.as_f64()) {
                    (Some(o), Some(n)) => Some(n - o),
                    _ => None,
                };
                (
                    name.to_string(),
                    MetricChange {
                        old: old_value,
                        new: new_value,
                        delta,
                    },
                )
            })
            .collect()
    }

    /// Classify body lines as added, removed or modified
    pub fn detect_content_changes<S: AsRef<str> + Sync>(
        old_lines: &[S],
        new_lines: &[S],
        options: &DiffOptions,
    ) -> ContentChanges {
        let old_set: HashSet<&str> = old_lines.iter().map(|l| l.as_ref()).collect();
        let new_set: HashSet<&str> = new_lines.iter().map(|l| l.as_ref()).collect();

        // Old lines that survive verbatim can never be the old side of a pair
        let candidates: Vec<usize> = (0..old_lines.len())
            .filter(|&i| !new_set.contains(old_lines[i].as_ref()))
            .collect();
        let old_words: Vec<HashSet<String>> = old_lines
            .par_iter()
            .map(|line| word_set(line.as_ref()))
            .collect();

        let mut consumed = vec![false; old_lines.len()];
        let mut changes = ContentChanges::default();

        for line in new_lines {
            let line = line.as_ref();
            if old_set.contains(line) {
                continue;
            }

            let words = word_set(line);
            let open = candidates.iter().copied().filter(|&i| !consumed[i]);
            let matched = match options.strategy {
                MatchStrategy::First => open
                    .into_iter()
                    .find(|&i| {
                        set_similarity(&old_words[i], &words) >= options.similarity_threshold
                    }),
                MatchStrategy::Best => {
                    let mut best: Option<(usize, f64)> = None;
                    for i in open {
                        let score = set_similarity(&old_words[i], &words);
                        if score >= options.similarity_threshold
                            && best.map_or(true, |(_, top)| score > top)
                        {
                            best = Some((i, score));
                        }
                    }
                    best.map(|(i, _)| i)
                }
            };

            match matched {
                Some(i) => {
                    consumed[i] = true;
                    changes.modified.push(LineModification {
                        old: old_lines[i].as_ref().to_string(),
                        new: line.to_string(),
                    });
                }
                None => changes.added.push(line.to_string()),
            }
        }

        for &i in &candidates {
            if !consumed[i] {
                changes.removed.push(old_lines[i].as_ref().to_string());
            }
        }

        changes
    }

    /// Word-overlap similarity between two lines, in [0, 1]
    pub fn similarity(a: &str, b: &str) -> f64 {
        set_similarity(&word_set(a), &word_set(b))
    }
}

/// Case-folded whitespace tokens
fn word_set(line: &str) -> HashSet<String> {
    line.split_whitespace().map(|w| w.to_lowercase()).collect()
}

fn set_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / larger as f64
}

impl MetricChanges {
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

impl ContentChanges {
    /// Check if there are any content changes
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.modified.is_empty()
    }

    /// Total number of changed lines
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}

impl SnapshotDiff {
    pub fn has_changes(&self) -> bool {
        self.metrics.has_changes() || self.content.has_changes()
    }
}
