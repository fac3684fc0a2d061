//! Output formatting utilities

use crate::change_detection::{MetricChange, SnapshotDiff};
use crate::error::Result;
use crate::snapshot::SnapshotMetadata;
use crate::store::SnapshotEntry;

/// Renders snapshot diffs as a readable text report
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a complete diff report
    pub fn format(diff: &SnapshotDiff) -> String {
        let mut out = String::new();

        out.push_str("🔍 Snapshot Diff\n");
        out.push_str(&format!("├─ Old: {}\n", diff.old_path.display()));
        out.push_str(&format!("└─ New: {}\n", diff.new_path.display()));
        out.push('\n');

        if diff.metrics.has_changes() {
            out.push_str("📊 Metrics Changes\n");
            for (field, change) in &diff.metrics.changes {
                out.push_str(&format!("  {}: {}\n", title_case(field), format_change(change)));
            }
        } else {
            out.push_str("📊 Metrics: unchanged\n");
        }
        out.push('\n');

        let content = &diff.content;
        if !content.has_changes() {
            out.push_str("📝 Content: unchanged\n");
            return out;
        }

        out.push_str("📝 Content Changes\n");

        if !content.added.is_empty() {
            out.push_str("\nAdded:\n");
            for line in &content.added {
                out.push_str(&format!("+ {}\n", line));
            }
        }

        if !content.removed.is_empty() {
            out.push_str("\nRemoved:\n");
            for line in &content.removed {
                out.push_str(&format!("- {}\n", line));
            }
        }

        if !content.modified.is_empty() {
            out.push_str("\nModified:\n");
            for modification in &content.modified {
                out.push_str(&format!("- {}\n", modification.old));
                out.push_str(&format!("+ {}\n", modification.new));
                out.push('\n');
            }
        }

        out
    }
}

fn format_change(change: &MetricChange) -> String {
    match change.delta {
        Some(delta) => format!(
            "{} → {} {} ({})",
            change.old,
            change.new,
            trend_glyph(delta),
            format_delta(delta)
        ),
        None => format!("{} → {}", change.old, change.new),
    }
}

/// Signed delta at two decimals with trailing zeros dropped
fn format_delta(delta: f64) -> String {
    let text = format!("{:+.2}", delta);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "+0".to_string(),
        _ => text.to_string(),
    }
}

fn trend_glyph(delta: f64) -> &'static str {
    if delta > 0.0 {
        "↑"
    } else if delta < 0.0 {
        "↓"
    } else {
        "→"
    }
}

/// `word_count` -> `Word Count`
fn title_case(field: &str) -> String {
    field
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Pretty printer for docsnap output
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print snapshot metadata
    pub fn print_snapshot_metadata(title: &str, metadata: &SnapshotMetadata) {
        println!("📸 Snapshot: {}", title);
        println!("├─ Version: {}", metadata.version);
        println!("├─ Created: {}", metadata.created_at);

        match &metadata.metrics {
            Some(metrics) => {
                println!("├─ Updated: {}", metadata.updated_at);
                println!("└─ Health Metrics");
                println!(
                    "   ├─ Words: {} ({} min read)",
                    metrics.word_count, metrics.reading_time
                );
                println!("   ├─ TODOs: {}", metrics.todo_count);
                println!("   ├─ Completion: {}%", metrics.completion_percentage);
                println!("   ├─ Sections: {}", metrics.section_count);
                println!("   ├─ Code blocks: {}", metrics.code_blocks);
                println!("   └─ Days since last snapshot: {}", metrics.last_snapshot_delta);
            }
            None => println!("└─ Updated: {}", metadata.updated_at),
        }
    }

    /// Print snapshot list
    pub fn print_snapshot_list(entries: &[SnapshotEntry]) {
        if entries.is_empty() {
            println!("No snapshots found.");
            return;
        }

        println!("📸 Available Snapshots:");
        for (i, entry) in entries.iter().enumerate() {
            let prefix = if i == entries.len() - 1 { "└─" } else { "├─" };
            println!(
                "{} {} ({})",
                prefix,
                entry.relative_path.display(),
                entry.created.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}
