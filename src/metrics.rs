//! Documentation health metrics and the analyzer that computes them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health metrics describing one document at capture time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub last_updated: String,
    pub word_count: u64,
    /// Minutes, rounded up
    pub reading_time: u64,
    pub has_todos: bool,
    pub todo_count: u64,
    pub linked_files: Vec<String>,
    pub broken_links: Vec<String>,
    pub completion_percentage: f64,
    pub section_count: u64,
    pub section_depth: u64,
    pub code_blocks: u64,
    pub avg_section_length: f64,
    pub readability_score: f64,
    /// Days between this snapshot and the previous one in the same store
    pub last_snapshot_delta: u64,
}

impl Default for HealthMetrics {
    fn default() -> Self {
        Self {
            last_updated: String::new(),
            word_count: 0,
            reading_time: 0,
            has_todos: false,
            todo_count: 0,
            linked_files: Vec::new(),
            broken_links: Vec::new(),
            completion_percentage: 0.0,
            section_count: 0,
            section_depth: 0,
            code_blocks: 0,
            avg_section_length: 0.0,
            readability_score: 0.0,
            last_snapshot_delta: 0,
        }
    }
}

impl HealthMetrics {
    /// All fields as generic values, in declaration order
    pub fn fields(&self) -> Vec<(&'static str, MetricValue)> {
        vec![
            ("last_updated", MetricValue::Text(self.last_updated.clone())),
            ("word_count", MetricValue::Integer(self.word_count)),
            ("reading_time", MetricValue::Integer(self.reading_time)),
            ("has_todos", MetricValue::Bool(self.has_todos)),
            ("todo_count", MetricValue::Integer(self.todo_count)),
            ("linked_files", MetricValue::List(self.linked_files.clone())),
            ("broken_links", MetricValue::List(self.broken_links.clone())),
            ("completion_percentage", MetricValue::Float(self.completion_percentage)),
            ("section_count", MetricValue::Integer(self.section_count)),
            ("section_depth", MetricValue::Integer(self.section_depth)),
            ("code_blocks", MetricValue::Integer(self.code_blocks)),
            ("avg_section_length", MetricValue::Float(self.avg_section_length)),
            ("readability_score", MetricValue::Float(self.readability_score)),
            ("last_snapshot_delta", MetricValue::Integer(self.last_snapshot_delta)),
        ]
    }
}

/// A single metric value, used when comparing records field by field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(u64),
    Float(f64),
    Bool(bool),
    Text(String),
    List(Vec<String>),
}

impl MetricValue {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Text(s) => write!(f, "{}", s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// Computes health metrics from markdown text
#[derive(Debug, Clone)]
pub struct MetricsAnalyzer {
    words_per_minute: u64,
}

impl Default for MetricsAnalyzer {
    fn default() -> Self {
        Self::new(crate::DEFAULT_WORDS_PER_MINUTE)
    }
}

impl MetricsAnalyzer {
    pub fn new(words_per_minute: u64) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
        }
    }

    /// Analyze a markdown body
    pub fn analyze(
        &self,
        markdown: &str,
        last_updated: &str,
        last_snapshot_delta: u64,
    ) -> HealthMetrics {
        let word_count = markdown.split_whitespace().count() as u64;

        let mut todo_count = 0u64;
        let mut done_count = 0u64;
        let mut section_count = 0u64;
        let mut section_depth = 0u64;
        let mut code_blocks = 0u64;
        let mut in_fence = false;

        for line in markdown.lines() {
            let trimmed = line.trim_start();

            if trimmed.starts_with("```") {
                if !in_fence {
                    code_blocks += 1;
                }
                in_fence = !in_fence;
                continue;
            }
            if in_fence {
                continue;
            }

            if let Some(depth) = heading_depth(trimmed) {
                section_count += 1;
                section_depth = section_depth.max(depth);
            } else if is_unchecked_item(trimmed) {
                todo_count += 1;
            } else if is_checked_item(trimmed) {
                done_count += 1;
            }
        }

        let total_items = todo_count + done_count;
        let completion_percentage = if total_items == 0 {
            100.0
        } else {
            round_one_decimal(done_count as f64 / total_items as f64 * 100.0)
        };

        let avg_section_length = if section_count == 0 {
            word_count as f64
        } else {
            word_count as f64 / section_count as f64
        };

        HealthMetrics {
            last_updated: last_updated.to_string(),
            word_count,
            reading_time: word_count.div_ceil(self.words_per_minute),
            has_todos: todo_count > 0,
            todo_count,
            linked_files: Vec::new(),
            broken_links: Vec::new(),
            completion_percentage,
            section_count,
            section_depth,
            code_blocks,
            avg_section_length,
            readability_score: 0.0,
            last_snapshot_delta,
        }
    }
}

/// Number of leading `#` markers if the line is an ATX heading
fn heading_depth(line: &str) -> Option<u64> {
    let depth = line.chars().take_while(|c| *c == '#').count();
    if depth == 0 {
        return None;
    }
    match line[depth..].chars().next() {
        None => Some(depth as u64),
        Some(c) if c.is_whitespace() => Some(depth as u64),
        _ => None,
    }
}

fn is_unchecked_item(line: &str) -> bool {
    line.starts_with("- [ ]") || line.starts_with("* [ ]")
}

fn is_checked_item(line: &str) -> bool {
    ["- [x]", "- [X]", "* [x]", "* [X]"]
        .iter()
        .any(|marker| line.starts_with(marker))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
