//! Command-line interface for docsnap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsnap")]
#[command(about = "Living documentation snapshots with health metrics and diffs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override snapshot store location
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the snapshot store
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Capture a snapshot of a markdown document
    Snapshot {
        /// Markdown file to capture
        input: PathBuf,
    },

    /// Compare two snapshot files
    Diff {
        /// Older snapshot file
        old: PathBuf,

        /// Newer snapshot file
        new: PathBuf,

        /// Line matching strategy: "first" or "best" (defaults to store config)
        #[arg(long)]
        strategy: Option<String>,

        /// Similarity threshold in (0, 1] (defaults to store config)
        #[arg(long, value_parser = validate_threshold)]
        threshold: Option<f64>,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,

        /// Write the report to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show metadata recorded in a snapshot
    Show {
        /// Snapshot file to display
        snapshot: PathBuf,

        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// List snapshots in the store
    List {
        /// Output format: "pretty", "json"
        #[arg(long, default_value = "pretty")]
        format: String,
    },
}

/// Parse output format string
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {}. Use 'pretty' or 'json'", s)),
        }
    }
}

fn validate_threshold(s: &str) -> Result<f64, String> {
    let threshold: f64 = s
        .parse()
        .map_err(|_| format!("Invalid threshold: '{}'. Must be a number.", s))?;

    if !(threshold > 0.0 && threshold <= 1.0) {
        return Err("Threshold must be greater than 0 and at most 1".to_string());
    }

    Ok(threshold)
}
