//! Command implementations for docsnap CLI

use crate::change_detection::{ChangeDetector, MatchStrategy};
use crate::cli::{Commands, OutputFormat};
use crate::error::{DocsnapError, Result};
use crate::metrics::MetricsAnalyzer;
use crate::output::{JsonFormatter, PrettyPrinter, ReportFormatter};
use crate::snapshot::SnapshotParser;
use crate::store::{SnapshotStore, DEFAULT_STORE_DIR};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Execute a command
pub fn execute_command(command: Commands, store_path: Option<&Path>) -> Result<()> {
    let root = resolve_store_root(store_path)?;

    match command {
        Commands::Init { force } => init_command(root, force),
        Commands::Snapshot { input } => snapshot_command(root, &input),
        Commands::Diff {
            old,
            new,
            strategy,
            threshold,
            format,
            output,
        } => diff_command(
            root,
            &old,
            &new,
            strategy.as_deref(),
            threshold,
            &format,
            output.as_deref(),
        ),
        Commands::Show { snapshot, format } => show_command(&snapshot, &format),
        Commands::List { format } => list_command(root, &format),
    }
}

fn resolve_store_root(store_path: Option<&Path>) -> Result<PathBuf> {
    match store_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?.join(DEFAULT_STORE_DIR)),
    }
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::parse(format).map_err(DocsnapError::invalid_input)
}

/// Initialize the snapshot store
fn init_command(root: PathBuf, force: bool) -> Result<()> {
    let store = SnapshotStore::create_new(root)?;
    if force {
        store.create_config_with_force(true)?;
    }

    println!("✅ Initialized snapshot store at: {}", store.root.display());
    Ok(())
}

/// Capture a snapshot of a markdown file
fn snapshot_command(root: PathBuf, input: &Path) -> Result<()> {
    let store = SnapshotStore::create_new(root)?;
    let config = store.load_config()?;
    let analyzer = MetricsAnalyzer::new(config.words_per_minute);

    let path = store.create_snapshot(input, Utc::now(), &analyzer)?;
    println!("📸 Snapshot written to: {}", path.display());
    Ok(())
}

/// Compare two snapshot files
fn diff_command(
    root: PathBuf,
    old: &Path,
    new: &Path,
    strategy: Option<&str>,
    threshold: Option<f64>,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format = parse_format(format)?;
    let config = SnapshotStore::from_root(root).load_config()?;

    let mut options = config.diff_options();
    if let Some(strategy) = strategy {
        options.strategy = MatchStrategy::parse(strategy).map_err(DocsnapError::invalid_input)?;
    }
    if let Some(threshold) = threshold {
        crate::config::validate_threshold(threshold)?;
        options.similarity_threshold = threshold;
    }

    log::debug!(
        "Comparing {} -> {} (threshold {}, {:?} match)",
        old.display(),
        new.display(),
        options.similarity_threshold,
        options.strategy
    );

    let diff = ChangeDetector::compare_files(old, new, &options)?;
    let rendered = match format {
        OutputFormat::Pretty => ReportFormatter::format(&diff),
        OutputFormat::Json => JsonFormatter::format(&diff)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("💾 Diff report written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Show snapshot metadata
fn show_command(snapshot: &Path, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let document = SnapshotParser::parse(snapshot)?;

    match format {
        OutputFormat::Pretty => {
            let title = snapshot.display().to_string();
            PrettyPrinter::print_snapshot_metadata(&title, &document.metadata);
        }
        OutputFormat::Json => println!("{}", JsonFormatter::format(&document.metadata)?),
    }
    Ok(())
}

/// List snapshots in the store
fn list_command(root: PathBuf, format: &str) -> Result<()> {
    let format = parse_format(format)?;
    let entries = SnapshotStore::from_root(root).list_snapshots()?;

    match format {
        OutputFormat::Pretty => PrettyPrinter::print_snapshot_list(&entries),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&entries)?),
    }
    Ok(())
}
