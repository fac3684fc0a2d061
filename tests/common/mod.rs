//! Common test utilities and helpers

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use docsnap::{Result, SnapshotStore};

/// Test fixture manager for creating temporary test environments
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub store: SnapshotStore,
}

impl TestFixture {
    /// Create a new test fixture with an initialized store
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let store = SnapshotStore::create_new(temp_dir.path().join("snapshots"))?;

        Ok(Self { temp_dir, store })
    }

    /// Get the root path of the test fixture
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a markdown file with raw content
    pub fn create_markdown(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create a snapshot document from a header and body lines
    pub fn create_snapshot_file(
        &self,
        name: &str,
        header: &[&str],
        body: &[&str],
    ) -> Result<PathBuf> {
        let mut content = header.join("\n");
        content.push_str("\n---\n");
        content.push_str(&body.join("\n"));
        content.push('\n');
        self.create_markdown(name, &content)
    }

    /// Create a file that is not a snapshot document
    pub fn create_corrupted_snapshot(&self, name: &str) -> Result<PathBuf> {
        self.create_markdown(name, "Version: 1.0.0\n- Word Count: 3\nno separator anywhere\n")
    }
}

/// Helper for running CLI commands in tests
pub struct CliTestRunner {
    fixture: TestFixture,
}

impl CliTestRunner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fixture: TestFixture::new()?,
        })
    }

    pub fn fixture(&self) -> &TestFixture {
        &self.fixture
    }

    /// Run a docsnap command and return the result
    pub fn run_command(&self, args: &[&str]) -> Result<()> {
        use clap::Parser;
        use docsnap::cli::Cli;
        use docsnap::commands::execute_command;

        let mut cmd_args = vec!["docsnap"];
        cmd_args.extend(args);

        let cli = Cli::try_parse_from(cmd_args)
            .map_err(|e| docsnap::DocsnapError::invalid_input(e.to_string()))?;

        // Default to the fixture store unless --store was given
        let store_path = cli.store.clone().unwrap_or_else(|| self.fixture.store.root.clone());
        execute_command(cli.command, Some(&store_path))
    }

    /// Run a command and expect it to succeed
    pub fn expect_success(&self, args: &[&str]) {
        self.run_command(args).expect("Command should succeed");
    }

    /// Run a command and expect it to fail
    pub fn expect_failure(&self, args: &[&str]) -> docsnap::DocsnapError {
        self.run_command(args).expect_err("Command should fail")
    }
}

/// Sample documents for testing
pub mod sample_data {
    pub fn release_notes_v1() -> &'static str {
        "# Release Notes\n\n## Changes\nFixed login bug\nAdd tests\n\n## Tasks\n- [ ] write the migration guide for users\n- [x] tag release\n"
    }

    pub fn release_notes_v2() -> &'static str {
        "# Release Notes\n\n## Changes\nFixed the login bug\nAdd tests\nUpdate docs\n\n## Tasks\n- [x] write the migration guide for users\n- [x] tag release\n\n```sh\ncargo install docsnap\n```\n"
    }

    pub fn full_header() -> Vec<&'static str> {
        vec![
            "# Snapshot: README.md",
            "Version: 1.0.0",
            "Created: 2026-04-01T10:00:00+00:00",
            "Updated: 2026-04-01T10:00:00+00:00",
            "",
            "## Health Metrics",
            "- Word Count: 100",
            "- Reading Time: 1 minutes",
            "- TODOs: 3",
            "- Completion: 25%",
            "- Sections: 4",
            "- Code Blocks: 1",
            "- Days Since Last Snapshot: 0",
        ]
    }
}

/// Assertion helpers for test validation
pub mod assertions {
    use std::path::Path;

    /// Assert that a file exists and is not empty
    pub fn assert_file_exists_and_not_empty(path: &Path) {
        assert!(path.exists(), "File should exist: {}", path.display());
        let metadata = std::fs::metadata(path).expect("Should be able to read file metadata");
        assert!(metadata.len() > 0, "File should not be empty: {}", path.display());
    }

    /// Assert that a file contains every expected fragment
    pub fn assert_file_contains(path: &Path, fragments: &[&str]) {
        let content = std::fs::read_to_string(path).expect("Should be able to read file");
        for fragment in fragments {
            assert!(
                content.contains(fragment),
                "File {} should contain {:?}:\n{}",
                path.display(),
                fragment,
                content
            );
        }
    }
}
