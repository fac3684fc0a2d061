//! Edge cases in snapshot header and body parsing

use crate::common::{sample_data, TestFixture};
use docsnap::snapshot::SnapshotParser;

#[test]
fn test_hand_edited_header_degrades_quietly() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_snapshot_file(
            "edited.md",
            &[
                "Version: 1.0.0",
                "- Word Count: about 300",
                "- Reading Time:3 minutes",
                "- TODOs: -2",
                "- Completion: 87%",
                "- Code Blocks: 2 blocks",
            ],
            &["body"],
        )
        .unwrap();

    let metrics = SnapshotParser::parse(&path).unwrap().metrics();
    assert_eq!(metrics.word_count, 0);
    assert_eq!(metrics.reading_time, 3);
    assert_eq!(metrics.todo_count, 0);
    assert!(!metrics.has_todos);
    assert_eq!(metrics.completion_percentage, 87.0);
    assert_eq!(metrics.code_blocks, 2);
    assert_eq!(metrics.section_count, 0);
}

#[test]
fn test_header_without_metrics() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_snapshot_file("bare.md", &["Version: 0.1"], &["only body"])
        .unwrap();

    let document = SnapshotParser::parse(&path).unwrap();
    assert_eq!(document.metadata.version, "0.1");
    assert_eq!(document.metrics().word_count, 0);
    assert_eq!(document.content_lines, vec!["only body"]);
}

#[test]
fn test_empty_header_is_allowed() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_markdown("empty-header.md", "---\nfirst\n").unwrap();

    let document = SnapshotParser::parse(&path).unwrap();
    assert_eq!(document.metadata.version, "");
    assert_eq!(document.content_lines, vec!["first"]);
}

#[test]
fn test_body_horizontal_rules_stay_in_body() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_snapshot_file("rules.md", &sample_data::full_header(), &["intro", "---", "outro"])
        .unwrap();

    let document = SnapshotParser::parse(&path).unwrap();
    assert_eq!(document.content_lines, vec!["intro", "---", "outro"]);
    assert_eq!(document.metrics().todo_count, 3);
}

#[test]
fn test_trailing_space_separator_is_not_a_boundary() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_markdown("spaced.md", "Version: 1\n--- \nbody\n").unwrap();

    let err = SnapshotParser::parse(&path).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_metric_values_with_trailing_words() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_snapshot_file(
            "suffixed.md",
            &["Version: 1.0.0", "- Completion: 87% done", "- Word Count: 12words"],
            &["body"],
        )
        .unwrap();

    let metrics = SnapshotParser::parse(&path).unwrap().metrics();
    assert_eq!(metrics.completion_percentage, 87.0);
    assert_eq!(metrics.word_count, 12);
}
