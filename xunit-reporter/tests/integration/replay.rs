// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use color_eyre::eyre::Result;
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use xunit_reporter::{
    errors::{ReplayError, ReporterError},
    replay::replay,
};

#[test]
fn replay_matches_direct_events() -> Result<()> {
    let mut direct = fixed_reporter(Vec::new());
    let mut lines = String::new();
    for event in sample_run() {
        lines.push_str(&serde_json::to_string(&event)?);
        lines.push('\n');
        // Blank lines are skipped.
        lines.push('\n');
        direct.write_event(event)?;
    }

    let mut replayed = fixed_reporter(Vec::new());
    replay(Cursor::new(lines), &mut replayed)?;

    assert!(replayed.is_finished());
    assert_eq!(replayed.into_sink(), direct.into_sink());
    Ok(())
}

#[test]
fn replay_hand_written_stream() -> Result<()> {
    let input = indoc! {r#"
        {"event": "suite-started", "suite": {"titles": ["Math"]}}
        {"event": "test-passed", "test": {"title": "adds numbers", "duration-ms": 5, "parent": {"titles": ["Math"]}}}
        {"event": "run-finished", "tests": 1, "passes": 1, "failures": 0, "duration-ms": 5}
    "#};

    let mut reporter = fixed_reporter(Vec::new());
    replay(Cursor::new(input), &mut reporter)?;

    let sink = reporter.into_sink();
    assert_eq!(
        sink[2],
        r#"<testcase classname="Math" name="adds numbers" time="0.005"/>"#
    );
    Ok(())
}

#[test]
fn replay_reports_bad_line() {
    let input = indoc! {r#"
        {"event": "suite-started", "suite": {"titles": ["Math"]}}
        {"event": "test-exploded"}
    "#};

    let mut reporter = fixed_reporter(Vec::new());
    let err = replay(Cursor::new(input), &mut reporter).unwrap_err();
    assert!(matches!(err, ReplayError::Parse { line: 2, .. }), "{err:?}");
    assert!(reporter.into_sink().is_empty());
}

#[test]
fn replay_rejects_invalid_utf8() {
    let mut input = br#"{"event": "suite-started", "suite": {"titles": ["Math"]}}"#.to_vec();
    input.extend_from_slice(b"\n{\"event\": \"suite-started\", \"suite\": {\"titles\": [\"\xff\"]}}\n");

    let mut reporter = fixed_reporter(Vec::new());
    let err = replay(Cursor::new(input), &mut reporter).unwrap_err();
    assert!(matches!(err, ReplayError::Read(_)), "{err:?}");
    assert_eq!(reporter.suites().len(), 1);
    assert!(reporter.into_sink().is_empty());
}

#[test]
fn replay_reports_orphan_test() {
    let input = indoc! {r#"
        {"event": "test-failed", "test": {"title": "orphan", "parent": {"titles": []}}}
        {"event": "run-finished", "tests": 1, "passes": 0, "failures": 1, "duration-ms": 0}
    "#};

    let mut reporter = fixed_reporter(Vec::new());
    let err = replay(Cursor::new(input), &mut reporter).unwrap_err();
    assert!(
        matches!(
            err,
            ReplayError::Reporter {
                line: 1,
                event: "test-failed",
                error: ReporterError::NoActiveSuite { .. },
            }
        ),
        "{err:?}"
    );
    assert!(reporter.into_sink().is_empty(), "no document is written");
}

#[test]
fn replay_without_run_finished() {
    let input = r#"{"event": "suite-started", "suite": {"titles": ["Math"]}}"#;

    let mut reporter = fixed_reporter(Vec::new());
    let err = replay(Cursor::new(input), &mut reporter).unwrap_err();
    assert!(matches!(err, ReplayError::Truncated), "{err:?}");
    assert!(reporter.into_sink().is_empty());
}
