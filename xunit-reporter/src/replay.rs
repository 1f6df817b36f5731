// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Replays a recorded event stream through a reporter.
//!
//! The stream is JSON lines: one [`RunEvent`] per line, blank lines ignored.
//!
//! ```text
//! {"event": "suite-started", "suite": {"titles": ["Math"]}}
//! {"event": "test-passed", "test": {"title": "adds", "duration-ms": 5, "parent": {"titles": ["Math"]}}}
//! {"event": "run-finished", "tests": 1, "passes": 1, "failures": 0, "duration-ms": 5}
//! ```

use crate::{aggregator::XunitReporter, clock::Clock, errors::ReplayError, events::RunEvent};
use std::io::BufRead;
use tracing::warn;
use xunit_xml::ReportSink;

/// Feeds every event in `reader` to `reporter`.
///
/// Stops at the first line that fails to parse or that the reporter rejects. If the stream ends
/// without a run-finished event, no report is written and [`ReplayError::Truncated`] is returned.
pub fn replay<S, C>(
    reader: impl BufRead,
    reporter: &mut XunitReporter<S, C>,
) -> Result<(), ReplayError>
where
    S: ReportSink,
    C: Clock,
{
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(ReplayError::Read)?;
        if line.trim().is_empty() {
            continue;
        }

        let event: RunEvent = serde_json::from_str(&line).map_err(|error| ReplayError::Parse {
            line: line_no,
            error,
        })?;
        let kind = event.kind();
        reporter
            .write_event(event)
            .map_err(|error| ReplayError::Reporter {
                line: line_no,
                event: kind,
                error,
            })?;
    }

    if reporter.is_finished() {
        Ok(())
    } else {
        warn!("event stream ended without a run-finished event; no report written");
        Err(ReplayError::Truncated)
    }
}
