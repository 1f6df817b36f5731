// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{TimeZone, Utc};
use xunit_reporter::{
    aggregator::XunitReporter,
    clock::FixedClock,
    config::XunitConfig,
    events::{RunEvent, SuiteDescriptor, TestDescriptor, TestError},
};
use xunit_xml::ReportSink;

pub(crate) static TIMESTAMP: &str = "Sun, 18 Oct 2026 09:05:03 GMT";

pub(crate) fn fixed_reporter<S: ReportSink>(sink: S) -> XunitReporter<S, FixedClock> {
    XunitReporter::with_clock(
        XunitConfig::new(),
        sink,
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 3).unwrap()),
    )
}

/// A run with a dropped root suite, a nested suite, each kind of outcome and an empty suite.
pub(crate) fn sample_run() -> Vec<RunEvent> {
    let root = SuiteDescriptor::root();
    let math = root.child("Math");
    let edge = math.child("edge cases");
    let empty = root.child("Empty");

    vec![
        RunEvent::SuiteStarted { suite: root },
        RunEvent::SuiteStarted {
            suite: math.clone(),
        },
        RunEvent::TestPassed {
            test: TestDescriptor::new("adds numbers", math.clone()).with_duration_ms(5),
        },
        RunEvent::TestFailed {
            test: TestDescriptor::new("subtracts", math).with_duration_ms(10),
            error: TestError::new(
                "Expected 2 got 3",
                "AssertionError: Expected 2 got 3\n    at Context.<anonymous> (test/math.js:9:12)",
            ),
        },
        RunEvent::SuiteStarted {
            suite: edge.clone(),
        },
        RunEvent::TestPending {
            test: TestDescriptor::new("todo later", edge.clone()),
        },
        RunEvent::TestPassed {
            test: TestDescriptor::new("handles <empty> & \"null\"", edge).with_duration_ms(1),
        },
        RunEvent::SuiteStarted { suite: empty },
        RunEvent::RunFinished {
            tests: 4,
            passes: 2,
            failures: 1,
            duration_ms: 20,
        },
    ]
}
