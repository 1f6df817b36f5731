// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Events emitted by a test engine over the course of a run.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use xunit_xml::RunStatistics;

/// A suite, identified by its own title and the titles of its ancestors.
///
/// The first title belongs to the outermost suite. The root suite of a run usually has an empty
/// title.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SuiteDescriptor {
    titles: Vec<String>,
}

impl SuiteDescriptor {
    /// Creates a descriptor from a list of titles, outermost first.
    pub fn new(titles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// The untitled root suite.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a descriptor for a suite nested directly inside this one.
    pub fn child(&self, title: impl Into<String>) -> Self {
        let mut titles = self.titles.clone();
        titles.push(title.into());
        Self { titles }
    }

    /// This suite's own title, or `""` for the root suite.
    pub fn title(&self) -> &str {
        self.titles.last().map_or("", String::as_str)
    }

    /// The fully-qualified title: ancestor titles joined with `separator`.
    ///
    /// Leading empty titles (such as the root suite's) are not included.
    pub fn full_title(&self, separator: &str) -> String {
        self.titles.iter().fold(String::new(), |mut full, title| {
            if !full.is_empty() {
                full.push_str(separator);
            }
            full.push_str(title);
            full
        })
    }
}

/// A test that has finished running, or was marked pending.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestDescriptor {
    /// The test's own title.
    pub title: String,

    /// How long the test took, in milliseconds. Pending tests usually have none.
    #[serde(default)]
    pub duration_ms: Option<u64>,

    /// The suite that directly contains this test.
    pub parent: SuiteDescriptor,
}

impl TestDescriptor {
    /// Creates a new `TestDescriptor`.
    pub fn new(title: impl Into<String>, parent: SuiteDescriptor) -> Self {
        Self {
            title: title.into(),
            duration_ms: None,
            parent,
        }
    }

    /// Sets the elapsed time in milliseconds.
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// The elapsed time, or zero if none was reported.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.unwrap_or(0))
    }

    /// The fully-qualified title of the owning suite.
    pub fn classname(&self, separator: &str) -> String {
        self.parent.full_title(separator)
    }
}

/// The error a failed test produced.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TestError {
    /// The error message.
    #[serde(default)]
    pub message: Option<String>,

    /// The stack trace.
    #[serde(default)]
    pub stack: Option<String>,
}

impl TestError {
    /// Creates a new `TestError` with the given message and stack trace.
    pub fn new(message: impl Into<String>, stack: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            stack: Some(stack.into()),
        }
    }
}

/// A single notification from the test engine.
///
/// A run is expected to look like: suite started, then any number of test and suite events,
/// then exactly one run finished.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum RunEvent {
    /// A suite started.
    SuiteStarted {
        /// The suite.
        suite: SuiteDescriptor,
    },

    /// A test passed.
    TestPassed {
        /// The test.
        test: TestDescriptor,
    },

    /// A test failed.
    TestFailed {
        /// The test.
        test: TestDescriptor,

        /// What went wrong.
        #[serde(default)]
        error: TestError,
    },

    /// A test was skipped without running.
    TestPending {
        /// The test.
        test: TestDescriptor,
    },

    /// The run finished. Carries the engine's totals.
    RunFinished {
        /// Total number of tests.
        tests: u64,

        /// Number of passed tests.
        passes: u64,

        /// Number of failed tests.
        failures: u64,

        /// Wall-clock time for the run, in milliseconds.
        duration_ms: u64,
    },
}

impl RunEvent {
    /// Builds a run-finished event from a statistics snapshot.
    ///
    /// Durations too long to fit in `u64` milliseconds saturate.
    pub fn run_finished(stats: &RunStatistics) -> Self {
        RunEvent::RunFinished {
            tests: stats.tests,
            passes: stats.passes,
            failures: stats.failures,
            duration_ms: u64::try_from(stats.duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// A short name for the event, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            RunEvent::SuiteStarted { .. } => "suite-started",
            RunEvent::TestPassed { .. } => "test-passed",
            RunEvent::TestFailed { .. } => "test-failed",
            RunEvent::TestPending { .. } => "test-pending",
            RunEvent::RunFinished { .. } => "run-finished",
        }
    }
}
