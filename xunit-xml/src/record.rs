// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

/// Run-wide totals reported by the test engine once the run has ended.
///
/// These are taken as-is: they are not reconciled against the per-suite counts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStatistics {
    /// The total number of tests the engine ran.
    pub tests: u64,

    /// The number of tests that passed.
    pub passes: u64,

    /// The number of tests that failed.
    pub failures: u64,

    /// Wall-clock time for the whole run.
    pub duration: Duration,
}

impl RunStatistics {
    /// The number of tests neither passed nor failed: `tests - failures - passes`.
    ///
    /// May be negative if the engine's totals disagree with each other.
    pub fn skipped(&self) -> i128 {
        i128::from(self.tests) - i128::from(self.failures) - i128::from(self.passes)
    }
}

/// The results recorded for one started suite.
#[derive(Clone, Debug)]
pub struct SuiteRecord {
    name: String,
    tests: Vec<TestRecord>,
    passes: usize,
    fails: usize,
    skipped: usize,
}

impl SuiteRecord {
    /// Creates an empty record for the suite with the given fully-qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: vec![],
            passes: 0,
            fails: 0,
            skipped: 0,
        }
    }

    /// Appends a test and bumps the counter matching its outcome.
    pub fn add_test(&mut self, test: TestRecord) -> &mut Self {
        match &test.outcome {
            TestOutcome::Passed => self.passes += 1,
            TestOutcome::Failed { .. } => self.fails += 1,
            TestOutcome::Pending => self.skipped += 1,
        }
        self.tests.push(test);
        self
    }

    /// The fully-qualified suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded tests, in the order they were added.
    pub fn tests(&self) -> &[TestRecord] {
        &self.tests
    }

    /// The number of passed tests.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// The number of failed tests.
    pub fn fails(&self) -> usize {
        self.fails
    }

    /// The number of pending tests.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Returns true if no tests were recorded.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// The sum of the durations of all recorded tests.
    pub fn total_time(&self) -> Duration {
        self.tests.iter().map(|test| test.duration).sum()
    }
}

/// A single test result.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestRecord {
    /// The fully-qualified name of the suite that owns this test.
    pub classname: String,

    /// The test's own title.
    pub title: String,

    /// How long the test took. Zero for pending tests.
    pub duration: Duration,

    /// How the test ended.
    pub outcome: TestOutcome,
}

impl TestRecord {
    /// Creates a new `TestRecord`.
    pub fn new(
        classname: impl Into<String>,
        title: impl Into<String>,
        duration: Duration,
        outcome: TestOutcome,
    ) -> Self {
        Self {
            classname: classname.into(),
            title: title.into(),
            duration,
            outcome,
        }
    }
}

/// The terminal outcome of a test.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestOutcome {
    /// The test passed.
    Passed,

    /// The test failed.
    Failed {
        /// The error message. Empty if the engine supplied none.
        message: String,

        /// The stack trace. Empty if the engine supplied none.
        stack: String,
    },

    /// The test was pending or skipped.
    Pending,
}

impl TestOutcome {
    /// Creates a failed outcome, treating absent text as empty.
    pub fn failed(message: Option<&str>, stack: Option<&str>) -> Self {
        TestOutcome::Failed {
            message: message.unwrap_or_default().to_owned(),
            stack: stack.unwrap_or_default().to_owned(),
        }
    }
}
