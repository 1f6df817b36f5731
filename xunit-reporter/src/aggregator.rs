// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregates run events into suite records, and writes the report once the run finishes.

use crate::{
    clock::{Clock, SystemClock},
    config::XunitConfig,
    errors::ReporterError,
    events::{RunEvent, SuiteDescriptor, TestDescriptor, TestError},
};
use std::time::Duration;
use tracing::{debug, trace, warn};
use xunit_xml::{
    ReportHeader, ReportSink, RunStatistics, SuiteRecord, TestOutcome, TestRecord, render_report,
};

/// Collects the results of a single run and renders them as xUnit XML.
///
/// Suites are kept as a flat list in start order. Every test event is attributed to the suite
/// that started most recently, even if the test belongs to an outer suite; the test's own
/// `classname` still comes from its parent suite.
///
/// Nothing is written until [`run_finished`](Self::run_finished), which renders the whole report
/// to the sink in one pass. A reporter handles exactly one run.
#[derive(Debug)]
pub struct XunitReporter<S, C = SystemClock> {
    config: XunitConfig,
    clock: C,
    sink: S,
    suites: Vec<SuiteRecord>,
    state: RunState,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RunState {
    Running,
    Finished,
    Aborted,
}

impl<S: ReportSink> XunitReporter<S> {
    /// Creates a reporter that timestamps the report with the system clock.
    pub fn new(config: XunitConfig, sink: S) -> Self {
        Self::with_clock(config, sink, SystemClock)
    }
}

impl<S: ReportSink, C: Clock> XunitReporter<S, C> {
    /// Creates a reporter with the given clock.
    pub fn with_clock(config: XunitConfig, sink: S, clock: C) -> Self {
        Self {
            config,
            clock,
            sink,
            suites: Vec::new(),
            state: RunState::Running,
        }
    }

    /// Handles an event from the test engine.
    pub fn write_event(&mut self, event: RunEvent) -> Result<(), ReporterError> {
        match event {
            RunEvent::SuiteStarted { suite } => self.suite_started(&suite),
            RunEvent::TestPassed { test } => self.test_passed(&test),
            RunEvent::TestFailed { test, error } => self.test_failed(&test, &error),
            RunEvent::TestPending { test } => self.test_pending(&test),
            RunEvent::RunFinished {
                tests,
                passes,
                failures,
                duration_ms,
            } => self.run_finished(&RunStatistics {
                tests,
                passes,
                failures,
                duration: Duration::from_millis(duration_ms),
            }),
        }
    }

    /// Starts a new suite. Later test events are attributed to it.
    pub fn suite_started(&mut self, suite: &SuiteDescriptor) -> Result<(), ReporterError> {
        self.check_running("suite-started")?;

        let name = suite.full_title(self.config.title_separator());
        debug!("suite started: `{name}`");
        self.suites.push(SuiteRecord::new(name));
        Ok(())
    }

    /// Records a passed test in the current suite.
    pub fn test_passed(&mut self, test: &TestDescriptor) -> Result<(), ReporterError> {
        self.record_test("test-passed", test, TestOutcome::Passed)
    }

    /// Records a failed test in the current suite. Missing error text is recorded as empty.
    pub fn test_failed(
        &mut self,
        test: &TestDescriptor,
        error: &TestError,
    ) -> Result<(), ReporterError> {
        let outcome = TestOutcome::failed(error.message.as_deref(), error.stack.as_deref());
        self.record_test("test-failed", test, outcome)
    }

    /// Records a pending test in the current suite. Pass and fail counts are unchanged.
    pub fn test_pending(&mut self, test: &TestDescriptor) -> Result<(), ReporterError> {
        self.record_test("test-pending", test, TestOutcome::Pending)
    }

    /// Writes the report to the sink, using the engine's totals for the root element.
    ///
    /// Suites that recorded no tests are left out. Later events are rejected.
    pub fn run_finished(&mut self, stats: &RunStatistics) -> Result<(), ReporterError> {
        self.check_running("run-finished")?;
        self.state = RunState::Finished;

        let header = ReportHeader {
            name: self.config.report_name(),
            stats,
            timestamp: self.clock.now(),
        };
        let clock = &self.clock;
        render_report(&header, &self.suites, || clock.now(), &mut self.sink)?;

        debug!(
            "wrote xunit report: {} suites started, {} tests recorded",
            self.suites.len(),
            self.suites.iter().map(|suite| suite.tests().len()).sum::<usize>(),
        );
        Ok(())
    }

    /// The suites started so far, in start order.
    pub fn suites(&self) -> &[SuiteRecord] {
        &self.suites
    }

    /// Returns true once the report has been written.
    pub fn is_finished(&self) -> bool {
        self.state == RunState::Finished
    }

    /// Returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn record_test(
        &mut self,
        event: &'static str,
        test: &TestDescriptor,
        outcome: TestOutcome,
    ) -> Result<(), ReporterError> {
        self.check_running(event)?;

        let Some(suite) = self.suites.last_mut() else {
            warn!(
                "aborting run: `{event}` for test `{}` arrived before any suite started",
                test.title,
            );
            self.state = RunState::Aborted;
            return Err(ReporterError::NoActiveSuite {
                event,
                test: test.title.clone(),
            });
        };

        let record = TestRecord::new(
            test.classname(self.config.title_separator()),
            test.title.as_str(),
            test.duration(),
            outcome,
        );
        trace!("{event}: `{}` in suite `{}`", record.title, suite.name());
        suite.add_test(record);
        Ok(())
    }

    fn check_running(&self, event: &'static str) -> Result<(), ReporterError> {
        match self.state {
            RunState::Running => Ok(()),
            RunState::Finished => Err(ReporterError::RunAlreadyFinished { event }),
            RunState::Aborted => Err(ReporterError::RunAborted { event }),
        }
    }
}
