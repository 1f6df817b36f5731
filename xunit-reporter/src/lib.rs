// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Turns a stream of test-run events into an xUnit XML report.
//!
//! A test engine drives an [`XunitReporter`](aggregator::XunitReporter) with
//! [`RunEvent`](events::RunEvent)s: suite starts, then test passes, failures and pending tests,
//! then a single run-finished event carrying the engine's totals. Results are held in memory until
//! the run finishes, at which point the whole report is rendered to a
//! [`ReportSink`](xunit_xml::ReportSink) in one pass.
//!
//! Suites are tracked as a flat list: every test event is attributed to the most recently started
//! suite.

pub mod aggregator;
pub mod clock;
pub mod config;
pub mod errors;
pub mod events;
pub mod output;
pub mod replay;
