// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Render xUnit XML reports from recorded test results.
//!
//! The output is the flat, declaration-free xUnit dialect understood by most CI systems: a
//! `<testsuites>` root, one `<testsuite>` per suite that recorded at least one test, and a
//! `<testcase>` per test with an optional `<failure>` or `<skipped/>` child.
//!
//! Rendering is split into fragments (the root open tag, each suite, the root close tag) that
//! are handed to a [`ReportSink`] one at a time.

mod errors;
mod escape;
mod record;
mod render;
mod sink;
mod time;

pub use errors::*;
pub use escape::*;
pub use record::*;
pub use render::*;
pub use sink::*;
pub use time::*;
