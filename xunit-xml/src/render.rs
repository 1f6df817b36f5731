// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render report fragments.

use crate::{
    RenderError, ReportSink, RunStatistics, SuiteRecord, TestOutcome, TestRecord, escape,
    format_seconds, format_timestamp,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use quick_xml::{
    Writer,
    events::{BytesCData, BytesEnd, BytesStart, Event, attributes::Attribute},
    name::QName,
};
use std::{borrow::Cow, io};

static TESTSUITES_TAG: &str = "testsuites";
static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static FAILURE_TAG: &str = "failure";
static SKIPPED_TAG: &str = "skipped";

/// Attribute values in the order they are written. Values are escaped when written.
type Attributes<'a> = IndexMap<&'static str, Cow<'a, str>>;

/// The values written on the root `<testsuites>` element.
#[derive(Clone, Copy, Debug)]
pub struct ReportHeader<'a> {
    /// The report title.
    pub name: &'a str,

    /// Run-wide totals from the test engine.
    pub stats: &'a RunStatistics,

    /// The time at which the report is rendered.
    pub timestamp: DateTime<Utc>,
}

/// Renders a complete report into `sink`, then flushes it.
///
/// Suites without tests are skipped. `suite_timestamp` is called once per rendered suite.
pub fn render_report<'a, S>(
    header: &ReportHeader<'_>,
    suites: impl IntoIterator<Item = &'a SuiteRecord>,
    mut suite_timestamp: impl FnMut() -> DateTime<Utc>,
    sink: &mut S,
) -> Result<(), RenderError>
where
    S: ReportSink + ?Sized,
{
    write_fragment(sink, &render_report_open(header)?)?;
    for suite in suites {
        if suite.is_empty() {
            continue;
        }
        render_suite(suite, suite_timestamp(), sink)?;
    }
    write_fragment(sink, &render_report_close()?)?;
    sink.flush().map_err(RenderError::Sink)
}

/// Renders the root open tag.
///
/// `skip` is `tests - failures - passes`, and `errors` repeats `failures`.
pub fn render_report_open(header: &ReportHeader<'_>) -> Result<String, RenderError> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let ReportHeader {
        name,
        stats,
        timestamp,
    } = header;

    let mut attrs = Attributes::from([
        ("name", Cow::Borrowed(*name)),
        ("tests", stats.tests.to_string().into()),
        ("failures", stats.failures.to_string().into()),
        ("errors", stats.failures.to_string().into()),
        ("skip", stats.skipped().to_string().into()),
        ("timestamp", format_timestamp(*timestamp).into()),
        ("time", format_seconds(stats.duration).into()),
    ]);

    let mut fragment = Fragment::new();
    fragment.start(TESTSUITES_TAG, &attrs)?;
    Ok(fragment.finish())
}

/// Renders the root close tag.
pub fn render_report_close() -> Result<String, RenderError> {
    let mut fragment = Fragment::new();
    fragment.end(TESTSUITES_TAG)?;
    Ok(fragment.finish())
}

/// Renders a suite into `sink`: the open tag, one fragment per test, then the close tag.
///
/// A suite with no recorded tests produces no output. `skip` is always written as `0`; pending
/// tests only show up as `<skipped/>` children.
pub fn render_suite<S>(
    suite: &SuiteRecord,
    timestamp: DateTime<Utc>,
    sink: &mut S,
) -> Result<(), RenderError>
where
    S: ReportSink + ?Sized,
{
    if suite.is_empty() {
        return Ok(());
    }

    let fails = suite.fails().to_string();
    let attrs = Attributes::from([
        ("name", Cow::Borrowed(suite.name())),
        ("tests", suite.tests().len().to_string().into()),
        ("failures", fails.as_str().into()),
        ("errors", fails.as_str().into()),
        ("skip", "0".into()),
        ("timestamp", format_timestamp(timestamp).into()),
        ("time", format_seconds(suite.total_time()).into()),
    ]);

    let mut open = Fragment::new();
    open.start(TESTSUITE_TAG, &attrs)?;
    write_fragment(sink, &open.finish())?;

    for test in suite.tests() {
        write_fragment(sink, &render_testcase(test)?)?;
    }

    let mut close = Fragment::new();
    close.end(TESTSUITE_TAG)?;
    write_fragment(sink, &close.finish())
}

/// Renders a single `<testcase>` element, including its `<failure>` or `<skipped/>` child.
pub fn render_testcase(test: &TestRecord) -> Result<String, RenderError> {
    let TestRecord {
        classname,
        title,
        duration,
        outcome,
    } = test;

    let mut attrs = Attributes::from([
        ("classname", Cow::Borrowed(classname.as_str())),
        ("name", title.as_str().into()),
        ("time", format_seconds(*duration).into()),
    ]);

    let mut fragment = Fragment::new();
    match outcome {
        TestOutcome::Passed => {
            fragment.empty(TESTCASE_TAG, &attrs)?;
        }
        TestOutcome::Failed { message, stack } => {
            // Both elements carry the message, after the shared attributes.
            attrs.insert("message", message.as_str().into());

            fragment.start(TESTCASE_TAG, &attrs)?;
            fragment.start(FAILURE_TAG, &attrs)?;
            fragment.cdata(FAILURE_TAG, stack)?;
            fragment.end(FAILURE_TAG)?;
            fragment.end(TESTCASE_TAG)?;
        }
        TestOutcome::Pending => {
            fragment.start(TESTCASE_TAG, &attrs)?;
            fragment.empty(SKIPPED_TAG, &Attributes::new())?;
            fragment.end(TESTCASE_TAG)?;
        }
    }

    Ok(fragment.finish())
}

fn write_fragment<S>(sink: &mut S, fragment: &str) -> Result<(), RenderError>
where
    S: ReportSink + ?Sized,
{
    sink.write_fragment(fragment).map_err(RenderError::Sink)
}

/// An in-memory XML writer for one fragment. Nesting is not tracked.
struct Fragment {
    writer: Writer<Vec<u8>>,
}

impl Fragment {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn start(&mut self, tag: &'static str, attrs: &Attributes<'_>) -> Result<(), RenderError> {
        self.write(tag, Event::Start(element(tag, attrs)))
    }

    fn empty(&mut self, tag: &'static str, attrs: &Attributes<'_>) -> Result<(), RenderError> {
        self.write(tag, Event::Empty(element(tag, attrs)))
    }

    fn end(&mut self, tag: &'static str) -> Result<(), RenderError> {
        self.write(tag, Event::End(BytesEnd::new(tag)))
    }

    fn cdata(&mut self, tag: &'static str, text: &str) -> Result<(), RenderError> {
        // Escaping removes every `>`, so the payload can never close the section early.
        self.write(tag, Event::CData(BytesCData::new(escape(text))))
    }

    fn write(&mut self, tag: &'static str, event: Event<'_>) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|error| RenderError::Xml {
                tag,
                error: io::Error::other(error.to_string()),
            })
    }

    fn finish(self) -> String {
        // Every input is a `&str`, so the buffer is always valid UTF-8.
        String::from_utf8_lossy(&self.writer.into_inner()).into_owned()
    }
}

fn element(tag: &'static str, attrs: &Attributes<'_>) -> BytesStart<'static> {
    let mut element = BytesStart::new(tag);
    for (key, value) in attrs {
        // Built directly so quick-xml doesn't apply its own escaping on top of ours.
        element.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: escaped_bytes(value),
        });
    }
    element
}

fn escaped_bytes(value: &str) -> Cow<'_, [u8]> {
    match escape(value) {
        Cow::Borrowed(value) => Cow::Borrowed(value.as_bytes()),
        Cow::Owned(value) => Cow::Owned(value.into_bytes()),
    }
}
