// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::fixtures::*;
use color_eyre::eyre::{Result, bail, ensure};
use indoc::formatdoc;
use pretty_assertions::assert_eq;
use quick_xml::{Reader, events::Event};
use xunit_xml::LineSink;

#[test]
fn full_report() -> Result<()> {
    let mut reporter = fixed_reporter(LineSink::new(Vec::new()));
    for event in sample_run() {
        reporter.write_event(event)?;
    }
    let output = String::from_utf8(reporter.into_sink().into_inner())?;

    let expected = formatdoc! {r#"
        <testsuites name="Test Results" tests="4" failures="1" errors="1" skip="1" timestamp="{TIMESTAMP}" time="0.02">
        <testsuite name="Math" tests="2" failures="1" errors="1" skip="0" timestamp="{TIMESTAMP}" time="0.015">
        <testcase classname="Math" name="adds numbers" time="0.005"/>
        <testcase classname="Math" name="subtracts" time="0.01" message="Expected 2 got 3"><failure classname="Math" name="subtracts" time="0.01" message="Expected 2 got 3"><![CDATA[AssertionError: Expected 2 got 3
            at Context.&lt;anonymous&gt; (test/math.js:9:12)]]></failure></testcase>
        </testsuite>
        <testsuite name="Math edge cases" tests="2" failures="0" errors="0" skip="0" timestamp="{TIMESTAMP}" time="0.001">
        <testcase classname="Math edge cases" name="todo later" time="0"><skipped/></testcase>
        <testcase classname="Math edge cases" name="handles &lt;empty&gt; &amp; &quot;null&quot;" time="0.001"/>
        </testsuite>
        </testsuites>
    "#};
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn full_report_is_well_formed() -> Result<()> {
    let mut reporter = fixed_reporter(LineSink::new(Vec::new()));
    for event in sample_run() {
        reporter.write_event(event)?;
    }
    let output = String::from_utf8(reporter.into_sink().into_inner())?;

    let mut reader = Reader::from_str(&output);
    let mut depth = 0usize;
    let (mut suites, mut testcases, mut failures, mut skipped) = (0, 0, 0, 0);
    let mut names = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                match e.name().as_ref() {
                    b"testsuite" => suites += 1,
                    b"testcase" => testcases += 1,
                    b"failure" => failures += 1,
                    _ => {}
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"testcase" => {
                    testcases += 1;
                    for attr in e.attributes() {
                        let attr = attr?;
                        if attr.key.as_ref() == b"name" {
                            let raw = std::str::from_utf8(&attr.value)?;
                            names.push(quick_xml::escape::unescape(raw)?.into_owned());
                        }
                    }
                }
                b"skipped" => skipped += 1,
                other => bail!("unexpected empty element {:?}", String::from_utf8_lossy(other)),
            },
            Event::End(_) => {
                ensure!(depth > 0, "unbalanced end tag");
                depth -= 1;
            }
            Event::Decl(_) => bail!("no XML declaration is written"),
            Event::Eof => break,
            _ => {}
        }
    }

    ensure!(depth == 0, "document is not closed");
    assert_eq!((suites, testcases, failures, skipped), (2, 4, 1, 1));
    assert_eq!(names, ["adds numbers", "handles <empty> & \"null\""]);
    Ok(())
}

#[test]
fn run_without_suites() -> Result<()> {
    let mut reporter = fixed_reporter(Vec::new());
    reporter.write_event(xunit_reporter::events::RunEvent::RunFinished {
        tests: 2,
        passes: 0,
        failures: 0,
        duration_ms: 0,
    })?;

    assert_eq!(
        reporter.into_sink(),
        vec![
            format!(
                "<testsuites name=\"Test Results\" tests=\"2\" failures=\"0\" errors=\"0\" \
                 skip=\"2\" timestamp=\"{TIMESTAMP}\" time=\"0\">"
            ),
            "</testsuites>".to_owned(),
        ]
    );
    Ok(())
}
