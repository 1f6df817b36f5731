// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io;

/// A destination for rendered report fragments.
///
/// Fragments arrive in document order: the root open tag, then the tags of each suite, then the
/// root close tag. Whether fragments are separated by newlines is up to the sink.
pub trait ReportSink {
    /// Writes a single fragment.
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()>;

    /// Flushes any buffered output. Called once, after the last fragment.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        (**self).write_fragment(fragment)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Collects fragments in memory.
impl ReportSink for Vec<String> {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.push(fragment.to_owned());
        Ok(())
    }
}

/// Writes each fragment on its own line, the way a console logger would.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
}

impl<W: io::Write> LineSink<W> {
    /// Creates a new `LineSink` around the given writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> ReportSink for LineSink<W> {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.writer.write_all(fragment.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
