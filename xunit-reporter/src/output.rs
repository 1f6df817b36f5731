// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destinations for the rendered report.

use crate::{config::XunitConfig, errors::OutputOpenError};
use camino::Utf8Path;
use std::{
    fs::File,
    io::{self, BufWriter},
};
use tracing::debug;
use xunit_xml::{LineSink, ReportSink};

/// Where the report is written: standard output or a file.
///
/// Each fragment is written on its own line.
#[derive(Debug)]
pub enum ReportOutput {
    /// Standard output.
    Stdout(LineSink<io::Stdout>),

    /// A file on disk.
    File(LineSink<BufWriter<File>>),
}

impl ReportOutput {
    /// Opens the output selected by `config`.
    pub fn open(config: &XunitConfig) -> Result<Self, OutputOpenError> {
        match config.output() {
            Some(path) => Self::create_file(path),
            None => Ok(Self::stdout()),
        }
    }

    /// Writes to standard output.
    pub fn stdout() -> Self {
        ReportOutput::Stdout(LineSink::new(io::stdout()))
    }

    /// Creates (or truncates) a file, creating parent directories as needed.
    pub fn create_file(path: &Utf8Path) -> Result<Self, OutputOpenError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|error| OutputOpenError::new(dir, error))?;
        }
        let f = File::create(path).map_err(|error| OutputOpenError::new(path, error))?;
        debug!("writing xunit report to {path}");
        Ok(ReportOutput::File(LineSink::new(BufWriter::new(f))))
    }
}

impl ReportSink for ReportOutput {
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        match self {
            ReportOutput::Stdout(sink) => sink.write_fragment(fragment),
            ReportOutput::File(sink) => sink.write_fragment(fragment),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ReportOutput::Stdout(sink) => sink.flush(),
            ReportOutput::File(sink) => sink.flush(),
        }
    }
}
