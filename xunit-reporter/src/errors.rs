// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by the xUnit reporter.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use thiserror::Error;
use xunit_xml::RenderError;

/// An error that occurred while handling a run event.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReporterError {
    /// A test event arrived before any suite started.
    ///
    /// This aborts the run: no report is written.
    #[error("received `{event}` for test `{test}` before any suite started")]
    NoActiveSuite {
        /// The kind of event that arrived.
        event: &'static str,

        /// The title of the test.
        test: String,
    },

    /// An event arrived after the report was written.
    #[error("received `{event}` after the run finished")]
    RunAlreadyFinished {
        /// The kind of event that arrived.
        event: &'static str,
    },

    /// An event arrived after an earlier error aborted the run.
    #[error("received `{event}` after the run was aborted")]
    RunAborted {
        /// The kind of event that arrived.
        event: &'static str,
    },

    /// Rendering the report or writing it to the sink failed.
    #[error("error writing xUnit report")]
    Render(#[from] RenderError),
}

/// An error that occurred while reading reporter configuration.
#[derive(Debug, Error)]
#[error("failed to parse xunit config at `{config_file}`")]
pub struct ConfigParseError {
    config_file: Utf8PathBuf,
    #[source]
    kind: ConfigParseErrorKind,
}

impl ConfigParseError {
    pub(crate) fn new(config_file: impl Into<Utf8PathBuf>, kind: ConfigParseErrorKind) -> Self {
        Self {
            config_file: config_file.into(),
            kind,
        }
    }

    /// Returns the config file that failed to parse.
    pub fn config_file(&self) -> &Utf8Path {
        &self.config_file
    }

    /// Returns the kind of error that occurred.
    pub fn kind(&self) -> &ConfigParseErrorKind {
        &self.kind
    }
}

/// The kind of error in a [`ConfigParseError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigParseErrorKind {
    /// The config file could not be read.
    #[error("error reading config file")]
    Read(#[source] io::Error),

    /// The config file is not valid TOML, or has values of the wrong type.
    #[error("error deserializing config file")]
    Deserialize(#[source] Box<toml::de::Error>),
}

/// An error that occurred while opening the report destination.
#[derive(Debug, Error)]
#[error("error opening report output at `{file}`")]
pub struct OutputOpenError {
    file: Utf8PathBuf,
    #[source]
    error: io::Error,
}

impl OutputOpenError {
    pub(crate) fn new(file: impl Into<Utf8PathBuf>, error: io::Error) -> Self {
        Self {
            file: file.into(),
            error,
        }
    }

    /// Returns the path that could not be opened.
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }
}

/// An error that occurred while replaying a recorded event stream.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReplayError {
    /// Reading from the event stream failed.
    #[error("error reading event stream")]
    Read(#[source] io::Error),

    /// A line could not be parsed as an event.
    #[error("line {line}: invalid event")]
    Parse {
        /// The 1-based line number.
        line: usize,

        /// The JSON error.
        #[source]
        error: serde_json::Error,
    },

    /// The reporter rejected an event.
    #[error("line {line}: error handling `{event}`")]
    Reporter {
        /// The 1-based line number.
        line: usize,

        /// The kind of event.
        event: &'static str,

        /// The reporter error.
        #[source]
        error: ReporterError,
    },

    /// The stream ended without a run-finished event, so no report was written.
    #[error("event stream ended before the run finished")]
    Truncated,
}
