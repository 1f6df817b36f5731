// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reporter configuration.
//!
//! Configuration is read from the `[xunit]` table of a TOML file:
//!
//! ```toml
//! [xunit]
//! report-name = "Test Results"
//! title-separator = " "
//! output = "target/xunit.xml"
//! ```
//!
//! Every key is optional. Unknown keys are logged and otherwise ignored.

use crate::errors::{ConfigParseError, ConfigParseErrorKind};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::warn;

static DEFAULT_REPORT_NAME: &str = "Test Results";
static DEFAULT_TITLE_SEPARATOR: &str = " ";

/// Settings for an [`XunitReporter`](crate::aggregator::XunitReporter).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XunitConfig {
    report_name: String,
    title_separator: String,
    output: Option<Utf8PathBuf>,
}

impl Default for XunitConfig {
    fn default() -> Self {
        Self {
            report_name: DEFAULT_REPORT_NAME.to_owned(),
            title_separator: DEFAULT_TITLE_SEPARATOR.to_owned(),
            output: None,
        }
    }
}

impl XunitConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads configuration from a TOML file.
    pub fn from_path(config_file: &Utf8Path) -> Result<Self, ConfigParseError> {
        let toml_str = std::fs::read_to_string(config_file).map_err(|error| {
            ConfigParseError::new(config_file, ConfigParseErrorKind::Read(error))
        })?;
        Self::parse(config_file, &toml_str)
    }

    /// Parses configuration from TOML text. `config_file` is only used in diagnostics.
    pub fn parse(config_file: &Utf8Path, toml_str: &str) -> Result<Self, ConfigParseError> {
        let deserialize_error = |error: toml::de::Error| {
            ConfigParseError::new(
                config_file,
                ConfigParseErrorKind::Deserialize(Box::new(error)),
            )
        };

        let toml_de = toml::de::Deserializer::parse(toml_str).map_err(deserialize_error)?;
        let mut ignored = BTreeSet::new();
        let data: ConfigFileImpl =
            serde_ignored::deserialize(toml_de, |path: serde_ignored::Path| {
                ignored.insert(path.to_string());
            })
            .map_err(deserialize_error)?;

        for path in &ignored {
            warn!("ignoring unknown configuration key `{path}` in {config_file}");
        }

        let mut config = Self::default();
        let XunitImpl {
            report_name,
            title_separator,
            output,
        } = data.xunit;
        if let Some(report_name) = report_name {
            config.set_report_name(report_name);
        }
        if let Some(title_separator) = title_separator {
            config.set_title_separator(title_separator);
        }
        if let Some(output) = output {
            config.set_output(output);
        }
        Ok(config)
    }

    /// Sets the name written on the root `<testsuites>` element.
    pub fn set_report_name(&mut self, report_name: impl Into<String>) -> &mut Self {
        self.report_name = report_name.into();
        self
    }

    /// Sets the separator placed between nested suite titles.
    pub fn set_title_separator(&mut self, title_separator: impl Into<String>) -> &mut Self {
        self.title_separator = title_separator.into();
        self
    }

    /// Sets a file to write the report to, instead of standard output.
    pub fn set_output(&mut self, output: impl Into<Utf8PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    /// Returns the name written on the root `<testsuites>` element.
    pub fn report_name(&self) -> &str {
        &self.report_name
    }

    /// Returns the separator placed between nested suite titles.
    pub fn title_separator(&self) -> &str {
        &self.title_separator
    }

    /// Returns the output file, or `None` for standard output.
    pub fn output(&self) -> Option<&Utf8Path> {
        self.output.as_deref()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFileImpl {
    #[serde(default)]
    xunit: XunitImpl,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct XunitImpl {
    #[serde(default)]
    report_name: Option<String>,
    #[serde(default)]
    title_separator: Option<String>,
    #[serde(default)]
    output: Option<Utf8PathBuf>,
}
