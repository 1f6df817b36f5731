// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io;
use thiserror::Error;

/// An error that occurs while rendering a report fragment.
///
/// Returned by the `render_*` functions in this crate.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The XML writer failed to produce a fragment.
    #[error("error building `<{tag}>` element")]
    Xml {
        /// The element being written.
        tag: &'static str,

        /// The underlying writer error.
        #[source]
        error: io::Error,
    },

    /// The sink rejected a rendered fragment.
    #[error("error writing report fragment to sink")]
    Sink(#[source] io::Error),
}
