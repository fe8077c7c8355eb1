// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for postprocessor execution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Postprocessing of a run output file started.
///
/// # Log Level
/// `debug!` - One per run, noisy for large batches
///
/// # Example
/// ```
/// use run_postprocessors::observability::messages::postprocess::PostprocessStarted;
/// use std::path::Path;
///
/// let msg = PostprocessStarted {
///     label: "mockup",
///     path: Path::new("run_0/mockup.out"),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PostprocessStarted<'a> {
    pub label: &'a str,
    pub path: &'a Path,
}

impl Display for PostprocessStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Postprocessor '{}' reading {}",
            self.label,
            self.path.display()
        )
    }
}

impl StructuredLog for PostprocessStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            label = self.label,
            path = %self.path.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "postprocess",
            span_name = name,
            label = self.label,
            path = %self.path.display(),
        )
    }
}

/// Postprocessing completed and the container was updated.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use run_postprocessors::observability::messages::postprocess::PostprocessCompleted;
/// use std::time::Duration;
///
/// let msg = PostprocessCompleted {
///     label: "mockup",
///     field_count: 1,
///     duration: Duration::from_millis(3),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PostprocessCompleted<'a> {
    pub label: &'a str,
    pub field_count: usize,
    pub duration: std::time::Duration,
}

impl Display for PostprocessCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Postprocessor '{}' completed: fields={}, duration={:?}",
            self.label, self.field_count, self.duration
        )
    }
}

impl StructuredLog for PostprocessCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            label = self.label,
            field_count = self.field_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "postprocess_completed",
            span_name = name,
            label = self.label,
            field_count = self.field_count,
            duration = ?self.duration,
        )
    }
}

/// Postprocessing failed; the error is handed back to the caller unchanged.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct PostprocessFailed<'a> {
    pub label: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for PostprocessFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Postprocessor '{}' failed: {}", self.label, self.error)
    }
}

impl StructuredLog for PostprocessFailed<'_> {
    fn log(&self) {
        tracing::error!(
            label = self.label,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "postprocess_failed",
            span_name = name,
            label = self.label,
            error = %self.error,
        )
    }
}

/// The output file held no numeric data; an empty array is stored.
///
/// # Log Level
/// `warn!` - The run most likely produced nothing useful
///
/// # Example
/// ```
/// use run_postprocessors::observability::messages::postprocess::EmptyOutputFile;
/// use std::path::Path;
///
/// let msg = EmptyOutputFile { path: Path::new("run_0/mockup.out") };
/// assert_eq!(msg.to_string(), "Output file run_0/mockup.out contained no data");
/// ```
pub struct EmptyOutputFile<'a> {
    pub path: &'a Path,
}

impl Display for EmptyOutputFile<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Output file {} contained no data", self.path.display())
    }
}

impl StructuredLog for EmptyOutputFile<'_> {
    fn log(&self) {
        tracing::warn!(path = %self.path.display(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "empty_output",
            span_name = name,
            path = %self.path.display(),
        )
    }
}
