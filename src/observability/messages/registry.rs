// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the postprocessor registry.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A postprocessor was added to the registry.
///
/// # Log Level
/// `debug!` - Startup detail
pub struct PostprocessorRegistered<'a> {
    pub label: &'a str,
}

impl Display for PostprocessorRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registered postprocessor '{}'", self.label)
    }
}

impl StructuredLog for PostprocessorRegistered<'_> {
    fn log(&self) {
        tracing::debug!(label = self.label, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("registry", span_name = name, label = self.label)
    }
}

/// A second registration for an existing label was refused.
///
/// # Log Level
/// `warn!` - Likely a wiring mistake at startup
pub struct DuplicateRegistration<'a> {
    pub label: &'a str,
}

impl Display for DuplicateRegistration<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Postprocessor '{}' is already registered; keeping the existing implementation",
            self.label
        )
    }
}

impl StructuredLog for DuplicateRegistration<'_> {
    fn log(&self) {
        tracing::warn!(label = self.label, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("registry", span_name = name, label = self.label)
    }
}

/// A config asked for a label nobody registered.
///
/// # Log Level
/// `error!` - The run cannot be postprocessed
///
/// # Example
/// ```
/// use run_postprocessors::observability::messages::registry::UnknownPostprocessorRequested;
///
/// let msg = UnknownPostprocessorRequested { label: "hdf5" };
/// assert_eq!(msg.to_string(), "No postprocessor registered under 'hdf5'");
/// ```
pub struct UnknownPostprocessorRequested<'a> {
    pub label: &'a str,
}

impl Display for UnknownPostprocessorRequested<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No postprocessor registered under '{}'", self.label)
    }
}

impl StructuredLog for UnknownPostprocessorRequested<'_> {
    fn log(&self) {
        tracing::error!(label = self.label, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("registry", span_name = name, label = self.label)
    }
}

/// A postprocessor config section went through `handle_config`.
///
/// # Log Level
/// `debug!` - Config resolution detail
pub struct ConfigResolved<'a> {
    pub label: &'a str,
    pub option_count: usize,
}

impl Display for ConfigResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved config for postprocessor '{}': {} options",
            self.label, self.option_count
        )
    }
}

impl StructuredLog for ConfigResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            label = self.label,
            option_count = self.option_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config_resolution",
            span_name = name,
            label = self.label,
            option_count = self.option_count,
        )
    }
}
