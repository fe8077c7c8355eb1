// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `postprocess` - postprocessor execution (start, completion, failure, empty output)
//! * `registry` - registration, lookup and config resolution

use tracing::Span;

pub mod postprocess;
pub mod registry;

/// Emit a message as a structured tracing event, or open a span carrying its fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
