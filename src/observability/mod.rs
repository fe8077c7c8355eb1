// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational log line goes through a message type from
//! [`messages`]. Each message is a plain struct implementing `Display` for the
//! human-readable text and [`messages::StructuredLog`] for emitting it with
//! structured fields at the right level.
//!
//! # Usage
//!
//! ```rust
//! use run_postprocessors::observability::messages::{postprocess::PostprocessFailed, StructuredLog};
//!
//! let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
//! let msg = PostprocessFailed {
//!     label: "mockup",
//!     error: &error,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
