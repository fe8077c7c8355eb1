// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in postprocessors.
//!
//! * `mockup` - `mockup.out` into field `f`, no options
//! * `numpytxt` - whitespace-delimited text, one field per configured name
//! * `json` - flat JSON object, one field per member
//!
//! Each implements [`Postprocessor`](crate::traits::Postprocessor) for the
//! per-run work and [`PostprocessorKind`](crate::traits::PostprocessorKind)
//! for registration and config handling.

pub mod json;
pub mod mockup;
pub mod numpytxt;

pub use json::JsonPostprocessor;
pub use mockup::MockupPostprocessor;
pub use numpytxt::NumpytxtPostprocessor;

use std::path::Path;
use std::time::Instant;

use crate::data::{NumericArray, ResultContainer};
use crate::errors::PostprocessError;
use crate::observability::messages::{postprocess::*, StructuredLog};

/// Run `read` inside a postprocess span and commit its fields to `data`.
///
/// Fields are only inserted once `read` has fully succeeded, so a failed
/// invocation leaves the container untouched.
pub(crate) fn commit_fields<F>(
    label: &'static str,
    path: &Path,
    data: &mut ResultContainer,
    read: F,
) -> Result<(), PostprocessError>
where
    F: FnOnce() -> Result<Vec<(String, NumericArray)>, PostprocessError>,
{
    let start_msg = PostprocessStarted { label, path };
    let span = start_msg.span("postprocess");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();

    let fields = read().map_err(|error| {
        PostprocessFailed {
            label,
            error: &error,
        }
        .log();
        error
    })?;

    let field_count = fields.len();
    for (name, value) in fields {
        data.insert(name, value);
    }

    PostprocessCompleted {
        label,
        field_count,
        duration: start_time.elapsed(),
    }
    .log();

    Ok(())
}
