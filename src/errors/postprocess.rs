// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while turning raw run output into result data.
//!
//! Postprocessors never swallow these; they propagate to whatever drives the run.

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single `post` invocation.
#[derive(Error, Debug)]
pub enum PostprocessError {
    /// The expected output file does not exist in the run directory.
    #[error("Output file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The output file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file content is not valid numeric data.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// Parsed data does not line up with the configured field names.
    #[error("Cannot split array of shape {shape:?} into fields {names:?}")]
    ShapeMismatch { shape: Vec<usize>, names: Vec<String> },
}

impl PostprocessError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            PostprocessError::FileNotFound { path }
        } else {
            PostprocessError::Io { path, source }
        }
    }

    /// True when the output file was missing entirely.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, PostprocessError::FileNotFound { .. })
    }

    /// True when the output file was present but malformed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, PostprocessError::Parse { .. })
    }
}

/// Why the content of an output file was rejected.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: expected {expected} columns, found {found}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("not valid UTF-8 text (valid up to byte {valid_up_to})")]
    Encoding { valid_up_to: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("inconsistent array shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("value of '{key}' is not a number, a list of numbers or a list of equal-length rows")]
    UnsupportedValue { key: String },
}
