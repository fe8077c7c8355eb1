// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Whitespace-delimited numeric text reader.
//!
//! Shape rules:
//! * one data row of N values gives a 1-D array of length N
//! * M rows of a single value give a 1-D array of length M
//! * M rows of K values (K > 1) give a 2-D array `[M, K]`
//! * no data rows give an empty 1-D array
//!
//! Blank lines are skipped and anything after the comment marker is ignored.

use std::fs;
use std::path::Path;

use ndarray::{Array1, IxDyn};

use super::NumericArray;
use crate::config::consts::DEFAULT_COMMENT_MARKER;
use crate::errors::{ParseError, PostprocessError};
use crate::observability::messages::{postprocess::EmptyOutputFile, StructuredLog};

/// Knobs for [`parse_txt`] and [`load_txt`].
#[derive(Debug, Clone, PartialEq)]
pub struct TxtOptions {
    /// Comment marker; an empty string disables comment stripping.
    pub comments: String,
    /// Number of leading lines to drop before parsing.
    pub skip_header: usize,
}

impl Default for TxtOptions {
    fn default() -> Self {
        Self {
            comments: DEFAULT_COMMENT_MARKER.to_string(),
            skip_header: 0,
        }
    }
}

/// Values read from a numeric text file, with the row and column counts
/// they were laid out in.
///
/// An input without data rows has `rows == 0` and `columns == 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct TxtTable {
    pub rows: usize,
    pub columns: usize,
    values: Vec<f64>,
}

impl TxtTable {
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Collapse into an array: a single row, a single column or no data at
    /// all becomes 1-D, anything else `[rows, columns]`.
    pub fn into_array(self) -> Result<NumericArray, ParseError> {
        let flat = Array1::from_vec(self.values);
        let shape = if self.rows <= 1 || self.columns == 1 {
            vec![flat.len()]
        } else {
            vec![self.rows, self.columns]
        };
        Ok(flat.into_shape_with_order(IxDyn(&shape))?)
    }
}

/// Read and parse a numeric text file.
///
/// A missing file maps to [`PostprocessError::FileNotFound`], malformed
/// content (including invalid UTF-8) to [`PostprocessError::Parse`]. A file
/// without data gives an empty 1-D array and a warning.
pub fn load_txt(path: &Path, options: &TxtOptions) -> Result<NumericArray, PostprocessError> {
    load_table(path, options)?
        .into_array()
        .map_err(|source| parse_failure(path, source))
}

/// Like [`load_txt`] but keeps the row/column layout.
pub fn load_table(path: &Path, options: &TxtOptions) -> Result<TxtTable, PostprocessError> {
    let content = read_text(path)?;
    let table = parse_table(&content, options).map_err(|source| parse_failure(path, source))?;

    if table.is_empty() {
        EmptyOutputFile { path }.log();
    }
    Ok(table)
}

/// Read a whole output file as UTF-8 text.
pub(crate) fn read_text(path: &Path) -> Result<String, PostprocessError> {
    let bytes = fs::read(path).map_err(|e| PostprocessError::from_io(path.to_path_buf(), e))?;
    String::from_utf8(bytes).map_err(|e| {
        parse_failure(
            path,
            ParseError::Encoding {
                valid_up_to: e.utf8_error().valid_up_to(),
            },
        )
    })
}

fn parse_failure(path: &Path, source: ParseError) -> PostprocessError {
    PostprocessError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

/// Parse numeric text already held in memory.
pub fn parse_txt(content: &str, options: &TxtOptions) -> Result<NumericArray, ParseError> {
    parse_table(content, options)?.into_array()
}

/// Parse numeric text, keeping the row/column layout.
pub fn parse_table(content: &str, options: &TxtOptions) -> Result<TxtTable, ParseError> {
    let mut values = Vec::new();
    let mut columns: Option<usize> = None;
    let mut rows = 0usize;

    for (index, raw_line) in content.lines().enumerate().skip(options.skip_header) {
        let line_number = index + 1;
        let line = strip_comment(raw_line, &options.comments);

        let mut found = 0usize;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidNumber {
                line: line_number,
                token: token.to_string(),
            })?;
            values.push(value);
            found += 1;
        }

        if found == 0 {
            continue;
        }

        match columns {
            None => columns = Some(found),
            Some(expected) if expected != found => {
                return Err(ParseError::RowLength {
                    line: line_number,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    Ok(TxtTable {
        rows,
        columns: columns.unwrap_or(0),
        values,
    })
}

fn strip_comment<'a>(line: &'a str, marker: &str) -> &'a str {
    if marker.is_empty() {
        return line;
    }
    match line.find(marker) {
        Some(position) => &line[..position],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<NumericArray, ParseError> {
        parse_txt(content, &TxtOptions::default())
    }

    #[test]
    fn test_single_row_is_one_dimensional() {
        let array = parse("1.0 2.5 -3e2\n").unwrap();
        assert_eq!(array.shape(), &[3]);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.5, -300.0]);
    }

    #[test]
    fn test_single_column_is_one_dimensional() {
        let array = parse("1\n2\n3\n4\n").unwrap();
        assert_eq!(array.shape(), &[4]);
    }

    #[test]
    fn test_matrix_preserves_row_major_order() {
        let array = parse("1 2 3\n4 5 6\n").unwrap();
        assert_eq!(array.shape(), &[2, 3]);
        assert_eq!(array[[0, 2]], 3.0);
        assert_eq!(array[[1, 0]], 4.0);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let array = parse("# header\n\n1 2 # trailing\n   \n3 4\n").unwrap();
        assert_eq!(array.shape(), &[2, 2]);
        assert_eq!(array[[1, 1]], 4.0);
    }

    #[test]
    fn test_single_value_is_length_one() {
        let array = parse("  42\n").unwrap();
        assert_eq!(array.shape(), &[1]);
        assert_eq!(array[[0]], 42.0);
    }

    #[test]
    fn test_skip_header() {
        let options = TxtOptions {
            skip_header: 1,
            ..TxtOptions::default()
        };
        let array = parse_txt("time value\n0.0 1.0\n", &options).unwrap();
        assert_eq!(array.shape(), &[2]);
    }

    #[test]
    fn test_invalid_token_reports_line() {
        match parse("1 2\n3 abc\n") {
            Err(ParseError::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "abc");
            }
            other => panic!("Expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(matches!(
            parse("1 2 3\n4 5\n"),
            Err(ParseError::RowLength { line: 2, expected: 3, found: 2 })
        ));
    }

    #[test]
    fn test_empty_input_is_empty_array() {
        let array = parse("# nothing here\n\n").unwrap();
        assert_eq!(array.shape(), &[0]);
        assert_eq!(parse("").unwrap().len(), 0);
    }

    #[test]
    fn test_table_keeps_single_column_layout() {
        let table = parse_table("1\n2\n", &TxtOptions::default()).unwrap();
        assert_eq!((table.rows, table.columns), (2, 1));
        assert_eq!(table.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.out");
        std::fs::write(&path, "").unwrap();

        let array = load_txt(&path, &TxtOptions::default()).unwrap();
        assert_eq!(array.shape(), &[0]);
    }

    #[test]
    fn test_load_invalid_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.out");
        std::fs::write(&path, b"1.0 \xff 2.0\n").unwrap();

        let err = load_txt(&path, &TxtOptions::default()).unwrap_err();
        assert!(err.is_parse_error());
        assert!(matches!(
            err,
            PostprocessError::Parse { source: ParseError::Encoding { valid_up_to: 4 }, .. }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_txt(&dir.path().join("absent.out"), &TxtOptions::default()).unwrap_err();
        assert!(err.is_file_not_found());
    }
}
