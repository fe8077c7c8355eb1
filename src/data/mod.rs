// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Result data shared between the run host and its postprocessors.
//!
//! * [`ResultContainer`] - field name to numeric array mapping filled during postprocessing
//! * [`text`] - reader for whitespace-delimited numeric output files

mod container;
pub mod text;

pub use container::ResultContainer;
pub use text::{load_table, load_txt, parse_table, parse_txt, TxtOptions, TxtTable};

/// Numeric array as produced by a run: 1-D or 2-D, shape taken from the source.
pub type NumericArray = ndarray::ArrayD<f64>;
