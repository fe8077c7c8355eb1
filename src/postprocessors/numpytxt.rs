// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use ndarray::{arr1, Axis};
use serde_yaml::{Mapping, Value};

use crate::config::consts::{DEFAULT_COMMENT_MARKER, DEFAULT_OUTPUT_PATH};
use crate::config::{PostprocessorConfig, RunConfig};
use crate::data::{load_table, NumericArray, ResultContainer, TxtOptions, TxtTable};
use crate::errors::{ConfigError, PostprocessError};
use crate::traits::{Postprocessor, PostprocessorKind};

use super::commit_fields;

const PATH: &str = "path";
const NAMES: &str = "names";
const OPTIONS: &str = "options";
const COMMENTS: &str = "comments";
const SKIP_HEADER: &str = "skip_header";

/// Numeric text postprocessor.
///
/// Reads a whitespace-delimited file from the run directory and stores one
/// field per configured name:
/// * a single name receives the whole array
/// * K names over an `[M, K]` array receive one column each
/// * K names over a single row of K values receive one value each
///
/// # Config
/// ```yaml
/// postprocess:
///   class: numpytxt
///   path: stdout          # default
///   names: "f g"          # default: the run's output names
///   options:
///     comments: "#"
///     skip_header: 0
/// ```
pub struct NumpytxtPostprocessor {
    run_dir: PathBuf,
    path: PathBuf,
    names: Vec<String>,
    options: TxtOptions,
}

impl NumpytxtPostprocessor {
    pub fn new(run_dir: impl Into<PathBuf>, path: impl Into<PathBuf>, names: Vec<String>) -> Self {
        Self {
            run_dir: run_dir.into(),
            path: path.into(),
            names,
            options: TxtOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TxtOptions) -> Self {
        self.options = options;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.run_dir.join(&self.path)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Distribute the loaded table over the configured names. Splitting goes
    /// by the column layout of the file, so a single column is never spread
    /// across several names.
    fn split_fields(
        &self,
        path: &Path,
        table: TxtTable,
    ) -> Result<Vec<(String, NumericArray)>, PostprocessError> {
        let into_array = |table: TxtTable| {
            table.into_array().map_err(|source| PostprocessError::Parse {
                path: path.to_path_buf(),
                source,
            })
        };

        if let [name] = self.names.as_slice() {
            return Ok(vec![(name.clone(), into_array(table)?)]);
        }

        if table.columns != self.names.len() {
            return Err(PostprocessError::ShapeMismatch {
                shape: vec![table.rows, table.columns],
                names: self.names.clone(),
            });
        }

        if table.rows == 1 {
            return Ok(self
                .names
                .iter()
                .cloned()
                .zip(table.values().iter().map(|value| arr1(&[*value]).into_dyn()))
                .collect());
        }

        let raw = into_array(table)?;
        Ok(self
            .names
            .iter()
            .cloned()
            .zip(raw.axis_iter(Axis(1)).map(|column| column.to_owned()))
            .collect())
    }
}

impl Postprocessor for NumpytxtPostprocessor {
    fn post(&self, data: &mut ResultContainer) -> Result<(), PostprocessError> {
        let path = self.output_path();
        commit_fields(self.label(), &path, data, || {
            let table = load_table(&path, &self.options)?;
            self.split_fields(&path, table)
        })
    }

    fn label(&self) -> &'static str {
        Self::LABEL
    }
}

impl PostprocessorKind for NumpytxtPostprocessor {
    const LABEL: &'static str = "numpytxt";

    fn handle_config(
        config: &mut PostprocessorConfig,
        base_config: &RunConfig,
    ) -> Result<(), ConfigError> {
        if !config.contains(PATH) {
            config.set(PATH, DEFAULT_OUTPUT_PATH);
        }

        let names = match config.string_list_option(NAMES)? {
            Some(names) => names,
            None => base_config.output_names(),
        };
        config.set(NAMES, names);

        let mut options = config.mapping_option(OPTIONS)?.cloned().unwrap_or_default();
        if !options.contains_key(COMMENTS) {
            options.insert(Value::from(COMMENTS), Value::from(DEFAULT_COMMENT_MARKER));
        }
        if !options.contains_key(SKIP_HEADER) {
            options.insert(Value::from(SKIP_HEADER), Value::Number(0u64.into()));
        }
        config.set(OPTIONS, Value::Mapping(options));

        Ok(())
    }

    fn from_config(config: &PostprocessorConfig, run_dir: &Path) -> Result<Self, ConfigError> {
        let path = config.str_option(PATH)?.unwrap_or(DEFAULT_OUTPUT_PATH);
        let names = config.string_list_option(NAMES)?.unwrap_or_default();
        if names.is_empty() {
            return Err(crate::config::invalid(NAMES, "at least one field name is required"));
        }

        let options = match config.mapping_option(OPTIONS)? {
            Some(mapping) => txt_options(mapping)?,
            None => TxtOptions::default(),
        };

        Ok(Self::new(run_dir, path, names).with_options(options))
    }
}

fn txt_options(mapping: &Mapping) -> Result<TxtOptions, ConfigError> {
    let mut options = TxtOptions::default();

    if let Some(value) = mapping.get(COMMENTS) {
        options.comments = value
            .as_str()
            .ok_or_else(|| crate::config::invalid("options.comments", "expected a string"))?
            .to_string();
    }
    if let Some(value) = mapping.get(SKIP_HEADER) {
        options.skip_header = value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| crate::config::invalid("options.skip_header", "expected a non-negative integer"))?;
    }

    Ok(options)
}
