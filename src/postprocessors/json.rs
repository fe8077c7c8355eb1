// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use serde_json::{Map, Value};

use crate::config::consts::DEFAULT_OUTPUT_PATH;
use crate::config::{PostprocessorConfig, RunConfig};
use crate::data::text::read_text;
use crate::data::{NumericArray, ResultContainer};
use crate::errors::{ConfigError, ParseError, PostprocessError};
use crate::traits::{Postprocessor, PostprocessorKind};

use super::commit_fields;

const PATH: &str = "path";

/// JSON postprocessor - every member of a top-level object becomes a field.
///
/// Members may be a number (stored as a length-1 array), a list of numbers,
/// or a list of equal-length number lists (stored as a 2-D array).
pub struct JsonPostprocessor {
    run_dir: PathBuf,
    path: PathBuf,
}

impl JsonPostprocessor {
    pub fn new(run_dir: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            run_dir: run_dir.into(),
            path: path.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.run_dir.join(&self.path)
    }
}

impl Postprocessor for JsonPostprocessor {
    fn post(&self, data: &mut ResultContainer) -> Result<(), PostprocessError> {
        let path = self.output_path();
        commit_fields(self.label(), &path, data, || {
            let content = read_text(&path)?;
            parse_fields(&content).map_err(|source| PostprocessError::Parse {
                path: path.clone(),
                source,
            })
        })
    }

    fn label(&self) -> &'static str {
        Self::LABEL
    }
}

impl PostprocessorKind for JsonPostprocessor {
    const LABEL: &'static str = "json";

    fn handle_config(
        config: &mut PostprocessorConfig,
        _base_config: &RunConfig,
    ) -> Result<(), ConfigError> {
        if !config.contains(PATH) {
            config.set(PATH, DEFAULT_OUTPUT_PATH);
        }
        Ok(())
    }

    fn from_config(config: &PostprocessorConfig, run_dir: &Path) -> Result<Self, ConfigError> {
        let path = config.str_option(PATH)?.unwrap_or(DEFAULT_OUTPUT_PATH);
        Ok(Self::new(run_dir, path))
    }
}

fn parse_fields(content: &str) -> Result<Vec<(String, NumericArray)>, ParseError> {
    let object: Map<String, Value> = serde_json::from_str(content)?;
    object
        .iter()
        .map(|(key, value)| to_array(key, value).map(|array| (key.clone(), array)))
        .collect()
}

fn to_array(key: &str, value: &Value) -> Result<NumericArray, ParseError> {
    let unsupported = || ParseError::UnsupportedValue {
        key: key.to_string(),
    };

    match value {
        Value::Number(n) => {
            let x = n.as_f64().ok_or_else(unsupported)?;
            Ok(Array1::from_vec(vec![x]).into_dyn())
        }
        Value::Array(rows) if !rows.is_empty() && rows.iter().all(Value::is_array) => {
            let mut flat = Vec::new();
            let mut width = None;
            for row in rows {
                let values = row
                    .as_array()
                    .and_then(|items| numbers(items))
                    .ok_or_else(unsupported)?;
                match width {
                    None => width = Some(values.len()),
                    Some(w) if w != values.len() => return Err(unsupported()),
                    Some(_) => {}
                }
                flat.extend(values);
            }
            let width = width.unwrap_or_default();
            Ok(Array2::from_shape_vec((rows.len(), width), flat)?.into_dyn())
        }
        Value::Array(items) => Ok(Array1::from_vec(numbers(items).ok_or_else(unsupported)?).into_dyn()),
        _ => Err(unsupported()),
    }
}

fn numbers(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(Value::as_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};
    use std::fs;

    #[test]
    fn test_members_become_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("stdout"),
            r#"{"f": [1, 2.5], "g": 3, "h": [[1, 2], [3, 4]]}"#,
        )
        .unwrap();
        let mut data = ResultContainer::new();

        JsonPostprocessor::new(dir.path(), "stdout").post(&mut data).unwrap();

        assert_eq!(data.get("f"), Some(&arr1(&[1.0, 2.5]).into_dyn()));
        assert_eq!(data.get("g"), Some(&arr1(&[3.0]).into_dyn()));
        assert_eq!(data.get("h"), Some(&arr2(&[[1.0, 2.0], [3.0, 4.0]]).into_dyn()));
    }

    #[test]
    fn test_bad_member_rejects_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("out.json"), r#"{"f": [1, 2], "g": "text"}"#).unwrap();
        let mut data = ResultContainer::new();

        let err = JsonPostprocessor::new(dir.path(), "out.json")
            .post(&mut data)
            .unwrap_err();

        assert!(matches!(
            err,
            PostprocessError::Parse { source: ParseError::UnsupportedValue { ref key }, .. } if key == "g"
        ));
        assert!(data.is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("stdout"), b"{\"f\": [1, \xfe]}").unwrap();
        let mut data = ResultContainer::new();

        let err = JsonPostprocessor::new(dir.path(), "stdout")
            .post(&mut data)
            .unwrap_err();

        assert!(matches!(
            err,
            PostprocessError::Parse { source: ParseError::Encoding { .. }, .. }
        ));
        assert!(data.is_empty());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(matches!(
            to_array("h", &serde_json::json!([[1, 2], [3]])),
            Err(ParseError::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(parse_fields("{not json"), Err(ParseError::Json(_))));
        assert!(matches!(parse_fields("[1, 2]"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_handle_config_defaults_path() {
        let base: RunConfig = serde_yaml::from_str("postprocess: {class: json}").unwrap();
        let mut config = base.postprocess.clone();

        JsonPostprocessor::handle_config(&mut config, &base).unwrap();
        JsonPostprocessor::handle_config(&mut config, &base).unwrap();

        assert_eq!(config.str_option(PATH).unwrap(), Some("stdout"));
        assert_eq!(config.options.len(), 1);
    }
}
