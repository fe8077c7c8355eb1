// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::PostprocessorRegistry;
use crate::errors::{ConfigError, RegistryError};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Run-level configuration, the `base_config` handed to postprocessors.
///
/// Only the parts postprocessing cares about are modelled; the rest of a run
/// description is ignored when deserializing.
///
/// # Fields
/// * `output` - declared output fields, in declaration order
/// * `postprocess` - which postprocessor to use and its options
///
/// # Example
/// ```yaml
/// output:
///   f: {size: [1, 100]}
/// postprocess:
///   class: mockup
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RunConfig {
    #[serde(default)]
    pub output: Mapping,
    pub postprocess: PostprocessorConfig,
}

impl RunConfig {
    /// Names of the declared output fields, in declaration order.
    pub fn output_names(&self) -> Vec<String> {
        self.output
            .keys()
            .filter_map(|key| key.as_str().map(str::to_string))
            .collect()
    }
}

/// Configuration section for one postprocessor.
///
/// `class` selects the registered implementation; every other key is kept as a
/// free-form option for that implementation to interpret.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PostprocessorConfig {
    pub class: String,
    #[serde(flatten)]
    pub options: BTreeMap<String, Value>,
}

impl PostprocessorConfig {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn get(&self, option: &str) -> Option<&Value> {
        self.options.get(option)
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.contains_key(option)
    }

    pub fn set(&mut self, option: &str, value: impl Into<Value>) {
        self.options.insert(option.to_string(), value.into());
    }

    /// String option; present-but-not-a-string is an error.
    pub fn str_option(&self, option: &str) -> Result<Option<&str>, ConfigError> {
        match self.options.get(option) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(invalid(option, "expected a string")),
        }
    }

    /// List of strings, given either as a YAML sequence or as one
    /// whitespace-separated string.
    pub fn string_list_option(&self, option: &str) -> Result<Option<Vec<String>>, ConfigError> {
        match self.options.get(option) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.split_whitespace().map(str::to_string).collect())),
            Some(Value::Sequence(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(|s| s.trim().to_string())
                        .ok_or_else(|| invalid(option, "expected a list of strings"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(invalid(option, "expected a list of strings")),
        }
    }

    pub fn mapping_option(&self, option: &str) -> Result<Option<&Mapping>, ConfigError> {
        match self.options.get(option) {
            None => Ok(None),
            Some(Value::Mapping(m)) => Ok(Some(m)),
            Some(_) => Err(invalid(option, "expected a mapping")),
        }
    }
}

pub(crate) fn invalid(option: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidOption {
        option: option.to_string(),
        reason: reason.to_string(),
    }
}

/// Load a run config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: RunConfig = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load a run config and let its postprocessor fill in defaults.
///
/// Fails if the configured class is not registered or rejects its options.
pub fn load_and_resolve_config<P: AsRef<Path>>(
    path: P,
    registry: &PostprocessorRegistry,
) -> Result<RunConfig, RegistryError> {
    let mut cfg = load_config(path)?;
    registry.resolve(&mut cfg)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
ntrain: 10
output:
  f: {size: [1, 100]}
  g: {}
postprocess:
  class: numpytxt
  path: result.txt
  names: "f g"
"#;

        let cfg: RunConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.output_names(), vec!["f", "g"]);
        assert_eq!(cfg.postprocess.class, "numpytxt");
        assert_eq!(cfg.postprocess.str_option("path").unwrap(), Some("result.txt"));
        assert_eq!(
            cfg.postprocess.string_list_option("names").unwrap(),
            Some(vec!["f".to_string(), "g".to_string()])
        );
    }

    #[test]
    fn test_output_defaults_to_empty() {
        let cfg: RunConfig = serde_yaml::from_str("postprocess: {class: mockup}").unwrap();
        assert!(cfg.output_names().is_empty());
        assert!(cfg.postprocess.options.is_empty());
    }

    #[test]
    fn test_option_type_errors() {
        let mut config = PostprocessorConfig::new("numpytxt");
        config.set("path", Value::Bool(true));
        config.set("names", Value::Mapping(Mapping::new()));

        let err = config.str_option("path").unwrap_err();
        assert!(err.to_string().contains("Invalid option 'path'"));
        assert!(config.string_list_option("names").is_err());
        assert!(config.mapping_option("names").is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_and_resolve_unknown_class() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.yaml");
        std::fs::write(&path, "postprocess:\n  class: hdf5\n").unwrap();

        let registry = PostprocessorRegistry::with_builtins();
        let err = load_and_resolve_config(&path, &registry).unwrap_err();
        assert!(err.to_string().contains("Unknown postprocessor 'hdf5'"));
    }
}
