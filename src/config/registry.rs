// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::path::Path;

use crate::config::{PostprocessorConfig, RunConfig};
use crate::errors::{ConfigError, RegistryError};
use crate::observability::messages::{registry::*, StructuredLog};
use crate::postprocessors::{JsonPostprocessor, MockupPostprocessor, NumpytxtPostprocessor};
use crate::traits::{Postprocessor, PostprocessorKind};

type ConfigHandler = fn(&mut PostprocessorConfig, &RunConfig) -> Result<(), ConfigError>;
type Constructor = fn(&PostprocessorConfig, &Path) -> Result<Box<dyn Postprocessor>, ConfigError>;

/// Capabilities recorded for one registered label.
#[derive(Clone, Copy)]
struct Registration {
    handle_config: ConfigHandler,
    build: Constructor,
}

impl Registration {
    fn of<P: PostprocessorKind>() -> Self {
        Self {
            handle_config: P::handle_config,
            build: build_boxed::<P>,
        }
    }
}

fn build_boxed<P: PostprocessorKind>(
    config: &PostprocessorConfig,
    run_dir: &Path,
) -> Result<Box<dyn Postprocessor>, ConfigError> {
    Ok(Box::new(P::from_config(config, run_dir)?))
}

/// Explicit label -> implementation registry, populated at startup.
///
/// # Examples
///
/// ```
/// use run_postprocessors::config::{PostprocessorConfig, PostprocessorRegistry};
///
/// let registry = PostprocessorRegistry::with_builtins();
/// assert!(registry.contains("mockup"));
///
/// let dir = std::env::temp_dir();
/// let postprocessor = registry.build(&PostprocessorConfig::new("mockup"), &dir).unwrap();
/// assert_eq!(postprocessor.label(), "mockup");
/// ```
#[derive(Clone, Default)]
pub struct PostprocessorRegistry(HashMap<String, Registration>);

impl PostprocessorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registry holding every built-in postprocessor.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert::<MockupPostprocessor>();
        registry.insert::<NumpytxtPostprocessor>();
        registry.insert::<JsonPostprocessor>();
        registry
    }

    /// Register `P` under its label. Labels are first come, first served.
    pub fn register<P: PostprocessorKind>(&mut self) -> Result<(), RegistryError> {
        if self.contains(P::LABEL) {
            DuplicateRegistration { label: P::LABEL }.log();
            return Err(RegistryError::DuplicateLabel(P::LABEL.to_string()));
        }
        self.insert::<P>();
        Ok(())
    }

    fn insert<P: PostprocessorKind>(&mut self) {
        self.0.insert(P::LABEL.to_string(), Registration::of::<P>());
        PostprocessorRegistered { label: P::LABEL }.log();
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Registered labels, sorted
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.0.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    fn lookup(&self, label: &str) -> Result<&Registration, RegistryError> {
        self.0.get(label).ok_or_else(|| {
            UnknownPostprocessorRequested { label }.log();
            RegistryError::UnknownPostprocessor {
                label: label.to_string(),
                available: self.labels().into_iter().map(str::to_string).collect(),
            }
        })
    }

    /// Dispatch `handle_config` to the implementation named by `config.class`.
    pub fn handle_config(
        &self,
        config: &mut PostprocessorConfig,
        base_config: &RunConfig,
    ) -> Result<(), RegistryError> {
        let registration = self.lookup(&config.class)?;
        (registration.handle_config)(config, base_config).map_err(|source| {
            RegistryError::Config {
                label: config.class.clone(),
                source,
            }
        })?;

        ConfigResolved {
            label: &config.class,
            option_count: config.options.len(),
        }
        .log();
        Ok(())
    }

    /// Resolve the postprocessor section of a run config in place.
    pub fn resolve(&self, run_config: &mut RunConfig) -> Result<(), RegistryError> {
        let mut config = run_config.postprocess.clone();
        self.handle_config(&mut config, run_config)?;
        run_config.postprocess = config;
        Ok(())
    }

    /// Instantiate the postprocessor named by `config.class` for one run directory.
    pub fn build(
        &self,
        config: &PostprocessorConfig,
        run_dir: &Path,
    ) -> Result<Box<dyn Postprocessor>, RegistryError> {
        let registration = self.lookup(&config.class)?;
        (registration.build)(config, run_dir).map_err(|source| RegistryError::Config {
            label: config.class.clone(),
            source,
        })
    }
}

impl std::fmt::Debug for PostprocessorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostprocessorRegistry")
            .field("postprocessor_count", &self.0.len())
            .field("labels", &self.labels())
            .finish()
    }
}
