use std::path::Path;

use crate::config::{PostprocessorConfig, RunConfig};
use crate::data::ResultContainer;
use crate::errors::{ConfigError, PostprocessError};

/// Converts one run's raw output into entries of the shared result container.
///
/// Instances are bound to a single run directory and hold no state between
/// calls, so different runs can be postprocessed concurrently.
pub trait Postprocessor: Send + Sync {
    /// Read the run output and store it in `data`, overwriting existing keys.
    ///
    /// Errors propagate unhandled; on error `data` is left as it was.
    fn post(&self, data: &mut ResultContainer) -> Result<(), PostprocessError>;

    fn label(&self) -> &'static str;
}

/// Static half of the postprocessor contract, used by the registry.
pub trait PostprocessorKind: Postprocessor + Sized + 'static {
    /// Registry label, e.g. `"mockup"`.
    const LABEL: &'static str;

    /// Normalize or default-fill `config` in place, using the run config as context.
    ///
    /// May be called more than once for the same config and must be idempotent.
    fn handle_config(config: &mut PostprocessorConfig, base_config: &RunConfig) -> Result<(), ConfigError>;

    /// Build an instance bound to `run_dir` from an already resolved config.
    fn from_config(config: &PostprocessorConfig, run_dir: &Path) -> Result<Self, ConfigError>;
}
