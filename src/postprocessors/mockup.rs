// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::config::consts::{MOCKUP_OUTPUT_FILE, MOCKUP_RESULT_KEY};
use crate::config::{PostprocessorConfig, RunConfig};
use crate::data::{load_txt, ResultContainer, TxtOptions};
use crate::errors::{ConfigError, PostprocessError};
use crate::traits::{Postprocessor, PostprocessorKind};

use super::commit_fields;

/// Mockup postprocessor - loads `mockup.out` from the run directory into field `f`.
///
/// A fixed-name sibling of [`NumpytxtPostprocessor`](super::NumpytxtPostprocessor)
/// with no options.
pub struct MockupPostprocessor {
    run_dir: PathBuf,
}

impl MockupPostprocessor {
    pub fn new(run_dir: impl Into<PathBuf>) -> Self {
        Self {
            run_dir: run_dir.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.run_dir.join(MOCKUP_OUTPUT_FILE)
    }
}

impl Postprocessor for MockupPostprocessor {
    fn post(&self, data: &mut ResultContainer) -> Result<(), PostprocessError> {
        let path = self.output_path();
        commit_fields(self.label(), &path, data, || {
            let raw = load_txt(&path, &TxtOptions::default())?;
            Ok(vec![(MOCKUP_RESULT_KEY.to_string(), raw)])
        })
    }

    fn label(&self) -> &'static str {
        Self::LABEL
    }
}

impl PostprocessorKind for MockupPostprocessor {
    const LABEL: &'static str = "mockup";

    fn handle_config(
        _config: &mut PostprocessorConfig,
        _base_config: &RunConfig,
    ) -> Result<(), ConfigError> {
        Ok(())
    }

    fn from_config(_config: &PostprocessorConfig, run_dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(run_dir))
    }
}
