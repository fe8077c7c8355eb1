// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for postprocessor registration and lookup.

use super::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    /// No postprocessor was registered under the requested label.
    #[error("Unknown postprocessor '{label}'. Registered: {available:?}")]
    UnknownPostprocessor { label: String, available: Vec<String> },

    /// A second implementation tried to claim an existing label.
    #[error("Postprocessor label '{0}' is already registered")]
    DuplicateLabel(String),

    /// The run config itself could not be loaded.
    #[error(transparent)]
    Load(#[from] ConfigError),

    #[error("Postprocessor '{label}' rejected its config: {source}")]
    Config {
        label: String,
        #[source]
        source: ConfigError,
    },
}
