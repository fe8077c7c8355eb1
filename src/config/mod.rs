// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod registry;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub(crate) use loader::invalid;
pub use loader::{load_and_resolve_config, load_config, PostprocessorConfig, RunConfig};
pub use registry::PostprocessorRegistry;
