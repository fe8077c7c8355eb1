// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;         // run config + postprocessor registry
pub mod data;           // result container + numeric text reader
pub mod errors;         // error handling
pub mod observability;
pub mod postprocessors; // built-in postprocessors
pub mod traits;         // postprocessor contract
