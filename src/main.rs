// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use run_postprocessors::config::{load_and_resolve_config, PostprocessorConfig, PostprocessorRegistry};
use run_postprocessors::data::ResultContainer;
use tracing_subscriber::EnvFilter;

/// Shown in the usage text when the OS passes no program name
const PROGRAM_NAME: &str = "run-postprocess";

/// Split argv into the config path and run directories, or hand back the
/// program name for the usage text.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(String, Vec<String>), String> {
    let program = args.next().unwrap_or_else(|| PROGRAM_NAME.to_string());
    let config_path = args.next().ok_or_else(|| program.clone())?;
    let run_dirs: Vec<String> = args.collect();
    if run_dirs.is_empty() {
        return Err(program);
    }
    Ok((config_path, run_dirs))
}

/// Build the configured postprocessor for one run directory and run it
fn postprocess_run(
    registry: &PostprocessorRegistry,
    config: &PostprocessorConfig,
    run_dir: &Path,
) -> anyhow::Result<ResultContainer> {
    let postprocessor = registry.build(config, run_dir)?;
    let mut data = ResultContainer::new();
    postprocessor
        .post(&mut data)
        .with_context(|| format!("postprocessing {}", run_dir.display()))?;
    Ok(data)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (config_path, run_dirs) = match parse_args(env::args()) {
        Ok(args) => args,
        Err(program) => {
            eprintln!("Usage: {} <config.yaml> <run_dir> [run_dir ...]", program);
            eprintln!("Example: {} configs/mockup.yaml runs/0 runs/1", program);
            std::process::exit(1);
        }
    };

    let registry = Arc::new(PostprocessorRegistry::with_builtins());
    let config = match load_and_resolve_config(&config_path, &registry) {
        Ok(config) => Arc::new(config.postprocess),
        Err(e) => {
            eprintln!("❌ Failed to load {}: {}", config_path, e);
            std::process::exit(1);
        }
    };

    // One blocking task and one container per run directory
    let mut handles = Vec::new();
    for run_dir in &run_dirs {
        let run_dir = PathBuf::from(run_dir);
        let registry = Arc::clone(&registry);
        let config = Arc::clone(&config);
        let task_dir = run_dir.clone();
        let handle =
            tokio::task::spawn_blocking(move || postprocess_run(&registry, &config, &task_dir));
        handles.push((run_dir, handle));
    }

    let mut failures = 0;
    for (run_dir, handle) in handles {
        match handle.await {
            Ok(Ok(data)) => {
                let line = serde_json::json!({
                    "run_dir": run_dir.display().to_string(),
                    "data": data.to_json(),
                });
                println!("{}", line);
            }
            Ok(Err(e)) => {
                eprintln!("❌ {}: {:#}", run_dir.display(), e);
                failures += 1;
            }
            Err(e) => {
                eprintln!("❌ {}: task panicked: {}", run_dir.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
