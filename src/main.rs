// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use asset_pipeline::config::{load_config, RuntimeBuilder};

/// Parsed command line
#[derive(Debug, PartialEq)]
struct Cli {
    config_file: String,
    logical_paths: Vec<String>,
    process: bool,
}

fn parse_args(args: &[String]) -> Option<Cli> {
    let process = args.iter().any(|a| a == "--process");
    let mut positional = args.iter().filter(|a| a.as_str() != "--process").cloned();

    let config_file = positional.next()?;
    let logical_paths: Vec<String> = positional.collect();
    if logical_paths.is_empty() {
        return None;
    }

    Some(Cli {
        config_file,
        logical_paths,
        process,
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("asset-pipeline");

    let Some(cli) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {} <config.yaml> <logical_path> [logical_path ...] [--process]", program);
        eprintln!("Example: {} configs/site.yaml js/application.js", program);
        eprintln!("Example: {} configs/site.yaml js/application.js css/site.css --process", program);
        std::process::exit(1);
    };

    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load (and optionally process) every requested path on the blocking pool,
/// then print the trees as JSON in argument order.
async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config_file)
        .with_context(|| format!("Failed to load config '{}'", cli.config_file))?;
    // from_config validates
    let pipeline = Arc::new(
        RuntimeBuilder::from_config(&config)
            .with_context(|| format!("Invalid config '{}'", cli.config_file))?,
    );

    let start_time = Instant::now();
    let handles: Vec<_> = cli
        .logical_paths
        .iter()
        .map(|path| {
            let pipeline = Arc::clone(&pipeline);
            let path = path.clone();
            let process = cli.process;
            tokio::task::spawn_blocking(move || {
                if process {
                    pipeline.build_asset(&path)
                } else {
                    pipeline.load(&path)
                }
            })
        })
        .collect();

    let mut trees = Vec::with_capacity(handles.len());
    for handle in handles {
        trees.push(handle.await.context("Asset task panicked")??);
    }
    tracing::info!(
        assets = trees.len(),
        duration_ms = start_time.elapsed().as_millis() as u64,
        "All assets finished"
    );

    let output = match trees.as_slice() {
        [tree] => serde_json::to_string_pretty(tree)?,
        _ => serde_json::to_string_pretty(&trees)?,
    };
    println!("{}", output);
    Ok(())
}
