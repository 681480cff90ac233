// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during asset definition validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Asset definitions include each other in a loop
    #[error("Cyclic asset inputs detected: {}", .cycle.join(" -> "))]
    CyclicInput {
        /// The cycle path, closed by repeating its first asset
        cycle: Vec<String>,
    },

    /// An asset lists an input that has no definition
    #[error("Asset '{asset_path}' includes '{missing_input}' which is not defined")]
    UnresolvedInput {
        asset_path: String,
        missing_input: String,
    },

    /// Two definitions share a logical path
    #[error("Duplicate asset path: '{asset_path}'")]
    DuplicateAssetPath { asset_path: String },

    /// A definition has an empty logical path
    #[error("Asset definition #{index} has an empty path")]
    EmptyAssetPath { index: usize },
}

/// Errors that can occur while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported config format for '{}' (expected .yaml, .yml or .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("max_passes must be at least 1, got {max_passes}")]
    InvalidMaxPasses { max_passes: usize },

    /// The input graph is deeper than the loader can resolve
    #[error(
        "Asset '{asset_path}' has inputs {depth} levels deep, which needs {} loader passes but max_passes is {max_passes}",
        .depth + 1
    )]
    InputDepthExceedsPasses {
        asset_path: String,
        depth: usize,
        max_passes: usize,
    },

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
