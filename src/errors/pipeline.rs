// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by the pipeline facade.

use std::fmt;
use thiserror::Error;

use super::{ConfigError, SetupError, TraversalError};

/// Which traversal discipline an operation was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Load,
    Process,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Load => write!(f, "load"),
            Phase::Process => write!(f, "process"),
        }
    }
}

/// Errors returned by an `AssetFactory`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    #[error("Unknown asset '{path}'")]
    UnknownAsset { path: String },

    #[error("Invalid asset configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Top-level error for building and running a pipeline.
///
/// Errors raised by a load or process call carry the logical path and the
/// phase so the caller can report them without extra bookkeeping.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error("There is no '{name}' extension")]
    UnknownExtension { name: String },

    #[error("Extension '{name}' failed to initialize: {reason}")]
    ExtensionInitialization { name: String, reason: String },

    #[error("Failed to {phase} asset '{path}': {source}")]
    Factory {
        path: String,
        phase: Phase,
        #[source]
        source: FactoryError,
    },

    #[error("Failed to {phase} asset '{path}': {source}")]
    Traversal {
        path: String,
        phase: Phase,
        #[source]
        source: TraversalError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// The phase an asset-level failure happened in, if any.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            PipelineError::Factory { phase, .. } | PipelineError::Traversal { phase, .. } => {
                Some(*phase)
            }
            _ => None,
        }
    }
}
