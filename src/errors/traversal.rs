// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors produced while walking an asset tree.

use std::error::Error as StdError;
use thiserror::Error;

/// Failure signaled by a visitor hook.
///
/// The traversal engine never inspects or rewrites these; whatever a visitor
/// returns is what the caller of `traverse` receives.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct VisitorError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl VisitorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error (I/O, parse failure, ...) with a message.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by `Traverser` and `RepeatingTraverser`.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// A visitor failed; the tree is in an undefined intermediate state.
    #[error(transparent)]
    Visitor(#[from] VisitorError),

    /// The loader exhausted its pass bound without reaching a fixed point.
    #[error("Asset tree did not converge after {passes} passes")]
    NonConvergence { passes: usize },
}
