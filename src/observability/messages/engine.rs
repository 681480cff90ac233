// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for traversal and convergence events.
//!
//! This module contains message types for logging events related to:
//! * A single depth-first traversal (start, completion)
//! * Visitor hook outcomes (replacement, failure)
//! * Fixed-point iteration in the loader (passes, convergence, non-convergence)

use crate::observability::messages::StructuredLog;
use crate::traits::Hook;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Traversal of a tree started.
///
/// # Log Level
/// `debug!` - Emitted once per pass
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::engine::TraversalStarted;
///
/// let msg = TraversalStarted {
///     root: "js/app.js",
///     visitor_count: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct TraversalStarted<'a> {
    pub root: &'a str,
    pub visitor_count: usize,
}

impl Display for TraversalStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Traversing '{}' with {} visitors",
            self.root, self.visitor_count
        )
    }
}

impl StructuredLog for TraversalStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            root = self.root,
            visitor_count = self.visitor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "traversal",
            span_name = name,
            root = self.root,
            visitor_count = self.visitor_count,
        )
    }
}

/// Traversal of a tree completed.
///
/// # Log Level
/// `debug!` - Emitted once per pass
pub struct TraversalCompleted<'a> {
    pub root: &'a str,
    pub node_count: usize,
    pub duration: std::time::Duration,
}

impl Display for TraversalCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Traversed '{}': {} nodes in {:?}",
            self.root, self.node_count, self.duration
        )
    }
}

impl StructuredLog for TraversalCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            root = self.root,
            node_count = self.node_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "traversal_completed",
            span_name = name,
            root = self.root,
            node_count = self.node_count,
            duration = ?self.duration,
        )
    }
}

/// A visitor substituted a node.
///
/// # Log Level
/// `debug!` - High-volume diagnostic
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::engine::NodeReplaced;
/// use asset_pipeline::traits::Hook;
///
/// let msg = NodeReplaced {
///     visitor: "inputs",
///     hook: Hook::After,
///     original: "js/app.js",
///     replacement: "js/app.js",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct NodeReplaced<'a> {
    pub visitor: &'a str,
    pub hook: Hook,
    pub original: &'a str,
    pub replacement: &'a str,
}

impl Display for NodeReplaced<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.original == self.replacement {
            write!(
                f,
                "Visitor '{}' replaced '{}' in {} hook",
                self.visitor, self.original, self.hook
            )
        } else {
            write!(
                f,
                "Visitor '{}' substituted '{}' for '{}' in {} hook",
                self.visitor, self.replacement, self.original, self.hook
            )
        }
    }
}

impl StructuredLog for NodeReplaced<'_> {
    fn log(&self) {
        tracing::debug!(
            visitor = self.visitor,
            hook = %self.hook,
            original = self.original,
            replacement = self.replacement,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_replaced",
            span_name = name,
            visitor = self.visitor,
            hook = %self.hook,
            original = self.original,
            replacement = self.replacement,
        )
    }
}

/// A visitor hook returned an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::engine::VisitorFailed;
/// use asset_pipeline::traits::Hook;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = VisitorFailed {
///     visitor: "filters",
///     hook: Hook::After,
///     asset: "css/site.css",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct VisitorFailed<'a> {
    pub visitor: &'a str,
    pub hook: Hook,
    pub asset: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for VisitorFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Visitor '{}' failed in {} hook on '{}': {}",
            self.visitor, self.hook, self.asset, self.error
        )
    }
}

impl StructuredLog for VisitorFailed<'_> {
    fn log(&self) {
        tracing::error!(
            visitor = self.visitor,
            hook = %self.hook,
            asset = self.asset,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "visitor_failed",
            span_name = name,
            visitor = self.visitor,
            hook = %self.hook,
            asset = self.asset,
            error = %self.error,
        )
    }
}

/// One loader pass finished.
///
/// # Log Level
/// `debug!` - Emitted once per pass
pub struct PassCompleted<'a> {
    pub root: &'a str,
    pub pass: usize,
    pub converged: bool,
}

impl Display for PassCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let outcome = if self.converged { "unchanged" } else { "changed" };
        write!(f, "Pass {} over '{}': tree {}", self.pass, self.root, outcome)
    }
}

impl StructuredLog for PassCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            root = self.root,
            pass = self.pass,
            converged = self.converged,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "pass",
            span_name = name,
            root = self.root,
            pass = self.pass,
        )
    }
}

/// The loader reached a fixed point.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::engine::ConvergenceReached;
/// use std::time::Duration;
///
/// let msg = ConvergenceReached {
///     root: "js/app.js",
///     passes: 2,
///     duration: Duration::from_millis(5),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConvergenceReached<'a> {
    pub root: &'a str,
    pub passes: usize,
    pub duration: std::time::Duration,
}

impl Display for ConvergenceReached<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset tree '{}' converged after {} passes in {:?}",
            self.root, self.passes, self.duration
        )
    }
}

impl StructuredLog for ConvergenceReached<'_> {
    fn log(&self) {
        tracing::info!(
            root = self.root,
            passes = self.passes,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "converged",
            span_name = name,
            root = self.root,
            passes = self.passes,
            duration = ?self.duration,
        )
    }
}

/// The loader gave up without reaching a fixed point.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConvergenceFailed<'a> {
    pub root: &'a str,
    pub max_passes: usize,
}

impl Display for ConvergenceFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset tree '{}' still changing after {} passes; a loader visitor never settles",
            self.root, self.max_passes
        )
    }
}

impl StructuredLog for ConvergenceFailed<'_> {
    fn log(&self) {
        tracing::error!(
            root = self.root,
            max_passes = self.max_passes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "convergence_failed",
            span_name = name,
            root = self.root,
            max_passes = self.max_passes,
        )
    }
}
