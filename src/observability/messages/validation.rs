// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for asset definition validation.
//!
//! This module contains message types for logging events related to:
//! * Cyclic input detection
//! * Unresolved input detection
//! * Duplicate asset path detection

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Asset definitions include each other in a loop.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::validation::CyclicInputDetected;
///
/// let cycle = vec!["a.js", "b.js", "a.js"];
/// let msg = CyclicInputDetected {
///     cycle: &cycle,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct CyclicInputDetected<'a> {
    pub cycle: &'a [&'a str],
}

impl Display for CyclicInputDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic asset inputs detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicInputDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// An asset lists an input with no definition.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnresolvedInput<'a> {
    pub asset_path: &'a str,
    pub missing_input: &'a str,
}

impl Display for UnresolvedInput<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset '{}' includes undefined input '{}'",
            self.asset_path, self.missing_input
        )
    }
}

impl StructuredLog for UnresolvedInput<'_> {
    fn log(&self) {
        tracing::error!(
            asset_path = self.asset_path,
            missing_input = self.missing_input,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            asset_path = self.asset_path,
            missing_input = self.missing_input,
        )
    }
}

/// Two definitions share a logical path.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateAssetPath<'a> {
    pub asset_path: &'a str,
}

impl Display for DuplicateAssetPath<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate asset path: '{}'", self.asset_path)
    }
}

impl StructuredLog for DuplicateAssetPath<'_> {
    fn log(&self) {
        tracing::error!(asset_path = self.asset_path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            asset_path = self.asset_path,
        )
    }
}

/// Definition validation completed successfully.
///
/// # Log Level
/// `debug!` - Setup diagnostic
pub struct ValidationCompleted {
    pub asset_count: usize,
}

impl Display for ValidationCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset definitions validated successfully: {} assets",
            self.asset_count
        )
    }
}

impl StructuredLog for ValidationCompleted {
    fn log(&self) {
        tracing::debug!(asset_count = self.asset_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            asset_count = self.asset_count,
        )
    }
}

/// Definition validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     error_count: 3,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ValidationFailed {
    pub error_count: usize,
}

impl Display for ValidationFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset definition validation failed with {} errors",
            self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            error_count = self.error_count,
        )
    }
}
