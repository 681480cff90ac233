// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline setup and asset lifecycle events.

use crate::errors::Phase;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Extension added to a pipeline builder.
///
/// # Log Level
/// `debug!` - Setup diagnostic
pub struct ExtensionRegistered<'a> {
    pub name: &'a str,
    pub replaced: bool,
}

impl Display for ExtensionRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.replaced {
            write!(f, "Extension '{}' registered, replacing earlier entry", self.name)
        } else {
            write!(f, "Extension '{}' registered", self.name)
        }
    }
}

impl StructuredLog for ExtensionRegistered<'_> {
    fn log(&self) {
        tracing::debug!(name = self.name, replaced = self.replaced, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "extension_registered",
            span_name = name,
            extension = self.name,
            replaced = self.replaced,
        )
    }
}

/// Pipeline built and ready to load assets.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use asset_pipeline::observability::messages::pipeline::PipelineInitialized;
///
/// let msg = PipelineInitialized {
///     extension_count: 2,
///     loader_visitors: 1,
///     processor_visitors: 2,
///     max_passes: 16,
///     comparator: "structural",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineInitialized<'a> {
    pub extension_count: usize,
    pub loader_visitors: usize,
    pub processor_visitors: usize,
    pub max_passes: usize,
    pub comparator: &'a str,
}

impl Display for PipelineInitialized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline initialized: {} extensions, {} loader visitors, {} processor visitors (max_passes={}, comparator={})",
            self.extension_count,
            self.loader_visitors,
            self.processor_visitors,
            self.max_passes,
            self.comparator
        )
    }
}

impl StructuredLog for PipelineInitialized<'_> {
    fn log(&self) {
        tracing::info!(
            extension_count = self.extension_count,
            loader_visitors = self.loader_visitors,
            processor_visitors = self.processor_visitors,
            max_passes = self.max_passes,
            comparator = self.comparator,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline_initialized",
            span_name = name,
            extension_count = self.extension_count,
            loader_visitors = self.loader_visitors,
            processor_visitors = self.processor_visitors,
        )
    }
}

/// An asset entered a phase.
///
/// # Log Level
/// `debug!` - Lifecycle diagnostic; its span wraps the whole phase
///
/// # Example
/// ```
/// use asset_pipeline::errors::Phase;
/// use asset_pipeline::observability::messages::pipeline::AssetPhaseStarted;
/// use asset_pipeline::observability::messages::StructuredLog;
///
/// let msg = AssetPhaseStarted {
///     path: "js/app.js",
///     phase: Phase::Load,
/// };
///
/// let span = msg.span("load");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct AssetPhaseStarted<'a> {
    pub path: &'a str,
    pub phase: Phase,
}

impl Display for AssetPhaseStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Asset '{}' {} started", self.path, self.phase)
    }
}

impl StructuredLog for AssetPhaseStarted<'_> {
    fn log(&self) {
        tracing::debug!(path = self.path, phase = %self.phase, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "asset",
            span_name = name,
            path = self.path,
            phase = %self.phase,
        )
    }
}

/// An asset finished a phase.
///
/// # Log Level
/// `info!` - Important operational event
pub struct AssetPhaseCompleted<'a> {
    pub path: &'a str,
    pub phase: Phase,
    pub node_count: usize,
    pub duration: std::time::Duration,
}

impl Display for AssetPhaseCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Asset '{}' {} completed: {} nodes in {:?}",
            self.path, self.phase, self.node_count, self.duration
        )
    }
}

impl StructuredLog for AssetPhaseCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            phase = %self.phase,
            node_count = self.node_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "asset_completed",
            span_name = name,
            path = self.path,
            phase = %self.phase,
            node_count = self.node_count,
        )
    }
}

/// An asset failed a phase.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use asset_pipeline::errors::Phase;
/// use asset_pipeline::observability::messages::pipeline::AssetPhaseFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "test error");
/// let msg = AssetPhaseFailed {
///     path: "js/app.js",
///     phase: Phase::Load,
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct AssetPhaseFailed<'a> {
    pub path: &'a str,
    pub phase: Phase,
    pub error: &'a dyn std::error::Error,
}

impl Display for AssetPhaseFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Asset '{}' {} failed: {}", self.path, self.phase, self.error)
    }
}

impl StructuredLog for AssetPhaseFailed<'_> {
    fn log(&self) {
        tracing::error!(
            path = self.path,
            phase = %self.phase,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "asset_failed",
            span_name = name,
            path = self.path,
            phase = %self.phase,
            error = %self.error,
        )
    }
}
