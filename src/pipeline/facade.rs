// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::asset::AssetNode;
use crate::config::ExtensionMap;
use crate::engine::{RepeatingTraverser, Traverser};
use crate::errors::{Phase, PipelineError, TraversalError};
use crate::observability::messages::pipeline::{
    AssetPhaseCompleted, AssetPhaseFailed, AssetPhaseStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{AssetFactory, AssetOptions, Extension};

/// A built pipeline: a converging loader, a single-pass processor and the
/// factory root nodes come from.
///
/// Every method takes `&self`, so one pipeline can be shared across threads
/// to load independent trees concurrently.
pub struct Pipeline {
    loader: RepeatingTraverser,
    processor: Traverser,
    factory: Arc<dyn AssetFactory>,
    extensions: ExtensionMap,
}

impl Pipeline {
    pub(crate) fn new(
        loader: RepeatingTraverser,
        processor: Traverser,
        factory: Arc<dyn AssetFactory>,
        extensions: ExtensionMap,
    ) -> Self {
        Self {
            loader,
            processor,
            factory,
            extensions,
        }
    }

    /// Create the root node for `logical_path` and converge it.
    pub fn load(&self, logical_path: &str) -> Result<AssetNode, PipelineError> {
        self.load_with(&AssetOptions::for_path(logical_path))
    }

    pub fn load_with(&self, options: &AssetOptions) -> Result<AssetNode, PipelineError> {
        let path = options.logical_path.as_str();
        let started = AssetPhaseStarted {
            path,
            phase: Phase::Load,
        };
        let span = started.span("load");
        let _guard = span.enter();
        started.log();
        let start_time = Instant::now();

        let root = self.factory.create_asset(options).map_err(|source| {
            AssetPhaseFailed {
                path,
                phase: Phase::Load,
                error: &source,
            }
            .log();
            PipelineError::Factory {
                path: path.to_string(),
                phase: Phase::Load,
                source,
            }
        })?;

        let result = self.loader.traverse(root);
        self.finish(path, Phase::Load, start_time, result)
    }

    /// Run an already loaded tree through the processor once.
    pub fn process(&self, node: AssetNode) -> Result<AssetNode, PipelineError> {
        let path = node.key().as_str().to_string();
        let started = AssetPhaseStarted {
            path: &path,
            phase: Phase::Process,
        };
        let span = started.span("process");
        let _guard = span.enter();
        started.log();
        let start_time = Instant::now();

        let result = self.processor.traverse(node);
        self.finish(&path, Phase::Process, start_time, result)
    }

    /// `load` followed by `process`.
    pub fn build_asset(&self, logical_path: &str) -> Result<AssetNode, PipelineError> {
        let loaded = self.load(logical_path)?;
        self.process(loaded)
    }

    fn finish(
        &self,
        path: &str,
        phase: Phase,
        start_time: Instant,
        result: Result<AssetNode, TraversalError>,
    ) -> Result<AssetNode, PipelineError> {
        match result {
            Ok(tree) => {
                AssetPhaseCompleted {
                    path,
                    phase,
                    node_count: tree.node_count(),
                    duration: start_time.elapsed(),
                }
                .log();
                Ok(tree)
            }
            Err(source) => {
                AssetPhaseFailed {
                    path,
                    phase,
                    error: &source,
                }
                .log();
                Err(PipelineError::Traversal {
                    path: path.to_string(),
                    phase,
                    source,
                })
            }
        }
    }

    pub fn loader(&self) -> &RepeatingTraverser {
        &self.loader
    }

    pub fn processor(&self) -> &Traverser {
        &self.processor
    }

    pub fn factory(&self) -> Arc<dyn AssetFactory> {
        Arc::clone(&self.factory)
    }

    pub fn extensions(&self) -> &ExtensionMap {
        &self.extensions
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    /// Look up a registered extension, failing with `UnknownExtension`.
    pub fn extension(&self, name: &str) -> Result<&Arc<dyn Extension>, PipelineError> {
        self.extensions.require(name)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("loader", &self.loader)
            .field("processor", &self.processor)
            .field("extensions", &self.extensions)
            .finish()
    }
}
