// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::ExtensionMap;
use crate::errors::PipelineError;
use crate::traits::{AssetFactory, Visitor};

/// What an extension sees while the pipeline is being built.
pub struct ExtensionContext<'a> {
    factory: &'a Arc<dyn AssetFactory>,
    extensions: &'a ExtensionMap,
}

impl<'a> ExtensionContext<'a> {
    pub fn new(factory: &'a Arc<dyn AssetFactory>, extensions: &'a ExtensionMap) -> Self {
        Self {
            factory,
            extensions,
        }
    }

    /// The factory the pipeline will load assets with.
    pub fn factory(&self) -> Arc<dyn AssetFactory> {
        Arc::clone(self.factory)
    }

    pub fn extensions(&self) -> &ExtensionMap {
        self.extensions
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}

/// A named bundle of loader and processor visitors.
///
/// During pipeline setup every registered extension is initialized once, in
/// registration order, and then asked for its visitors.
pub trait Extension: Send + Sync {
    fn name(&self) -> &str;

    fn initialize(&self, _ctx: &ExtensionContext<'_>) -> Result<(), PipelineError> {
        Ok(())
    }

    /// Visitors for the converging load phase.
    fn loader_visitors(&self, _ctx: &ExtensionContext<'_>) -> Vec<Arc<dyn Visitor>> {
        Vec::new()
    }

    /// Visitors for the single-pass process phase.
    fn processor_visitors(&self, _ctx: &ExtensionContext<'_>) -> Vec<Arc<dyn Visitor>> {
        Vec::new()
    }
}
