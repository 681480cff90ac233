// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::PipelineError;
use crate::traits::Extension;
use std::sync::Arc;

/// An ordered registry of extensions keyed by name.
///
/// Registration order is the order extensions are initialized in and the
/// order their visitors are added. Inserting a name that is already present
/// replaces the earlier extension in its original position.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use asset_pipeline::config::ExtensionMap;
/// use asset_pipeline::extensions::{ConcatExtension, InputsExtension};
///
/// let mut extensions = ExtensionMap::new();
/// extensions.insert(Arc::new(InputsExtension::new()));
/// extensions.insert(Arc::new(ConcatExtension::default()));
///
/// assert!(extensions.contains("inputs"));
/// assert_eq!(extensions.names(), vec!["inputs", "concat"]);
/// ```
#[derive(Clone, Default)]
pub struct ExtensionMap(Vec<Arc<dyn Extension>>);

impl ExtensionMap {
    /// Create a new empty extension map
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert an extension, returning `true` if it replaced one with the same name
    pub fn insert(&mut self, extension: Arc<dyn Extension>) -> bool {
        match self.0.iter().position(|e| e.name() == extension.name()) {
            Some(index) => {
                self.0[index] = extension;
                true
            }
            None => {
                self.0.push(extension);
                false
            }
        }
    }

    /// Get an extension by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Extension>> {
        self.0.iter().find(|e| e.name() == name)
    }

    /// Get an extension by name, failing for unknown names
    pub fn require(&self, name: &str) -> Result<&Arc<dyn Extension>, PipelineError> {
        self.get(name).ok_or_else(|| PipelineError::UnknownExtension {
            name: name.to_string(),
        })
    }

    /// Check if an extension exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Extension names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Extension>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ExtensionMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionMap")
            .field("extension_count", &self.0.len())
            .field("extension_names", &self.names())
            .finish()
    }
}
