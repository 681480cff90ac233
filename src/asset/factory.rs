// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::json;
use std::collections::HashMap;

use crate::asset::AssetNode;
use crate::config::consts::{FILTERS_ATTRIBUTE, INPUTS_ATTRIBUTE};
use crate::config::{validate_asset_definitions, AssetDefinition, Config};
use crate::errors::{ConfigError, FactoryError};
use crate::traits::{AssetFactory, AssetOptions};

/// Factory that builds asset nodes from validated definitions.
///
/// A created node has no children. Its declared inputs are recorded in the
/// `inputs` attribute for a loader visitor to resolve, and its filters in the
/// `filters` attribute for the processor. Definitions are validated on
/// construction, so any tree grown by following inputs is acyclic.
#[derive(Debug, Clone, Default)]
pub struct DefinitionFactory {
    definitions: HashMap<String, AssetDefinition>,
}

impl DefinitionFactory {
    pub fn new(definitions: Vec<AssetDefinition>) -> Result<Self, ConfigError> {
        validate_asset_definitions(&definitions).map_err(ConfigError::Validation)?;
        Ok(Self::from_validated(definitions))
    }

    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        Self::new(cfg.assets.clone())
    }

    /// Build over definitions that already passed validation.
    pub(crate) fn from_validated(definitions: Vec<AssetDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|d| (d.path.clone(), d))
                .collect(),
        }
    }

    pub fn contains(&self, logical_path: &str) -> bool {
        self.definitions.contains_key(logical_path)
    }

    /// Defined logical paths, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl AssetFactory for DefinitionFactory {
    fn create_asset(&self, options: &AssetOptions) -> Result<AssetNode, FactoryError> {
        if options.logical_path.trim().is_empty() {
            return Err(FactoryError::InvalidConfiguration {
                reason: "logical_path is required".to_string(),
            });
        }

        let definition = self
            .definitions
            .get(&options.logical_path)
            .ok_or_else(|| FactoryError::UnknownAsset {
                path: options.logical_path.clone(),
            })?;

        let mut node =
            AssetNode::new(definition.path.as_str()).with_attributes(definition.attributes.clone());
        if let Some(content) = &definition.content {
            node.set_content(content.as_str());
        }
        if !definition.inputs.is_empty() {
            node.set_attribute(INPUTS_ATTRIBUTE, json!(definition.inputs));
        }
        if !definition.filters.is_empty() {
            node.set_attribute(FILTERS_ATTRIBUTE, json!(definition.filters));
        }

        Ok(node.with_attributes(options.attributes.clone()))
    }
}
