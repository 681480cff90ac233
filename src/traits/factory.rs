// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::asset::{AssetNode, Attributes};
use crate::errors::FactoryError;

/// Options describing the asset to create.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetOptions {
    pub logical_path: String,
    /// Attributes merged over the ones the factory derives for the asset.
    pub attributes: Attributes,
}

impl AssetOptions {
    pub fn for_path(logical_path: impl Into<String>) -> Self {
        Self {
            logical_path: logical_path.into(),
            attributes: Attributes::new(),
        }
    }
}

/// Builds root asset nodes from logical paths.
pub trait AssetFactory: Send + Sync {
    fn create_asset(&self, options: &AssetOptions) -> Result<AssetNode, FactoryError>;
}
