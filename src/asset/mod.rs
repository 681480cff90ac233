// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Asset tree data model and the definition-backed factory.

mod factory;
mod node;

pub use factory::DefinitionFactory;
pub use node::{AssetKey, AssetNode, Attributes, NodeSignature};
