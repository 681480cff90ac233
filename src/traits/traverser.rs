// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::asset::AssetNode;
use crate::errors::TraversalError;
use crate::traits::Visitor;

/// Common surface of the single-pass and converging traversers.
///
/// Trees passed to `traverse` must be finite and acyclic. Owned `AssetNode`
/// trees are acyclic by construction; callers building trees from external
/// definitions must reject cyclic definitions first.
pub trait TreeTraverser: Send + Sync {
    /// Register a visitor. Must happen before the traversals that should see it.
    fn add_visitor(&mut self, visitor: Arc<dyn Visitor>);

    fn traverse(&self, root: AssetNode) -> Result<AssetNode, TraversalError>;
}
