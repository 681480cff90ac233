// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::asset::AssetNode;
use crate::errors::VisitorError;

/// The points in a node visit where a visitor can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Before descending into the node's children.
    Before,
    /// After every child has been visited.
    After,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Before => write!(f, "before"),
            Hook::After => write!(f, "after"),
        }
    }
}

/// Result of a hook invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Visit {
    Unchanged,
    /// Substitute this node for the visited one. On a `Before` hook the
    /// replacement is also the node whose children get visited.
    Replace(AssetNode),
}

/// A pluggable unit invoked at each node of an asset tree.
///
/// Visitors declare which hooks they implement through [`Visitor::hooks`];
/// the traverser only calls `visit` for those. Visitors with a higher
/// [`Visitor::priority`] run first, ties run in registration order.
pub trait Visitor: Send + Sync {
    fn name(&self) -> &str;

    fn hooks(&self) -> &'static [Hook];

    fn priority(&self) -> i32 {
        0
    }

    fn visit(&self, hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError>;

    fn handles(&self, hook: Hook) -> bool {
        self.hooks().contains(&hook)
    }
}
