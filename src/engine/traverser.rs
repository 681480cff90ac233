// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-pass depth-first traversal.
//!
//! Each node is visited in two phases: every visitor with a `Before` hook runs
//! in order, then the children of the (possibly replaced) node are visited in
//! order, then every visitor with an `After` hook runs in order. A hook that
//! returns [`Visit::Replace`] hands its replacement to the next hook.
//!
//! A visitor error stops the walk immediately: no remaining hook runs and no
//! remaining sibling is visited.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::asset::AssetNode;
use crate::errors::{TraversalError, VisitorError};
use crate::observability::messages::engine::{
    NodeReplaced, TraversalCompleted, TraversalStarted, VisitorFailed,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{Hook, TreeTraverser, Visit, Visitor};

/// Walks an asset tree once, applying registered visitors at every node.
///
/// # Example
/// ```
/// use asset_pipeline::asset::AssetNode;
/// use asset_pipeline::engine::Traverser;
///
/// let traverser = Traverser::new();
/// let tree = AssetNode::new("js/app.js").with_child(AssetNode::new("js/lib.js"));
///
/// let result = traverser.traverse(tree.clone()).unwrap();
/// assert_eq!(result, tree);
/// ```
#[derive(Clone, Default)]
pub struct Traverser {
    visitors: Vec<Arc<dyn Visitor>>,
}

impl Traverser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a visitor.
    ///
    /// Visitors are kept sorted by descending priority; a new visitor goes
    /// after every visitor of equal or higher priority, so equal priorities
    /// keep registration order.
    pub fn add_visitor(&mut self, visitor: Arc<dyn Visitor>) {
        let priority = visitor.priority();
        let index = self
            .visitors
            .iter()
            .position(|existing| existing.priority() < priority)
            .unwrap_or(self.visitors.len());
        self.visitors.insert(index, visitor);
    }

    pub fn visitors(&self) -> &[Arc<dyn Visitor>] {
        &self.visitors
    }

    /// Visitor names in invocation order.
    pub fn visitor_names(&self) -> Vec<&str> {
        self.visitors.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    pub fn traverse(&self, root: AssetNode) -> Result<AssetNode, TraversalError> {
        let root_key = root.key().as_str().to_string();
        let started = TraversalStarted {
            root: &root_key,
            visitor_count: self.visitors.len(),
        };
        let span = started.span("traverse");
        let _guard = span.enter();
        started.log();

        let start_time = Instant::now();
        let result = self.visit_node(root)?;

        TraversalCompleted {
            root: &root_key,
            node_count: result.node_count(),
            duration: start_time.elapsed(),
        }
        .log();

        Ok(result)
    }

    fn visit_node(&self, node: AssetNode) -> Result<AssetNode, VisitorError> {
        let mut node = self.run_hooks(Hook::Before, node)?;

        let children = node.take_children();
        let mut visited = Vec::with_capacity(children.len());
        for child in children {
            visited.push(self.visit_node(child)?);
        }
        node.set_children(visited);

        self.run_hooks(Hook::After, node)
    }

    fn run_hooks(&self, hook: Hook, mut node: AssetNode) -> Result<AssetNode, VisitorError> {
        for visitor in self.visitors.iter().filter(|v| v.handles(hook)) {
            match visitor.visit(hook, &node) {
                Ok(Visit::Unchanged) => {}
                Ok(Visit::Replace(replacement)) => {
                    NodeReplaced {
                        visitor: visitor.name(),
                        hook,
                        original: node.key().as_str(),
                        replacement: replacement.key().as_str(),
                    }
                    .log();
                    node = replacement;
                }
                Err(error) => {
                    VisitorFailed {
                        visitor: visitor.name(),
                        hook,
                        asset: node.key().as_str(),
                        error: &error,
                    }
                    .log();
                    return Err(error);
                }
            }
        }
        Ok(node)
    }
}

impl TreeTraverser for Traverser {
    fn add_visitor(&mut self, visitor: Arc<dyn Visitor>) {
        Traverser::add_visitor(self, visitor);
    }

    fn traverse(&self, root: AssetNode) -> Result<AssetNode, TraversalError> {
        Traverser::traverse(self, root)
    }
}

impl fmt::Debug for Traverser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverser")
            .field("visitor_count", &self.visitors.len())
            .field("visitors", &self.visitor_names())
            .finish()
    }
}
