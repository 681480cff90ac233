// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fixed-point traversal for the load phase.
//!
//! Loader visitors can introduce nodes that themselves need loading (an
//! input resolved in an `After` hook is not visited again in the same pass),
//! so one pass is not enough. The repeating traverser runs full passes until
//! its comparator reports that a pass left the tree unchanged.
//!
//! The pass bound guards against visitor sets that never settle. Reaching it
//! is an error, never a silent partial result.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::asset::AssetNode;
use crate::config::consts::DEFAULT_MAX_PASSES;
use crate::engine::{StructuralComparator, Traverser};
use crate::errors::TraversalError;
use crate::observability::messages::engine::{ConvergenceFailed, ConvergenceReached, PassCompleted};
use crate::observability::messages::StructuredLog;
use crate::traits::{Comparator, TreeTraverser, Visitor};

/// A converged tree and the number of passes it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Converged {
    pub tree: AssetNode,
    /// Passes run, including the final one that changed nothing.
    pub passes: usize,
}

pub struct RepeatingTraverser {
    traverser: Traverser,
    comparator: Box<dyn Comparator>,
    max_passes: usize,
}

impl RepeatingTraverser {
    pub fn new(traverser: Traverser, comparator: Box<dyn Comparator>) -> Self {
        Self {
            traverser,
            comparator,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Set the pass bound. Values below 1 are raised to 1.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    pub fn max_passes(&self) -> usize {
        self.max_passes
    }

    pub fn traverser(&self) -> &Traverser {
        &self.traverser
    }

    pub fn comparator(&self) -> &dyn Comparator {
        self.comparator.as_ref()
    }

    pub fn add_visitor(&mut self, visitor: Arc<dyn Visitor>) {
        self.traverser.add_visitor(visitor);
    }

    pub fn traverse(&self, root: AssetNode) -> Result<AssetNode, TraversalError> {
        self.converge(root).map(|converged| converged.tree)
    }

    /// Run passes until the tree stops changing.
    ///
    /// Each pass is compared against a snapshot of the tree taken just before
    /// it ran. Returns [`TraversalError::NonConvergence`] when `max_passes`
    /// passes all changed the tree.
    pub fn converge(&self, root: AssetNode) -> Result<Converged, TraversalError> {
        let root_key = root.key().as_str().to_string();
        let start_time = Instant::now();
        let mut current = root;

        for pass in 1..=self.max_passes {
            let snapshot = current.clone();
            let candidate = self.traverser.traverse(current)?;
            let converged = self.comparator.equivalent(&snapshot, &candidate);

            PassCompleted {
                root: &root_key,
                pass,
                converged,
            }
            .log();

            if converged {
                ConvergenceReached {
                    root: &root_key,
                    passes: pass,
                    duration: start_time.elapsed(),
                }
                .log();
                return Ok(Converged {
                    tree: candidate,
                    passes: pass,
                });
            }

            current = candidate;
        }

        ConvergenceFailed {
            root: &root_key,
            max_passes: self.max_passes,
        }
        .log();

        Err(TraversalError::NonConvergence {
            passes: self.max_passes,
        })
    }
}

impl Default for RepeatingTraverser {
    fn default() -> Self {
        Self::new(Traverser::new(), Box::new(StructuralComparator))
    }
}

impl TreeTraverser for RepeatingTraverser {
    fn add_visitor(&mut self, visitor: Arc<dyn Visitor>) {
        RepeatingTraverser::add_visitor(self, visitor);
    }

    fn traverse(&self, root: AssetNode) -> Result<AssetNode, TraversalError> {
        RepeatingTraverser::traverse(self, root)
    }
}

impl fmt::Debug for RepeatingTraverser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepeatingTraverser")
            .field("traverser", &self.traverser)
            .field("comparator", &self.comparator.name())
            .field("max_passes", &self.max_passes)
            .finish()
    }
}
