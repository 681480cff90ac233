// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Equivalence criteria for fixed-point detection.
//!
//! `StructuralComparator` is the loader default: two trees are equivalent when
//! keys, attributes and child order match at every level. Content is ignored,
//! so a loader visitor that only rewrites content does not hold up
//! convergence. `DeepComparator` also requires equal content.

use crate::asset::AssetNode;
use crate::traits::Comparator;

#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralComparator;

impl Comparator for StructuralComparator {
    fn equivalent(&self, a: &AssetNode, b: &AssetNode) -> bool {
        a.key() == b.key()
            && a.attributes() == b.attributes()
            && a.children().len() == b.children().len()
            && a
                .children()
                .iter()
                .zip(b.children())
                .all(|(left, right)| self.equivalent(left, right))
    }

    fn name(&self) -> &'static str {
        "structural"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeepComparator;

impl Comparator for DeepComparator {
    fn equivalent(&self, a: &AssetNode, b: &AssetNode) -> bool {
        a == b
    }

    fn name(&self) -> &'static str {
        "deep"
    }
}
