// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::asset::AssetNode;

/// Decides whether two asset trees are equivalent for fixed-point detection.
pub trait Comparator: Send + Sync {
    fn equivalent(&self, a: &AssetNode, b: &AssetNode) -> bool;

    fn name(&self) -> &'static str;
}
