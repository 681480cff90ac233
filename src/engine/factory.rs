// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::ComparisonMode;
use crate::engine::comparator::{DeepComparator, StructuralComparator};
use crate::traits::Comparator;

/// Factory for creating comparators from configuration
pub struct ComparatorFactory;

impl ComparatorFactory {
    pub fn from_mode(mode: ComparisonMode) -> Box<dyn Comparator> {
        match mode {
            ComparisonMode::Structural => Box::new(StructuralComparator),
            ComparisonMode::Deep => Box::new(DeepComparator),
        }
    }
}
