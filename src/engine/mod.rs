// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod comparator;
pub mod factory;
pub mod repeating;
pub mod traverser;

pub use comparator::{DeepComparator, StructuralComparator};
pub use factory::ComparatorFactory;
pub use repeating::{Converged, RepeatingTraverser};
pub use traverser::Traverser;
