// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod comparator;
pub mod extension;
pub mod factory;
pub mod traverser;
pub mod visitor;

pub use comparator::Comparator;
pub use extension::{Extension, ExtensionContext};
pub use factory::{AssetFactory, AssetOptions};
pub use traverser::TreeTraverser;
pub use visitor::{Hook, Visit, Visitor};
