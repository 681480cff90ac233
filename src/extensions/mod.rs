// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Built-in extensions and the visitors they contribute.
//!
//! - `inputs`: loader visitor resolving declared inputs into children
//! - `filters`: processor visitor applying text filters to content
//! - `concat`: processor visitor building bundle content from children

pub mod catalogue;
pub mod concat;
pub mod filters;
pub mod inputs;
pub mod stub;

pub use catalogue::BuiltinExtensions;
pub use concat::{ConcatExtension, ConcatVisitor};
pub use filters::{FilterVisitor, FiltersExtension, TextFilter};
pub use inputs::{InputResolver, InputsExtension};
