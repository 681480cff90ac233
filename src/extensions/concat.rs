// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::asset::AssetNode;
use crate::config::consts::DEFAULT_CONCAT_SEPARATOR;
use crate::errors::VisitorError;
use crate::traits::{Extension, ExtensionContext, Hook, Visit, Visitor};

const HOOKS: &[Hook] = &[Hook::After];

/// Runs ahead of default-priority visitors so a bundle's own filters see
/// the concatenated content.
pub const CONCAT_PRIORITY: i32 = 10;

/// Processor visitor that builds a bundle's content from its children.
///
/// Only nodes with children and no content of their own are touched. Children
/// without content are skipped.
#[derive(Debug, Clone)]
pub struct ConcatVisitor {
    separator: String,
}

impl ConcatVisitor {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Visitor for ConcatVisitor {
    fn name(&self) -> &str {
        "concat"
    }

    fn hooks(&self) -> &'static [Hook] {
        HOOKS
    }

    fn priority(&self) -> i32 {
        CONCAT_PRIORITY
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        if node.content().is_some() {
            return Ok(Visit::Unchanged);
        }

        let parts: Vec<&str> = node.children().iter().filter_map(|c| c.content()).collect();
        if parts.is_empty() {
            return Ok(Visit::Unchanged);
        }

        Ok(Visit::Replace(
            node.clone().with_content(parts.join(self.separator.as_str())),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct ConcatExtension {
    separator: String,
}

impl ConcatExtension {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for ConcatExtension {
    fn default() -> Self {
        Self::with_separator(DEFAULT_CONCAT_SEPARATOR)
    }
}

impl Extension for ConcatExtension {
    fn name(&self) -> &str {
        "concat"
    }

    fn processor_visitors(&self, _ctx: &ExtensionContext<'_>) -> Vec<Arc<dyn Visitor>> {
        vec![Arc::new(ConcatVisitor::new(self.separator.as_str()))]
    }
}
