// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::json;
use std::sync::Arc;

use crate::asset::AssetNode;
use crate::config::consts::{APPLIED_FILTERS_ATTRIBUTE, FILTERS_ATTRIBUTE};
use crate::errors::VisitorError;
use crate::traits::{Extension, ExtensionContext, Hook, Visit, Visitor};

const HOOKS: &[Hook] = &[Hook::After];

/// Text transformations that can be named in an asset's `filters` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFilter {
    Upper,
    Lower,
    Trim,
    Reverse,
    StripBlankLines,
}

impl TextFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "upper" => Some(TextFilter::Upper),
            "lower" => Some(TextFilter::Lower),
            "trim" => Some(TextFilter::Trim),
            "reverse" => Some(TextFilter::Reverse),
            "strip_blank_lines" => Some(TextFilter::StripBlankLines),
            _ => None,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        match self {
            TextFilter::Upper => input.to_uppercase(),
            TextFilter::Lower => input.to_lowercase(),
            TextFilter::Trim => input.trim().to_string(),
            TextFilter::Reverse => input.chars().rev().collect(),
            TextFilter::StripBlankLines => input
                .lines()
                .filter(|line| !line.trim().is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Processor visitor applying a node's filters to its content.
///
/// Filters run once per node: the names applied are recorded in
/// `applied_filters`, and a node that already carries that attribute is
/// skipped. Nodes without content are left alone.
#[derive(Debug, Default)]
pub struct FilterVisitor;

impl Visitor for FilterVisitor {
    fn name(&self) -> &str {
        "filter"
    }

    fn hooks(&self) -> &'static [Hook] {
        HOOKS
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        let names = node.string_list(FILTERS_ATTRIBUTE);
        if names.is_empty() || node.attribute(APPLIED_FILTERS_ATTRIBUTE).is_some() {
            return Ok(Visit::Unchanged);
        }
        let Some(content) = node.content() else {
            return Ok(Visit::Unchanged);
        };

        let mut output = content.to_string();
        for name in &names {
            let filter = TextFilter::from_name(name).ok_or_else(|| {
                VisitorError::new(format!(
                    "Asset '{}' names unknown filter '{}'",
                    node.key(),
                    name
                ))
            })?;
            output = filter.apply(&output);
        }

        Ok(Visit::Replace(
            node.clone()
                .with_content(output)
                .with_attribute(APPLIED_FILTERS_ATTRIBUTE, json!(names)),
        ))
    }
}

/// Registers [`FilterVisitor`] as a processor visitor.
#[derive(Debug, Default)]
pub struct FiltersExtension;

impl FiltersExtension {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for FiltersExtension {
    fn name(&self) -> &str {
        "filters"
    }

    fn processor_visitors(&self, _ctx: &ExtensionContext<'_>) -> Vec<Arc<dyn Visitor>> {
        vec![Arc::new(FilterVisitor)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_filters(content: &str, filters: &[&str]) -> AssetNode {
        AssetNode::new("a.txt")
            .with_content(content)
            .with_attribute(FILTERS_ATTRIBUTE, json!(filters))
    }

    fn replaced(visit: Visit) -> AssetNode {
        match visit {
            Visit::Replace(node) => node,
            Visit::Unchanged => panic!("Expected the node to be replaced"),
        }
    }

    #[test]
    fn test_text_filters() {
        let test_cases = vec![
            (TextFilter::Upper, "Hello", "HELLO"),
            (TextFilter::Lower, "Hello", "hello"),
            (TextFilter::Trim, "  padded \n", "padded"),
            (TextFilter::Reverse, "abc", "cba"),
            (TextFilter::StripBlankLines, "a\n\n  \nb\n", "a\nb"),
        ];

        for (filter, input, expected) in test_cases {
            assert_eq!(filter.apply(input), expected, "filter {:?}", filter);
        }
    }

    #[test]
    fn test_filters_apply_in_declared_order() {
        let node = with_filters("  abc  ", &["trim", "reverse", "upper"]);

        let result = replaced(FilterVisitor.visit(Hook::After, &node).unwrap());

        assert_eq!(result.content(), Some("CBA"));
        assert_eq!(
            result.string_list(APPLIED_FILTERS_ATTRIBUTE),
            vec!["trim", "reverse", "upper"]
        );
    }

    #[test]
    fn test_filters_run_once() {
        let node = with_filters("abc", &["reverse"]);
        let once = replaced(FilterVisitor.visit(Hook::After, &node).unwrap());

        assert_eq!(FilterVisitor.visit(Hook::After, &once).unwrap(), Visit::Unchanged);
    }

    #[test]
    fn test_nodes_without_filters_or_content_are_unchanged() {
        let plain = AssetNode::new("a.txt").with_content("abc");
        let empty = AssetNode::new("b.txt").with_attribute(FILTERS_ATTRIBUTE, json!(["upper"]));

        assert_eq!(FilterVisitor.visit(Hook::After, &plain).unwrap(), Visit::Unchanged);
        assert_eq!(FilterVisitor.visit(Hook::After, &empty).unwrap(), Visit::Unchanged);
    }

    #[test]
    fn test_unknown_filter_fails() {
        let node = with_filters("abc", &["upper", "minify"]);

        let err = FilterVisitor.visit(Hook::After, &node).unwrap_err();

        assert_eq!(err.message(), "Asset 'a.txt' names unknown filter 'minify'");
    }
}
