// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::asset::AssetNode;
use crate::config::consts::{INPUTS_ATTRIBUTE, INPUTS_EXTENSION};
use crate::errors::VisitorError;
use crate::traits::{
    AssetFactory, AssetOptions, Extension, ExtensionContext, Hook, Visit, Visitor,
};

const HOOKS: &[Hook] = &[Hook::After];

/// Loader visitor that turns declared inputs into child nodes.
///
/// Runs after a node's children, so a freshly created input is not visited
/// until the next pass; its own inputs are resolved then. Each pass grows the
/// tree by one level until nothing is left to resolve, so a chain `depth`
/// levels deep needs `depth + 1` passes.
///
/// Inputs are not shared. An input named by several assets is expanded again
/// under every parent, so stacked diamonds grow to 2^depth nodes, and every
/// pass clones the tree it rewrites.
pub struct InputResolver {
    factory: Arc<dyn AssetFactory>,
}

impl InputResolver {
    pub fn new(factory: Arc<dyn AssetFactory>) -> Self {
        Self { factory }
    }
}

impl Visitor for InputResolver {
    fn name(&self) -> &str {
        "input_resolver"
    }

    fn hooks(&self) -> &'static [Hook] {
        HOOKS
    }

    fn visit(&self, _hook: Hook, node: &AssetNode) -> Result<Visit, VisitorError> {
        let missing: Vec<&str> = node
            .string_list(INPUTS_ATTRIBUTE)
            .into_iter()
            .filter(|input| !node.has_child(input))
            .collect();

        if missing.is_empty() {
            return Ok(Visit::Unchanged);
        }

        let mut resolved = node.clone();
        for input in missing {
            let child = self
                .factory
                .create_asset(&AssetOptions::for_path(input))
                .map_err(|e| {
                    VisitorError::with_source(
                        format!("Asset '{}' could not resolve input '{}'", node.key(), input),
                        e,
                    )
                })?;
            resolved.push_child(child);
        }

        Ok(Visit::Replace(resolved))
    }
}

/// Registers [`InputResolver`] as a loader visitor.
#[derive(Debug, Default)]
pub struct InputsExtension;

impl InputsExtension {
    pub fn new() -> Self {
        Self
    }
}

impl Extension for InputsExtension {
    fn name(&self) -> &str {
        INPUTS_EXTENSION
    }

    fn loader_visitors(&self, ctx: &ExtensionContext<'_>) -> Vec<Arc<dyn Visitor>> {
        vec![Arc::new(InputResolver::new(ctx.factory()))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::DefinitionFactory;
    use crate::config::{AssetDefinition, ExtensionMap};
    use std::error::Error;

    fn factory() -> Arc<dyn AssetFactory> {
        Arc::new(
            DefinitionFactory::new(vec![
                AssetDefinition {
                    path: "app.js".to_string(),
                    inputs: vec!["lib.js".to_string(), "main.js".to_string()],
                    ..Default::default()
                },
                AssetDefinition {
                    path: "lib.js".to_string(),
                    inputs: vec!["vendor.js".to_string()],
                    ..Default::default()
                },
                AssetDefinition {
                    path: "main.js".to_string(),
                    ..Default::default()
                },
                AssetDefinition {
                    path: "vendor.js".to_string(),
                    ..Default::default()
                },
            ])
            .unwrap(),
        )
    }

    fn child_keys(node: &AssetNode) -> Vec<&str> {
        node.children().iter().map(|c| c.key().as_str()).collect()
    }

    #[test]
    fn test_resolves_declared_inputs_in_order() {
        let factory = factory();
        let resolver = InputResolver::new(factory.clone());
        let root = factory.create_asset(&AssetOptions::for_path("app.js")).unwrap();

        let resolved = match resolver.visit(Hook::After, &root).unwrap() {
            Visit::Replace(node) => node,
            Visit::Unchanged => panic!("Expected inputs to be resolved"),
        };

        assert_eq!(child_keys(&resolved), vec!["lib.js", "main.js"]);
        // One level per call
        assert!(resolved.children()[0].children().is_empty());
    }

    #[test]
    fn test_resolved_node_is_left_unchanged() {
        let factory = factory();
        let resolver = InputResolver::new(factory.clone());
        let root = factory
            .create_asset(&AssetOptions::for_path("main.js"))
            .unwrap();

        assert_eq!(resolver.visit(Hook::After, &root).unwrap(), Visit::Unchanged);

        let lib = factory.create_asset(&AssetOptions::for_path("lib.js")).unwrap();
        let lib = lib.with_child(AssetNode::new("vendor.js"));
        assert_eq!(resolver.visit(Hook::After, &lib).unwrap(), Visit::Unchanged);
    }

    #[test]
    fn test_unknown_input_is_a_visitor_error() {
        let resolver = InputResolver::new(factory());
        let node = AssetNode::new("orphan.js")
            .with_attribute(INPUTS_ATTRIBUTE, serde_json::json!(["ghost.js"]));

        let err = resolver.visit(Hook::After, &node).unwrap_err();

        assert_eq!(
            err.message(),
            "Asset 'orphan.js' could not resolve input 'ghost.js'"
        );
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("Unknown asset 'ghost.js'".to_string())
        );
    }

    #[test]
    fn test_extension_contributes_one_loader_visitor() {
        let factory = factory();
        let extensions = ExtensionMap::new();
        let ctx = ExtensionContext::new(&factory, &extensions);
        let extension = InputsExtension::new();

        let loaders = extension.loader_visitors(&ctx);

        assert_eq!(extension.name(), "inputs");
        assert_eq!(loaders.len(), 1);
        assert_eq!(loaders[0].name(), "input_resolver");
        assert!(extension.processor_visitors(&ctx).is_empty());
    }
}
