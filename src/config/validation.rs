// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Validation of asset definitions.
//!
//! The traversal engine assumes every tree it walks is finite and acyclic and
//! never checks. Trees built by the definition factory inherit their shape
//! from the `inputs` graph, so that graph is validated up front:
//!
//! 1. **Path Validation**: Every definition has a non-empty, unique path
//! 2. **Reference Validation**: Every input points to a defined asset
//! 3. **Cycle Detection**: DFS over the input graph, reporting the cycle path
//!
//! Cycle detection needs a structurally valid graph, so it only runs when the
//! first two stages pass.
//!
//! # Examples
//!
//! ```rust
//! use asset_pipeline::config::{validate_asset_definitions, AssetDefinition};
//! use asset_pipeline::errors::ValidationError;
//!
//! let definitions = vec![
//!     AssetDefinition {
//!         path: "js/app.js".to_string(),
//!         inputs: vec!["js/app.js".to_string()],
//!         ..Default::default()
//!     },
//! ];
//!
//! match validate_asset_definitions(&definitions) {
//!     Err(errors) => assert!(matches!(errors[0], ValidationError::CyclicInput { .. })),
//!     Ok(()) => unreachable!("self-inclusion is a cycle"),
//! }
//! ```

use std::collections::{HashMap, HashSet};

use crate::config::AssetDefinition;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    CyclicInputDetected, DuplicateAssetPath, UnresolvedInput, ValidationCompleted,
    ValidationFailed,
};
use crate::observability::messages::StructuredLog;

/// Validates asset definitions for structural integrity.
///
/// Errors are accumulated so all path and reference problems are reported
/// at once; cycle detection is skipped when any of those are found.
pub fn validate_asset_definitions(
    definitions: &[AssetDefinition],
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(path_errors) = validate_unique_paths(definitions) {
        errors.extend(path_errors);
    }

    if let Err(unresolved_errors) = validate_input_references(definitions) {
        errors.extend(unresolved_errors);
    }

    if errors.is_empty() {
        if let Err(cycle_errors) = validate_acyclic_inputs(definitions) {
            errors.extend(cycle_errors);
        }
    }

    if errors.is_empty() {
        ValidationCompleted {
            asset_count: definitions.len(),
        }
        .log();
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

fn validate_unique_paths(definitions: &[AssetDefinition]) -> Result<(), Vec<ValidationError>> {
    let mut seen_paths = HashSet::new();
    let mut errors = Vec::new();

    for (index, definition) in definitions.iter().enumerate() {
        if definition.path.is_empty() {
            errors.push(ValidationError::EmptyAssetPath { index });
        } else if !seen_paths.insert(definition.path.as_str()) {
            DuplicateAssetPath {
                asset_path: &definition.path,
            }
            .log();
            errors.push(ValidationError::DuplicateAssetPath {
                asset_path: definition.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_input_references(definitions: &[AssetDefinition]) -> Result<(), Vec<ValidationError>> {
    let asset_paths: HashSet<&str> = definitions.iter().map(|d| d.path.as_str()).collect();
    let mut errors = Vec::new();

    for definition in definitions {
        for input in &definition.inputs {
            if !asset_paths.contains(input.as_str()) {
                UnresolvedInput {
                    asset_path: &definition.path,
                    missing_input: input,
                }
                .log();
                errors.push(ValidationError::UnresolvedInput {
                    asset_path: definition.path.clone(),
                    missing_input: input.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the input graph using "three colors" DFS.
///
/// Edges run from an asset to each of its inputs. Definitions are explored
/// in declaration order, so the reported cycle is deterministic.
fn validate_acyclic_inputs(definitions: &[AssetDefinition]) -> Result<(), Vec<ValidationError>> {
    let graph: HashMap<&str, Vec<&str>> = definitions
        .iter()
        .map(|d| (d.path.as_str(), d.inputs.iter().map(String::as_str).collect()))
        .collect();

    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    for definition in definitions {
        let asset_path = definition.path.as_str();
        if !visited.contains(asset_path) {
            if let Some(cycle) =
                dfs_cycle_detection(asset_path, &graph, &mut visited, &mut rec_stack, &mut path)
            {
                CyclicInputDetected { cycle: &cycle }.log();
                return Err(vec![ValidationError::CyclicInput {
                    cycle: cycle.iter().map(|s| s.to_string()).collect(),
                }]);
            }
        }
    }

    Ok(())
}

/// Finds the asset with the longest chain of inputs below it.
///
/// Returns the asset path and the chain length in edges, so a lone asset has
/// depth 0. The loader resolves one level per pass, so fully loading that
/// asset takes `depth + 1` passes. Ties go to the first asset declared.
/// Expects an acyclic graph; an edge back into the current chain counts as
/// depth 0.
pub fn deepest_input_chain(definitions: &[AssetDefinition]) -> Option<(&str, usize)> {
    let graph: HashMap<&str, Vec<&str>> = definitions
        .iter()
        .map(|d| (d.path.as_str(), d.inputs.iter().map(String::as_str).collect()))
        .collect();

    let mut depths = HashMap::new();
    let mut in_progress = HashSet::new();
    let mut deepest: Option<(&str, usize)> = None;

    for definition in definitions {
        let path = definition.path.as_str();
        let depth = chain_depth(path, &graph, &mut depths, &mut in_progress);
        if deepest.map_or(true, |(_, max)| depth > max) {
            deepest = Some((path, depth));
        }
    }

    deepest
}

fn chain_depth<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    depths: &mut HashMap<&'a str, usize>,
    in_progress: &mut HashSet<&'a str>,
) -> usize {
    if let Some(&depth) = depths.get(node) {
        return depth;
    }
    if !in_progress.insert(node) {
        return 0;
    }

    let mut depth = 0;
    if let Some(inputs) = graph.get(node) {
        for &input in inputs {
            depth = depth.max(chain_depth(input, graph, depths, in_progress) + 1);
        }
    }

    in_progress.remove(node);
    depths.insert(node, depth);
    depth
}

/// DFS step: gray nodes live in `rec_stack`, black nodes in `visited` only.
/// Reaching a gray node closes a cycle, which is cut out of `path`.
fn dfs_cycle_detection<'a>(
    node: &'a str,
    graph: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    rec_stack: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> Option<Vec<&'a str>> {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(inputs) = graph.get(node) {
        for &input in inputs {
            if !visited.contains(input) {
                if let Some(cycle) = dfs_cycle_detection(input, graph, visited, rec_stack, path) {
                    return Some(cycle);
                }
            } else if rec_stack.contains(input) {
                let cycle_start = path.iter().position(|&p| p == input).unwrap_or(0);
                let mut cycle = path[cycle_start..].to_vec();
                cycle.push(input);
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str, inputs: Vec<&str>) -> AssetDefinition {
        AssetDefinition {
            path: path.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_definitions() {
        let test_cases = vec![
            ("empty", vec![]),
            ("single asset", vec![asset("a", vec![])]),
            (
                "linear chain",
                vec![asset("a", vec!["b"]), asset("b", vec!["c"]), asset("c", vec![])],
            ),
            (
                "shared input",
                vec![
                    asset("a", vec!["b", "c"]),
                    asset("b", vec!["d"]),
                    asset("c", vec!["d"]),
                    asset("d", vec![]),
                ],
            ),
        ];

        for (name, definitions) in test_cases {
            assert!(
                validate_asset_definitions(&definitions).is_ok(),
                "Test case '{}' should be valid",
                name
            );
        }
    }

    #[test]
    fn test_duplicate_paths() {
        let errors =
            validate_asset_definitions(&[asset("a", vec![]), asset("a", vec![])]).unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::DuplicateAssetPath {
                asset_path: "a".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_path() {
        let errors = validate_asset_definitions(&[asset("a", vec![]), asset("", vec![])]).unwrap_err();

        assert_eq!(errors, vec![ValidationError::EmptyAssetPath { index: 1 }]);
    }

    #[test]
    fn test_unresolved_input() {
        let errors = validate_asset_definitions(&[asset("a", vec!["missing"])]).unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::UnresolvedInput {
                asset_path: "a".to_string(),
                missing_input: "missing".to_string(),
            }]
        );
    }

    #[test]
    fn test_self_inclusion_cycle() {
        let errors = validate_asset_definitions(&[asset("a", vec!["a"])]).unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::CyclicInput {
                cycle: vec!["a".to_string(), "a".to_string()]
            }]
        );
    }

    #[test]
    fn test_complex_cycle_path() {
        let definitions = vec![
            asset("a", vec!["b"]),
            asset("b", vec!["c"]),
            asset("c", vec!["d"]),
            asset("d", vec!["b"]),
        ];

        let errors = validate_asset_definitions(&definitions).unwrap_err();

        assert_eq!(
            errors,
            vec![ValidationError::CyclicInput {
                cycle: vec!["b", "c", "d", "b"].into_iter().map(String::from).collect()
            }]
        );
    }

    #[test]
    fn test_deepest_input_chain() {
        let test_cases = vec![
            ("empty", vec![], None),
            ("single asset", vec![asset("a", vec![])], Some(("a", 0))),
            (
                "declared after its root",
                vec![asset("c", vec![]), asset("a", vec!["b"]), asset("b", vec!["c"])],
                Some(("a", 2)),
            ),
            (
                "diamond counts the longer side",
                vec![
                    asset("top", vec!["left", "right"]),
                    asset("left", vec!["shared"]),
                    asset("right", vec![]),
                    asset("shared", vec![]),
                ],
                Some(("top", 2)),
            ),
            (
                "tie goes to first declared",
                vec![asset("x", vec!["y"]), asset("y", vec![]), asset("p", vec!["q"]), asset("q", vec![])],
                Some(("x", 1)),
            ),
        ];

        for (name, definitions, expected) in test_cases {
            assert_eq!(
                deepest_input_chain(&definitions),
                expected,
                "Test case '{}'",
                name
            );
        }
    }

    #[test]
    fn test_cycle_detection_skipped_with_reference_errors() {
        let definitions = vec![
            asset("a", vec!["b", "nonexistent"]),
            asset("b", vec!["a"]),
            asset("b", vec![]),
        ];

        let errors = validate_asset_definitions(&definitions).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| !matches!(e, ValidationError::CyclicInput { .. })));
    }
}
