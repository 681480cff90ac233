// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::{ConcatExtension, FiltersExtension, InputsExtension};
use crate::config::ExtensionConfig;
use crate::errors::PipelineError;
use crate::traits::Extension;

/// Factory for the extensions that ship with the crate.
pub struct BuiltinExtensions;

impl BuiltinExtensions {
    /// Create an extension instance from configuration
    ///
    /// The entry's name determines which extension to create:
    /// - "inputs" -> InputsExtension
    /// - "filters" -> FiltersExtension
    /// - "concat" -> ConcatExtension (optional `separator` string)
    pub fn create(config: &ExtensionConfig) -> Result<Arc<dyn Extension>, PipelineError> {
        match config.name() {
            "inputs" => Ok(Arc::new(InputsExtension::new())),
            "filters" => Ok(Arc::new(FiltersExtension::new())),
            "concat" => match config.option("separator") {
                None => Ok(Arc::new(ConcatExtension::default())),
                Some(value) => {
                    let separator =
                        value
                            .as_str()
                            .ok_or_else(|| PipelineError::ExtensionInitialization {
                                name: "concat".to_string(),
                                reason: format!("separator must be a string, got {}", value),
                            })?;
                    Ok(Arc::new(ConcatExtension::with_separator(separator)))
                }
            },
            other => Err(PipelineError::UnknownExtension {
                name: other.to_string(),
            }),
        }
    }

    /// List all built-in extension names
    pub fn list_available() -> Vec<&'static str> {
        vec!["inputs", "filters", "concat"]
    }

    pub fn is_available(name: &str) -> bool {
        Self::list_available().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_create_every_listed_extension() {
        for name in BuiltinExtensions::list_available() {
            let extension = BuiltinExtensions::create(&ExtensionConfig::Name(name.to_string()))
                .unwrap_or_else(|e| panic!("Failed to create '{}': {}", name, e));
            assert_eq!(extension.name(), name);
        }
    }

    #[test]
    fn test_unknown_extension() {
        let result = BuiltinExtensions::create(&ExtensionConfig::Name("sprites".to_string()));

        match result {
            Err(PipelineError::UnknownExtension { name }) => assert_eq!(name, "sprites"),
            Err(other) => panic!("Expected UnknownExtension, got {other:?}"),
            Ok(_) => panic!("Expected UnknownExtension"),
        }
        assert!(!BuiltinExtensions::is_available("sprites"));
    }

    #[test]
    fn test_concat_separator_must_be_a_string() {
        let config = ExtensionConfig::Detailed {
            name: "concat".to_string(),
            options: BTreeMap::from([("separator".to_string(), json!(3))]),
        };

        let result = BuiltinExtensions::create(&config);

        assert!(matches!(
            result,
            Err(PipelineError::ExtensionInitialization { ref name, .. }) if name == "concat"
        ));
    }
}
