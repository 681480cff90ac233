// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::asset::Attributes;
use crate::config::consts::{DEFAULT_MAX_PASSES, INPUTS_EXTENSION};
use crate::config::{deepest_input_chain, validate_asset_definitions};
use crate::errors::ConfigError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration structure for the asset pipeline.
///
/// This struct represents the complete configuration for a pipeline: how the
/// loader detects convergence, which built-in extensions contribute visitors,
/// and the asset definitions the factory builds trees from. It is typically
/// loaded from a YAML or TOML file.
///
/// # Fields
/// * `max_passes` - Loader pass bound (optional, defaults to 16)
/// * `comparison` - Fixed-point criterion (optional, defaults to structural)
/// * `extensions` - Built-in extensions to register, in order
/// * `assets` - Asset definitions keyed by logical path
///
/// # Example
/// ```yaml
/// max_passes: 8
/// comparison: structural
/// extensions:
///   - inputs
///   - filters
///   - name: concat
///     options:
///       separator: ";\n"
/// assets:
///   - path: js/app.js
///     inputs: [js/lib.js, js/main.js]
///     filters: [trim]
///   - path: js/lib.js
///     content: "var lib = {};"
///   - path: js/main.js
///     content: "lib.start();"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
    #[serde(default)]
    pub comparison: ComparisonMode,
    #[serde(default)]
    pub extensions: Vec<ExtensionConfig>,
    #[serde(default)]
    pub assets: Vec<AssetDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            comparison: ComparisonMode::default(),
            extensions: Vec::new(),
            assets: Vec::new(),
        }
    }
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

/// Criterion the loader uses to decide a pass changed nothing.
///
/// # Variants
/// * `Structural` - Keys, attributes and child order; content is ignored
/// * `Deep` - Everything, including content
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    #[default]
    Structural,
    Deep,
}

/// An entry in the `extensions` list: a bare name or a name with options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExtensionConfig {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        options: BTreeMap<String, Value>,
    },
}

impl ExtensionConfig {
    pub fn name(&self) -> &str {
        match self {
            ExtensionConfig::Name(name) => name,
            ExtensionConfig::Detailed { name, .. } => name,
        }
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        match self {
            ExtensionConfig::Name(_) => None,
            ExtensionConfig::Detailed { options, .. } => options.get(key),
        }
    }
}

/// Definition of a single asset.
///
/// # Fields
/// * `path` - Logical path, the asset's identity
/// * `content` - Inline content (optional)
/// * `inputs` - Logical paths this asset includes, in order
/// * `filters` - Filter names applied during processing, in order
/// * `attributes` - Extra attributes copied onto the node
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AssetDefinition {
    pub path: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub inputs: Vec<String>,
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Parse a config from text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, format)
}

/// Load and validate a config file
///
/// This function loads the configuration, checks the pass bound and
/// validates the asset definitions so that every tree the factory builds
/// is finite and acyclic.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Validate an already parsed config.
///
/// When the `inputs` extension is enabled the loader resolves one level of
/// inputs per pass, so the deepest input chain must fit within `max_passes`.
pub fn validate_config(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.max_passes == 0 {
        return Err(ConfigError::InvalidMaxPasses {
            max_passes: cfg.max_passes,
        });
    }

    validate_asset_definitions(&cfg.assets).map_err(ConfigError::Validation)?;

    if cfg.extensions.iter().any(|e| e.name() == INPUTS_EXTENSION) {
        if let Some((asset_path, depth)) = deepest_input_chain(&cfg.assets) {
            if depth + 1 > cfg.max_passes {
                return Err(ConfigError::InputDepthExceedsPasses {
                    asset_path: asset_path.to_string(),
                    depth,
                    max_passes: cfg.max_passes,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
extensions: [inputs, filters]
assets:
  - path: js/app.js
    inputs: [js/lib.js]
    filters: [trim]
  - path: js/lib.js
    content: "var lib = 1;"
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.max_passes, DEFAULT_MAX_PASSES);
        assert_eq!(cfg.comparison, ComparisonMode::Structural);
        assert_eq!(cfg.extensions.len(), 2);
        assert_eq!(cfg.extensions[0].name(), "inputs");
        assert_eq!(cfg.assets.len(), 2);
        assert_eq!(cfg.assets[0].inputs, vec!["js/lib.js"]);
        assert_eq!(cfg.assets[1].content.as_deref(), Some("var lib = 1;"));
    }

    #[test]
    fn parse_extension_with_options() {
        let yaml = r#"
comparison: deep
max_passes: 4
extensions:
  - name: concat
    options:
      separator: ";"
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        assert_eq!(cfg.comparison, ComparisonMode::Deep);
        assert_eq!(cfg.max_passes, 4);
        assert_eq!(cfg.extensions[0].name(), "concat");
        assert_eq!(cfg.extensions[0].option("separator"), Some(&json!(";")));
        assert!(cfg.assets.is_empty());
    }

    #[test]
    fn parse_asset_attributes() {
        let yaml = r#"
assets:
  - path: img/logo.png
    attributes:
      width: 120
      inline: true
"#;

        let cfg = parse_config(yaml, ConfigFormat::Yaml).unwrap();
        let attributes = &cfg.assets[0].attributes;
        assert_eq!(attributes.get("width"), Some(&json!(120)));
        assert_eq!(attributes.get("inline"), Some(&json!(true)));
    }

    #[test]
    fn parse_toml_config() {
        let toml = r#"
max_passes = 5
extensions = ["inputs", { name = "concat", options = { separator = "|" } }]

[[assets]]
path = "css/site.css"
inputs = ["css/reset.css"]

[[assets]]
path = "css/reset.css"
content = "* { margin: 0 }"
"#;

        let cfg = parse_config(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(cfg.max_passes, 5);
        assert_eq!(cfg.extensions[1].name(), "concat");
        assert_eq!(cfg.extensions[1].option("separator"), Some(&json!("|")));
        assert_eq!(cfg.assets[0].inputs, vec!["css/reset.css"]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.yaml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.yml")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("a.json")),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            r#"
assets:
  - path: a.js
    inputs: [b.js]
  - path: b.js
"#
        )
        .unwrap();

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.assets.len(), 2);
    }

    #[test]
    fn test_load_and_validate_cyclic_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            r#"
assets:
  - path: a.js
    inputs: [b.js]
  - path: b.js
    inputs: [a.js]
"#
        )
        .unwrap();

        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Cyclic asset inputs detected"));
    }

    #[test]
    fn test_load_and_validate_unresolved_input() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        write!(
            file,
            r#"
assets:
  - path: a.js
    inputs: [nonexistent.js]
"#
        )
        .unwrap();

        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("includes 'nonexistent.js' which is not defined"));
    }

    #[test]
    fn test_zero_max_passes_is_rejected() {
        let cfg = Config {
            max_passes: 0,
            ..Config::default()
        };

        assert!(matches!(
            validate_config(&cfg),
            Err(ConfigError::InvalidMaxPasses { max_passes: 0 })
        ));
    }

    fn chain_config(length: usize, extensions: Vec<ExtensionConfig>) -> Config {
        let assets = (0..length)
            .map(|i| AssetDefinition {
                path: format!("a{}", i),
                inputs: if i + 1 < length {
                    vec![format!("a{}", i + 1)]
                } else {
                    vec![]
                },
                ..Default::default()
            })
            .collect();

        Config {
            extensions,
            assets,
            ..Config::default()
        }
    }

    #[test]
    fn test_input_chain_deeper_than_pass_bound_is_rejected() {
        let cfg = chain_config(17, vec![ExtensionConfig::Name("inputs".to_string())]);

        match validate_config(&cfg) {
            Err(ConfigError::InputDepthExceedsPasses {
                asset_path,
                depth,
                max_passes,
            }) => {
                assert_eq!(asset_path, "a0");
                assert_eq!(depth, 16);
                assert_eq!(max_passes, DEFAULT_MAX_PASSES);
            }
            other => panic!("Expected InputDepthExceedsPasses, got {other:?}"),
        }
    }

    #[test]
    fn test_input_chain_within_pass_bound() {
        let test_cases = vec![
            ("fits exactly", chain_config(16, vec![ExtensionConfig::Name("inputs".to_string())])),
            ("inputs never resolved", chain_config(17, vec![])),
            (
                "raised bound",
                Config {
                    max_passes: 17,
                    ..chain_config(17, vec![ExtensionConfig::Name("inputs".to_string())])
                },
            ),
        ];

        for (name, cfg) in test_cases {
            assert!(validate_config(&cfg).is_ok(), "Test case '{}' should be valid", name);
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_config("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.yaml"));
    }
}
