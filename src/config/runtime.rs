// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::asset::DefinitionFactory;
use crate::config::{validate_config, Config};
use crate::errors::PipelineError;
use crate::extensions::BuiltinExtensions;
use crate::pipeline::{Pipeline, PipelineBuilder};

/// Pipeline runtime builder - assembles a ready pipeline from configuration.
///
/// The `RuntimeBuilder` validates the configuration once, builds a
/// [`DefinitionFactory`] over its assets, registers the configured built-in
/// extensions in order and applies the loader settings.
///
/// # Examples
///
/// ```
/// use asset_pipeline::config::{parse_config, ConfigFormat, RuntimeBuilder};
///
/// let config = parse_config(
///     r#"
/// extensions: [inputs, concat]
/// assets:
///   - path: bundle.js
///     inputs: [a.js, b.js]
///   - path: a.js
///     content: "a();"
///   - path: b.js
///     content: "b();"
/// "#,
///     ConfigFormat::Yaml,
/// )
/// .unwrap();
///
/// let pipeline = RuntimeBuilder::from_config(&config).unwrap();
/// let bundle = pipeline.build_asset("bundle.js").unwrap();
///
/// assert_eq!(bundle.content(), Some("a();\nb();"));
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build a complete pipeline from configuration.
    ///
    /// # Arguments
    /// * `cfg` - Extensions, loader settings and asset definitions
    ///
    /// # Returns
    /// An initialized [`Pipeline`], or the first configuration or setup error
    pub fn from_config(cfg: &Config) -> Result<Pipeline, PipelineError> {
        validate_config(cfg)?;
        let factory = DefinitionFactory::from_validated(cfg.assets.clone());

        let mut builder = PipelineBuilder::new()
            .with_max_passes(cfg.max_passes)
            .with_comparison(cfg.comparison);
        builder.set_factory(Arc::new(factory))?;

        for extension in &cfg.extensions {
            builder.add_extension(BuiltinExtensions::create(extension)?)?;
        }

        builder.build()
    }
}
