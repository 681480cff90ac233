// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod consts;
mod extension_map;
mod loader;
mod runtime;
mod validation;


pub use extension_map::ExtensionMap;
pub use loader::{
    load_and_validate_config, load_config, parse_config, validate_config, AssetDefinition,
    ComparisonMode, Config, ConfigFormat, ExtensionConfig,
};
pub use runtime::RuntimeBuilder;
pub use validation::{deepest_input_chain, validate_asset_definitions};
