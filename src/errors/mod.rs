// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod pipeline;
mod setup;
mod traversal;

pub use config::{ConfigError, ValidationError};
pub use pipeline::{FactoryError, Phase, PipelineError};
pub use setup::SetupError;
pub use traversal::{TraversalError, VisitorError};
