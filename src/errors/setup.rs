// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while assembling a pipeline.

use thiserror::Error;

/// Registration attempted after the pipeline was finalized.
///
/// Setup errors are fatal: the builder that produced them has already handed
/// out its traversers and will not accept further changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Cannot add extension '{name}' after the pipeline is initialized")]
    ExtensionAfterInitialize { name: String },

    #[error("Cannot add visitor '{name}' after the pipeline is initialized")]
    VisitorAfterInitialize { name: String },

    #[error("Cannot set the asset factory after the pipeline is initialized")]
    FactoryAfterInitialize,

    #[error("Pipeline is already initialized")]
    AlreadyInitialized,
}
