// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its intended level with typed fields.
//!
//! * `engine` - Traversal and convergence events
//! * `pipeline` - Pipeline setup and asset lifecycle events
//! * `validation` - Definition validation errors

use tracing::Span;

pub mod engine;
pub mod pipeline;
pub mod validation;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
