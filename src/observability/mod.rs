// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout the asset pipeline. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between log lines and spans
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - Traversal passes, node replacement and convergence
//! * `messages::pipeline` - Extension setup and asset load/process events
//! * `messages::validation` - Asset definition validation errors
//!
//! # Usage
//!
//! ```rust
//! use asset_pipeline::observability::messages::engine::ConvergenceReached;
//! use std::time::Duration;
//!
//! let msg = ConvergenceReached {
//!     root: "js/app.js",
//!     passes: 2,
//!     duration: Duration::from_millis(3),
//! };
//!
//! tracing::info!("{}", msg);
//! ```

pub mod messages;
