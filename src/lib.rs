// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod asset;         // asset nodes + definition factory
pub mod config;        // config loading, validation, runtime builder
pub mod engine;        // traversers + comparators
pub mod errors;        // error handling
pub mod extensions;    // built-in extensions and test visitors
pub mod observability;
pub mod pipeline;      // load/process facade
pub mod traits;        // unified abstractions
