// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The pipeline facade: a loader that converges asset trees and a processor
//! that runs content visitors over them once.

pub mod builder;
pub mod facade;

pub use builder::PipelineBuilder;
pub use facade::Pipeline;
