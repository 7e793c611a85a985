// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry and task dispatch for the Strato resource manager.
//!
//! This crate ties the core contracts together: the [`PluginRegistry`]
//! indexes resource plugins and their task definitions, contains all
//! plugin-level failures at the dispatch boundary, and projects registered
//! plugins into UI-facing summaries. [`bootstrap`] wires the built-in
//! plugins in at process start and announces them over the event bus.

pub mod bootstrap;
pub mod registry;
pub mod summary;

pub use bootstrap::bootstrap;
pub use registry::{task_key, PluginRegistry};
pub use summary::{PluginDescriptor, PluginSummary, TaskDescriptor};
