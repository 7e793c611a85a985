// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the Strato plugin architecture.
//!
//! All traits use `#[async_trait]` for dynamic dispatch compatibility.

pub mod cloud;
pub mod plugin;
pub mod task;

pub use cloud::CloudApi;
pub use plugin::ResourcePlugin;
pub use task::{ProgressFn, TaskContext, TaskType};
