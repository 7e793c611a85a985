// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task definitions exposed by the workers plugin.

pub mod manage;
pub mod provision;

pub use manage::{DeleteScriptTask, ListScriptsTask, QueryScriptTask};
pub use provision::ProvisionTask;
