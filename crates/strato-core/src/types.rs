// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across plugin traits and the Strato core.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a provisioning job (one or more task executions).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Unique identifier for a single task execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

/// CRUD capabilities a resource plugin may provide.
///
/// `List` is mandatory for every plugin; the rest are optional and callers
/// must check [`capabilities`](crate::traits::ResourcePlugin::capabilities)
/// before invoking the corresponding operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Capability {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// Account identity bundle carried by every task context.
///
/// `subdomain` is the account's workers subdomain, used to derive
/// deterministic script URLs after deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_id: String,
    pub subdomain: String,
}

/// The uniform outcome of a task execution.
///
/// This is the sole outcome channel: the registry's dispatch boundary
/// converts every task-level failure into a failed `TaskResult`, so callers
/// above it never see a raw error from plugin code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TaskResult {
    /// A successful result carrying the given payload.
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed result carrying an error message.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// An advisory progress report emitted during task execution.
///
/// Monotonicity is not enforced; the bundled plugins always report
/// non-decreasing `current` against a fixed `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProgress {
    /// Human-readable label for the step being entered (e.g. "upload").
    pub step: String,
    pub current: u32,
    pub total: u32,
}

// --- Cloud API value types ---

/// A deployed (or shell) compute script as reported by the cloud API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<String>,
}

/// A freshly registered script shell, not yet carrying any content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptShell {
    pub id: String,
}

/// An uploaded, versioned copy of a script's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptVersion {
    pub id: String,
}

/// An activation of a specific script version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
}

/// A key-value namespace as reported by the cloud API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceInfo {
    pub id: String,
    pub title: String,
}

/// One entry of a bulk key-value write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KvPair {
    pub key: String,
    pub value: String,
}
