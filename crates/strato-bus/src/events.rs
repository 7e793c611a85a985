// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of system event kinds and their payload shapes.
//!
//! Kinds are enumerated at compile time and are not extensible at runtime.
//! Each kind pairs with exactly one payload struct; payloads are transient
//! and never stored by the bus itself.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use strato_core::types::{JobId, TaskProgress};

/// The named kind of a system event, matching its wire name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum EventKind {
    #[strum(serialize = "job:created")]
    #[serde(rename = "job:created")]
    JobCreated,
    #[strum(serialize = "job:completed")]
    #[serde(rename = "job:completed")]
    JobCompleted,
    #[strum(serialize = "job:failed")]
    #[serde(rename = "job:failed")]
    JobFailed,
    #[strum(serialize = "task:started")]
    #[serde(rename = "task:started")]
    TaskStarted,
    #[strum(serialize = "task:progress")]
    #[serde(rename = "task:progress")]
    TaskProgress,
    #[strum(serialize = "task:completed")]
    #[serde(rename = "task:completed")]
    TaskCompleted,
    #[strum(serialize = "account:changed")]
    #[serde(rename = "account:changed")]
    AccountChanged,
    #[strum(serialize = "account:verified")]
    #[serde(rename = "account:verified")]
    AccountVerified,
    #[strum(serialize = "plugin:registered")]
    #[serde(rename = "plugin:registered")]
    PluginRegistered,
    #[strum(serialize = "plugin:unregistered")]
    #[serde(rename = "plugin:unregistered")]
    PluginUnregistered,
    #[strum(serialize = "system:ready")]
    #[serde(rename = "system:ready")]
    SystemReady,
    #[strum(serialize = "system:shutdown")]
    #[serde(rename = "system:shutdown")]
    SystemShutdown,
}

/// A lifecycle occurrence: one variant per [`EventKind`], each carrying that
/// kind's fixed payload shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum SystemEvent {
    #[serde(rename = "job:created")]
    JobCreated { job_id: JobId, task_key: String },
    #[serde(rename = "job:completed")]
    JobCompleted { job_id: JobId, success: bool },
    #[serde(rename = "job:failed")]
    JobFailed { job_id: JobId, error: String },
    #[serde(rename = "task:started")]
    TaskStarted { job_id: JobId, task_key: String },
    #[serde(rename = "task:progress")]
    TaskProgress {
        job_id: JobId,
        progress: TaskProgress,
    },
    #[serde(rename = "task:completed")]
    TaskCompleted {
        job_id: JobId,
        task_key: String,
        success: bool,
    },
    #[serde(rename = "account:changed")]
    AccountChanged { account_id: String },
    #[serde(rename = "account:verified")]
    AccountVerified {
        account_id: String,
        subdomain: String,
    },
    #[serde(rename = "plugin:registered")]
    PluginRegistered {
        resource_type: String,
        task_count: usize,
    },
    #[serde(rename = "plugin:unregistered")]
    PluginUnregistered { resource_type: String },
    #[serde(rename = "system:ready")]
    SystemReady { plugin_count: usize },
    #[serde(rename = "system:shutdown")]
    SystemShutdown,
}

impl SystemEvent {
    /// The kind of this event, used for subscription lookup.
    pub fn kind(&self) -> EventKind {
        match self {
            SystemEvent::JobCreated { .. } => EventKind::JobCreated,
            SystemEvent::JobCompleted { .. } => EventKind::JobCompleted,
            SystemEvent::JobFailed { .. } => EventKind::JobFailed,
            SystemEvent::TaskStarted { .. } => EventKind::TaskStarted,
            SystemEvent::TaskProgress { .. } => EventKind::TaskProgress,
            SystemEvent::TaskCompleted { .. } => EventKind::TaskCompleted,
            SystemEvent::AccountChanged { .. } => EventKind::AccountChanged,
            SystemEvent::AccountVerified { .. } => EventKind::AccountVerified,
            SystemEvent::PluginRegistered { .. } => EventKind::PluginRegistered,
            SystemEvent::PluginUnregistered { .. } => EventKind::PluginUnregistered,
            SystemEvent::SystemReady { .. } => EventKind::SystemReady,
            SystemEvent::SystemShutdown => EventKind::SystemShutdown,
        }
    }
}
