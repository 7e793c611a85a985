// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task definitions and the per-invocation execution context.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StratoError;
use crate::forms::FormSchema;
use crate::traits::cloud::CloudApi;
use crate::types::{AccountInfo, JobId, TaskId, TaskProgress, TaskResult};

/// Progress-reporting callback invoked by tasks as they advance.
pub type ProgressFn = Arc<dyn Fn(TaskProgress) + Send + Sync>;

/// Ephemeral per-invocation bundle handed to exactly one `execute` call.
///
/// Never persisted; the context is consumed by value and discarded when the
/// task returns.
pub struct TaskContext {
    /// The external cloud API capability.
    pub api: Arc<dyn CloudApi>,
    pub task_id: TaskId,
    pub job_id: JobId,
    /// Account identity, including the subdomain used for script URLs.
    pub account: AccountInfo,
    /// Resolved task configuration as submitted by the caller.
    pub config: serde_json::Value,
    /// Advisory progress callback.
    pub progress: ProgressFn,
}

impl TaskContext {
    /// Reports entering a step. Advisory only; failures cannot occur here.
    pub fn report(&self, step: &str, current: u32, total: u32) {
        (self.progress)(TaskProgress {
            step: step.to_string(),
            current,
            total,
        });
    }

    /// Extracts a required string field from the task configuration.
    pub fn require_str(&self, field: &str) -> Result<String, StratoError> {
        self.config
            .get(field)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                StratoError::TaskConfig(format!("missing required config field: {field}"))
            })
    }

    /// Extracts an optional string field from the task configuration.
    pub fn optional_str(&self, field: &str) -> Option<String> {
        self.config
            .get(field)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

impl std::fmt::Debug for TaskContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskContext")
            .field("task_id", &self.task_id)
            .field("job_id", &self.job_id)
            .field("account", &self.account)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// A named, schema-described unit of work exposed by a resource plugin.
///
/// The `name` is unique within the owning plugin; combined with the plugin's
/// resource type it forms the globally unique dispatch key
/// `resource_type:name`.
#[async_trait]
pub trait TaskType: Send + Sync + 'static {
    /// Task type name, unique within the owning plugin.
    fn name(&self) -> &str;

    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Schema of the configuration fields this task accepts.
    fn config_schema(&self) -> FormSchema;

    /// Runs the task to completion.
    ///
    /// Errors returned here are converted into failed [`TaskResult`]s at the
    /// registry's dispatch boundary; they never propagate further up.
    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError>;
}
