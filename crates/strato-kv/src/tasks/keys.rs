// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-call key operations: read, write, delete.
//!
//! Each task makes exactly one external call and reports progress `1/1`
//! around it.

use async_trait::async_trait;
use serde_json::json;

use strato_core::{
    FieldKind, FormField, FormSchema, StratoError, TaskContext, TaskResult, TaskType,
};

fn key_schema(with_value: bool) -> FormSchema {
    let mut fields = vec![
        FormField::required("namespace_id", "Namespace ID", FieldKind::Text),
        FormField::required("key", "Key", FieldKind::Text),
    ];
    if with_value {
        fields.push(FormField::required("value", "Value", FieldKind::Textarea));
    }
    FormSchema::new(fields)
}

/// Reads one value from a namespace.
pub struct ReadKeyTask;

#[async_trait]
impl TaskType for ReadKeyTask {
    fn name(&self) -> &str {
        "read-key"
    }

    fn display_name(&self) -> &str {
        "Read key"
    }

    fn description(&self) -> &str {
        "Reads a single value from a key-value namespace"
    }

    fn config_schema(&self) -> FormSchema {
        key_schema(false)
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let namespace_id = ctx.require_str("namespace_id")?;
        let key = ctx.require_str("key")?;

        ctx.report("read", 1, 1);
        let value = ctx.api.read_value(&namespace_id, &key).await?;
        Ok(TaskResult::ok(json!({
            "key": key,
            "value": value,
        })))
    }
}

/// Writes one key-value pair into a namespace.
pub struct WriteKeyTask;

#[async_trait]
impl TaskType for WriteKeyTask {
    fn name(&self) -> &str {
        "write-key"
    }

    fn display_name(&self) -> &str {
        "Write key"
    }

    fn description(&self) -> &str {
        "Writes a single key-value pair into a namespace"
    }

    fn config_schema(&self) -> FormSchema {
        key_schema(true)
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let namespace_id = ctx.require_str("namespace_id")?;
        let key = ctx.require_str("key")?;
        let value = ctx.require_str("value")?;

        ctx.report("write", 1, 1);
        ctx.api.write_value(&namespace_id, &key, &value).await?;
        Ok(TaskResult::ok(json!({ "written": key })))
    }
}

/// Deletes one key from a namespace.
pub struct DeleteKeyTask;

#[async_trait]
impl TaskType for DeleteKeyTask {
    fn name(&self) -> &str {
        "delete-key"
    }

    fn display_name(&self) -> &str {
        "Delete key"
    }

    fn description(&self) -> &str {
        "Deletes a single key from a namespace"
    }

    fn config_schema(&self) -> FormSchema {
        key_schema(false)
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let namespace_id = ctx.require_str("namespace_id")?;
        let key = ctx.require_str("key")?;

        ctx.report("delete", 1, 1);
        ctx.api.delete_value(&namespace_id, &key).await?;
        Ok(TaskResult::ok(json!({ "deleted": key })))
    }
}
