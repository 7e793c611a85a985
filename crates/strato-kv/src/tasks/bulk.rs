// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk mutation tasks.
//!
//! The item list arrives as a JSON string inside the task configuration.
//! Parsing happens before anything else: a malformed payload returns a
//! failed result directly from the task, with zero external calls made.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use strato_core::types::KvPair;
use strato_core::{
    FieldKind, FormField, FormSchema, StratoError, TaskContext, TaskResult, TaskType,
};

fn bulk_schema(field: &str, label: &str, help: &str) -> FormSchema {
    let mut payload = FormField::required(field, label, FieldKind::Textarea);
    payload.help = Some(help.to_string());
    FormSchema::new(vec![
        FormField::required("namespace_id", "Namespace ID", FieldKind::Text),
        payload,
    ])
}

/// Writes a serialized list of key-value pairs in one bulk call.
pub struct BulkWriteTask;

#[async_trait]
impl TaskType for BulkWriteTask {
    fn name(&self) -> &str {
        "bulk-write"
    }

    fn display_name(&self) -> &str {
        "Bulk write"
    }

    fn description(&self) -> &str {
        "Writes a JSON-encoded list of key-value pairs in one call"
    }

    fn config_schema(&self) -> FormSchema {
        bulk_schema(
            "entries",
            "Entries",
            "JSON array of {\"key\", \"value\"} objects",
        )
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let namespace_id = ctx.require_str("namespace_id")?;
        let raw = ctx.require_str("entries")?;

        let pairs: Vec<KvPair> = match serde_json::from_str(&raw) {
            Ok(pairs) => pairs,
            Err(e) => {
                return Ok(TaskResult::fail(format!("invalid entries format: {e}")));
            }
        };

        ctx.report("bulk-write", 1, 1);
        let written = ctx.api.bulk_write(&namespace_id, &pairs).await?;
        debug!(namespace_id, written, "bulk write complete");
        Ok(TaskResult::ok(json!({ "written": written })))
    }
}

/// Deletes a serialized list of keys in one bulk call.
pub struct BulkDeleteTask;

#[async_trait]
impl TaskType for BulkDeleteTask {
    fn name(&self) -> &str {
        "bulk-delete"
    }

    fn display_name(&self) -> &str {
        "Bulk delete"
    }

    fn description(&self) -> &str {
        "Deletes a JSON-encoded list of keys in one call"
    }

    fn config_schema(&self) -> FormSchema {
        bulk_schema("keys", "Keys", "JSON array of key strings")
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let namespace_id = ctx.require_str("namespace_id")?;
        let raw = ctx.require_str("keys")?;

        let keys: Vec<String> = match serde_json::from_str(&raw) {
            Ok(keys) => keys,
            Err(e) => {
                return Ok(TaskResult::fail(format!("invalid keys format: {e}")));
            }
        };

        ctx.report("bulk-delete", 1, 1);
        let deleted = ctx.api.bulk_delete(&namespace_id, &keys).await?;
        debug!(namespace_id, deleted, "bulk delete complete");
        Ok(TaskResult::ok(json!({ "deleted": deleted })))
    }
}
