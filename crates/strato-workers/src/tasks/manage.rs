// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Script management tasks: list, and the lookup-then-act pair.
//!
//! Lookup-then-act tasks resolve the target by listing and filtering on the
//! script name. When the name does not resolve, they return a failed result
//! (or `found: false` for the query task) before attempting any mutating
//! call.

use async_trait::async_trait;
use serde_json::json;

use strato_core::{
    FieldKind, FormField, FormSchema, StratoError, TaskContext, TaskResult, TaskType,
};

fn name_schema() -> FormSchema {
    FormSchema::new(vec![FormField::required(
        "name",
        "Script name",
        FieldKind::Text,
    )])
}

/// Lists all compute scripts in a single external call.
pub struct ListScriptsTask;

#[async_trait]
impl TaskType for ListScriptsTask {
    fn name(&self) -> &str {
        "list"
    }

    fn display_name(&self) -> &str {
        "List scripts"
    }

    fn description(&self) -> &str {
        "Lists all compute scripts on the account"
    }

    fn config_schema(&self) -> FormSchema {
        FormSchema::default()
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        ctx.report("list", 1, 1);
        let scripts = ctx.api.list_scripts().await?;
        Ok(TaskResult::ok(json!({ "scripts": scripts })))
    }
}

/// Deletes a script resolved by name.
pub struct DeleteScriptTask;

#[async_trait]
impl TaskType for DeleteScriptTask {
    fn name(&self) -> &str {
        "delete"
    }

    fn display_name(&self) -> &str {
        "Delete script"
    }

    fn description(&self) -> &str {
        "Looks up a script by name and deletes it"
    }

    fn config_schema(&self) -> FormSchema {
        name_schema()
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let name = ctx.require_str("name")?;

        ctx.report("lookup", 1, 2);
        let scripts = ctx.api.list_scripts().await?;
        let Some(script) = scripts.into_iter().find(|s| s.name == name) else {
            return Ok(TaskResult::fail(format!("script not found: {name}")));
        };

        ctx.report("delete", 2, 2);
        ctx.api.delete_script(&script.id).await?;
        Ok(TaskResult::ok(json!({ "deleted": script.id })))
    }
}

/// Looks up a script by name without mutating anything.
pub struct QueryScriptTask;

#[async_trait]
impl TaskType for QueryScriptTask {
    fn name(&self) -> &str {
        "query"
    }

    fn display_name(&self) -> &str {
        "Query script"
    }

    fn description(&self) -> &str {
        "Reports whether a script with the given name exists"
    }

    fn config_schema(&self) -> FormSchema {
        name_schema()
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let name = ctx.require_str("name")?;

        ctx.report("lookup", 1, 1);
        let scripts = ctx.api.list_scripts().await?;
        match scripts.into_iter().find(|s| s.name == name) {
            Some(script) => Ok(TaskResult::ok(json!({
                "found": true,
                "script": script,
            }))),
            None => Ok(TaskResult::ok(json!({ "found": false }))),
        }
    }
}
