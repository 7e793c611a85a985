// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Namespace-level tasks: list, and drop-by-title.

use async_trait::async_trait;
use serde_json::json;

use strato_core::{
    FieldKind, FormField, FormSchema, StratoError, TaskContext, TaskResult, TaskType,
};

/// Lists all key-value namespaces in a single external call.
pub struct ListNamespacesTask;

#[async_trait]
impl TaskType for ListNamespacesTask {
    fn name(&self) -> &str {
        "list-namespaces"
    }

    fn display_name(&self) -> &str {
        "List namespaces"
    }

    fn description(&self) -> &str {
        "Lists all key-value namespaces on the account"
    }

    fn config_schema(&self) -> FormSchema {
        FormSchema::default()
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        ctx.report("list", 1, 1);
        let namespaces = ctx.api.list_namespaces().await?;
        Ok(TaskResult::ok(json!({ "namespaces": namespaces })))
    }
}

/// Deletes a namespace resolved by its title.
pub struct DropNamespaceTask;

#[async_trait]
impl TaskType for DropNamespaceTask {
    fn name(&self) -> &str {
        "drop-namespace"
    }

    fn display_name(&self) -> &str {
        "Drop namespace"
    }

    fn description(&self) -> &str {
        "Looks up a namespace by title and deletes it with all of its keys"
    }

    fn config_schema(&self) -> FormSchema {
        FormSchema::new(vec![FormField::required(
            "title",
            "Namespace title",
            FieldKind::Text,
        )])
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let title = ctx.require_str("title")?;

        ctx.report("lookup", 1, 2);
        let namespaces = ctx.api.list_namespaces().await?;
        let Some(namespace) = namespaces.into_iter().find(|n| n.title == title) else {
            return Ok(TaskResult::fail(format!("namespace not found: {title}")));
        };

        ctx.report("delete", 2, 2);
        ctx.api.delete_namespace(&namespace.id).await?;
        Ok(TaskResult::ok(json!({ "deleted": namespace.id })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strato_core::types::NamespaceInfo;
    use strato_test_utils::{test_context, MockCloudApi};

    #[tokio::test]
    async fn list_wraps_namespace_listing() {
        let api = MockCloudApi::shared();
        api.seed_namespaces(vec![NamespaceInfo {
            id: "ns-1".into(),
            title: "cache".into(),
        }])
        .await;
        let (ctx, _) = test_context(api, json!({}));

        let result = ListNamespacesTask.execute(ctx).await.unwrap();
        assert!(result.success);
        assert_eq!(
            result.data.unwrap()["namespaces"][0]["title"],
            "cache"
        );
    }

    #[tokio::test]
    async fn drop_resolves_namespace_by_title() {
        let api = MockCloudApi::shared();
        api.seed_namespaces(vec![
            NamespaceInfo {
                id: "ns-1".into(),
                title: "cache".into(),
            },
            NamespaceInfo {
                id: "ns-2".into(),
                title: "sessions".into(),
            },
        ])
        .await;
        let (ctx, recorder) = test_context(api.clone(), json!({"title": "sessions"}));

        let result = DropNamespaceTask.execute(ctx).await.unwrap();
        assert!(result.success);
        assert_eq!(result.data.unwrap()["deleted"], "ns-2");
        assert_eq!(api.calls().await, vec!["list_namespaces", "delete_namespace"]);
        assert_eq!(recorder.reports().len(), 2);
    }

    #[tokio::test]
    async fn drop_unknown_title_fails_before_mutation() {
        let api = MockCloudApi::shared();
        let (ctx, _) = test_context(api.clone(), json!({"title": "ghost"}));

        let result = DropNamespaceTask.execute(ctx).await.unwrap();
        assert!(!result.success);
        assert!(result.error.unwrap().contains("namespace not found: ghost"));
        assert_eq!(api.calls().await, vec!["list_namespaces"]);
    }
}
