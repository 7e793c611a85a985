// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key-value namespace resource plugin.
//!
//! Manages key-value namespaces and their entries: CRUD on namespaces plus
//! single-call, bulk, and lookup-then-act tasks over keys.

pub mod tasks;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use strato_core::{
    Capability, CloudApi, FieldKind, FormField, FormSchema, ResourcePlugin, StratoError,
    TableColumn, TaskType,
};

use crate::tasks::{
    BulkDeleteTask, BulkWriteTask, DeleteKeyTask, DropNamespaceTask, ListNamespacesTask,
    ReadKeyTask, WriteKeyTask,
};

/// Resource type key for key-value namespaces.
pub const RESOURCE_TYPE: &str = "kv-namespace";

/// The key-value namespace resource plugin.
pub struct KvPlugin;

impl KvPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KvPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourcePlugin for KvPlugin {
    fn name(&self) -> &str {
        "kv"
    }

    fn resource_type(&self) -> &str {
        RESOURCE_TYPE
    }

    fn display_name(&self) -> &str {
        "KV Namespaces"
    }

    fn description(&self) -> &str {
        "Key-value namespaces with single and bulk entry operations"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::List, Capability::Create, Capability::Delete]
    }

    async fn list(&self, api: &dyn CloudApi) -> Result<Vec<serde_json::Value>, StratoError> {
        let namespaces = api.list_namespaces().await?;
        Ok(namespaces.into_iter().map(|n| json!(n)).collect())
    }

    async fn create(
        &self,
        api: &dyn CloudApi,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, StratoError> {
        let title = input
            .get("title")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                StratoError::TaskConfig("missing required config field: title".into())
            })?;
        let namespace = api.create_namespace(title).await?;
        Ok(json!(namespace))
    }

    async fn delete(&self, api: &dyn CloudApi, id: &str) -> Result<(), StratoError> {
        api.delete_namespace(id).await
    }

    fn task_types(&self) -> Vec<Arc<dyn TaskType>> {
        vec![
            Arc::new(ListNamespacesTask),
            Arc::new(ReadKeyTask),
            Arc::new(WriteKeyTask),
            Arc::new(DeleteKeyTask),
            Arc::new(BulkWriteTask),
            Arc::new(BulkDeleteTask),
            Arc::new(DropNamespaceTask),
        ]
    }

    fn list_columns(&self) -> Vec<TableColumn> {
        vec![
            TableColumn::new("title", "Title", true),
            TableColumn::new("id", "Namespace ID", false),
        ]
    }

    fn create_form(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![FormField::required(
            "title",
            "Namespace title",
            FieldKind::Text,
        )]))
    }
}
