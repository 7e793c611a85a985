// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compute-script resource plugin.
//!
//! Manages "worker" scripts on the external cloud account: listing, lookup,
//! deletion, and the multi-step provisioning workflow that creates, uploads,
//! and deploys a script in one run. Creation intentionally goes through the
//! `provision` task rather than the CRUD surface, since it is a multi-call
//! orchestration rather than a single write.

pub mod tasks;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use strato_core::{
    Capability, CloudApi, FieldKind, FormField, FormSchema, ResourcePlugin, StratoError,
    TableColumn, TaskType,
};

use crate::tasks::{DeleteScriptTask, ListScriptsTask, ProvisionTask, QueryScriptTask};

/// Resource type key for compute scripts.
pub const RESOURCE_TYPE: &str = "worker-script";

/// The compute-script resource plugin.
pub struct WorkersPlugin;

impl WorkersPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WorkersPlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourcePlugin for WorkersPlugin {
    fn name(&self) -> &str {
        "workers"
    }

    fn resource_type(&self) -> &str {
        RESOURCE_TYPE
    }

    fn display_name(&self) -> &str {
        "Compute Scripts"
    }

    fn description(&self) -> &str {
        "Deployable compute scripts served from the account subdomain"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::List, Capability::Get, Capability::Delete]
    }

    async fn list(&self, api: &dyn CloudApi) -> Result<Vec<serde_json::Value>, StratoError> {
        let scripts = api.list_scripts().await?;
        Ok(scripts.into_iter().map(|s| json!(s)).collect())
    }

    async fn get(
        &self,
        api: &dyn CloudApi,
        id: &str,
    ) -> Result<serde_json::Value, StratoError> {
        let scripts = api.list_scripts().await?;
        scripts
            .into_iter()
            .find(|s| s.id == id)
            .map(|s| json!(s))
            .ok_or_else(|| StratoError::NotFound {
                resource_type: RESOURCE_TYPE.to_string(),
                name: id.to_string(),
            })
    }

    async fn delete(&self, api: &dyn CloudApi, id: &str) -> Result<(), StratoError> {
        api.delete_script(id).await
    }

    fn task_types(&self) -> Vec<Arc<dyn TaskType>> {
        vec![
            Arc::new(ProvisionTask),
            Arc::new(ListScriptsTask),
            Arc::new(DeleteScriptTask),
            Arc::new(QueryScriptTask),
        ]
    }

    fn list_columns(&self) -> Vec<TableColumn> {
        vec![
            TableColumn::new("name", "Name", true),
            TableColumn::new("id", "Script ID", false),
            TableColumn::new("modified_on", "Modified", true),
        ]
    }

    fn create_form(&self) -> Option<FormSchema> {
        Some(FormSchema::new(vec![
            FormField::required("name", "Script name", FieldKind::Text),
            FormField::required("content", "Script content", FieldKind::Textarea),
        ]))
    }
}
