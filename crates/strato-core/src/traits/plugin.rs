// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resource plugin contract: one handler per managed resource kind.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StratoError;
use crate::forms::{FormSchema, TableColumn};
use crate::traits::cloud::CloudApi;
use crate::traits::task::TaskType;
use crate::types::Capability;

/// A handler implementing CRUD-like capabilities and task definitions for
/// one kind of managed resource.
///
/// `list` is the only mandatory operation. The remaining CRUD operations are
/// explicitly optional: their default bodies return
/// [`StratoError::CapabilityNotSupported`], and callers are expected to
/// consult [`capabilities`](Self::capabilities) before invoking them rather
/// than treating the error as a fault.
#[async_trait]
pub trait ResourcePlugin: Send + Sync + 'static {
    /// Short machine name of the plugin (e.g. "workers").
    fn name(&self) -> &str;

    /// Globally unique resource type key (e.g. "worker-script").
    fn resource_type(&self) -> &str;

    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    fn version(&self) -> semver::Version;

    /// The CRUD capabilities this plugin actually provides.
    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::List]
    }

    /// Lists all resources of this kind, projected for display.
    async fn list(&self, api: &dyn CloudApi) -> Result<Vec<serde_json::Value>, StratoError>;

    /// Fetches one resource by identifier.
    async fn get(
        &self,
        api: &dyn CloudApi,
        id: &str,
    ) -> Result<serde_json::Value, StratoError> {
        let _ = (api, id);
        Err(self.unsupported(Capability::Get))
    }

    /// Creates a resource from form input.
    async fn create(
        &self,
        api: &dyn CloudApi,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, StratoError> {
        let _ = (api, input);
        Err(self.unsupported(Capability::Create))
    }

    /// Updates a resource from form input.
    async fn update(
        &self,
        api: &dyn CloudApi,
        id: &str,
        input: serde_json::Value,
    ) -> Result<serde_json::Value, StratoError> {
        let _ = (api, id, input);
        Err(self.unsupported(Capability::Update))
    }

    /// Deletes a resource by identifier.
    async fn delete(&self, api: &dyn CloudApi, id: &str) -> Result<(), StratoError> {
        let _ = (api, id);
        Err(self.unsupported(Capability::Delete))
    }

    /// Task definitions this plugin exposes for dispatch.
    fn task_types(&self) -> Vec<Arc<dyn TaskType>>;

    /// Columns for the resource list view.
    fn list_columns(&self) -> Vec<TableColumn>;

    /// Form schema for creating a resource, when creation is meaningful.
    fn create_form(&self) -> Option<FormSchema> {
        None
    }

    /// Form schema for updating a resource, when updates are meaningful.
    fn update_form(&self) -> Option<FormSchema> {
        None
    }

    /// The distinct "capability not supported" outcome for this plugin.
    fn unsupported(&self, capability: Capability) -> StratoError {
        StratoError::CapabilityNotSupported {
            resource_type: self.resource_type().to_string(),
            capability,
        }
    }
}
