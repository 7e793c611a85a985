// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display-oriented projections of registered plugins.
//!
//! These are the shapes the surrounding application (HTTP layer, UI)
//! consumes; nothing here is used for dispatch.

use serde::{Deserialize, Serialize};

use strato_core::{FormSchema, TableColumn};

use crate::registry::PluginRegistry;

/// One-line summary of a registered plugin for list rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginSummary {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub resource_type: String,
    /// Task type names, without the resource-type prefix.
    pub task_types: Vec<String>,
}

/// A task entry within a full plugin descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDescriptor {
    #[serde(rename = "type")]
    pub task_type: String,
    pub display_name: String,
    pub description: String,
    pub config_schema: FormSchema,
}

/// Full UI descriptor for one plugin: tasks, columns, and form schemas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub resource_type: String,
    pub display_name: String,
    pub description: String,
    pub tasks: Vec<TaskDescriptor>,
    pub list_columns: Vec<TableColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_form: Option<FormSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_form: Option<FormSchema>,
}

impl PluginRegistry {
    /// Projects every registered plugin into a display summary, ordered by
    /// resource type.
    pub fn plugin_list(&self) -> Vec<PluginSummary> {
        self.all_plugins()
            .iter()
            .map(|plugin| PluginSummary {
                name: plugin.name().to_string(),
                display_name: plugin.display_name().to_string(),
                description: plugin.description().to_string(),
                resource_type: plugin.resource_type().to_string(),
                task_types: plugin
                    .task_types()
                    .iter()
                    .map(|t| t.name().to_string())
                    .collect(),
            })
            .collect()
    }

    /// Builds the full UI descriptor for one plugin.
    pub fn describe(&self, resource_type: &str) -> Option<PluginDescriptor> {
        let plugin = self.get_plugin(resource_type)?;
        Some(PluginDescriptor {
            resource_type: plugin.resource_type().to_string(),
            display_name: plugin.display_name().to_string(),
            description: plugin.description().to_string(),
            tasks: plugin
                .task_types()
                .iter()
                .map(|t| TaskDescriptor {
                    task_type: t.name().to_string(),
                    display_name: t.display_name().to_string(),
                    description: t.description().to_string(),
                    config_schema: t.config_schema(),
                })
                .collect(),
            list_columns: plugin.list_columns(),
            create_form: plugin.create_form(),
            update_form: plugin.update_form(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use strato_kv::KvPlugin;
    use strato_workers::WorkersPlugin;

    fn registry() -> PluginRegistry {
        let mut registry = PluginRegistry::new();
        registry.register(Arc::new(WorkersPlugin::new()));
        registry.register(Arc::new(KvPlugin::new()));
        registry
    }

    #[test]
    fn plugin_list_is_ordered_by_resource_type() {
        let summaries = registry().plugin_list();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].resource_type, "kv-namespace");
        assert_eq!(summaries[1].resource_type, "worker-script");
        assert!(summaries[1]
            .task_types
            .contains(&"provision".to_string()));
    }

    #[test]
    fn describe_includes_task_schemas_and_forms() {
        let descriptor = registry().describe("worker-script").unwrap();
        assert_eq!(descriptor.display_name, "Compute Scripts");
        assert!(descriptor.create_form.is_some());
        assert!(descriptor.update_form.is_none());

        let provision = descriptor
            .tasks
            .iter()
            .find(|t| t.task_type == "provision")
            .unwrap();
        assert_eq!(provision.config_schema.fields.len(), 2);
    }

    #[test]
    fn describe_unknown_resource_type_is_none() {
        assert!(registry().describe("ghost").is_none());
    }

    #[test]
    fn summary_serializes_task_type_names() {
        let json = serde_json::to_value(registry().plugin_list()).unwrap();
        assert_eq!(json[0]["resource_type"], "kv-namespace");
        assert!(json[0]["task_types"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("bulk-write")));
    }
}
