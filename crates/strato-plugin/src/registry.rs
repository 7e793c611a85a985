// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry and the task dispatch boundary.
//!
//! The registry is the single source of truth mapping resource types to
//! their plugins and composite task keys (`resource_type:task_name`) to
//! executable task definitions. It is constructed explicitly at bootstrap
//! and passed by reference to consumers; there is no process-wide
//! singleton.
//!
//! [`PluginRegistry::execute_task`] is the error-containment boundary for
//! the whole subsystem: every failure raised by plugin code is converted
//! into a failed [`TaskResult`] there, never surfaced as an error to the
//! caller.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use strato_core::{ResourcePlugin, TaskContext, TaskResult, TaskType};

/// Builds the composite dispatch key for a task.
pub fn task_key(resource_type: &str, task_name: &str) -> String {
    format!("{resource_type}:{task_name}")
}

/// Catalog of resource plugins and their task definitions.
pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn ResourcePlugin>>,
    tasks: HashMap<String, Arc<dyn TaskType>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            tasks: HashMap::new(),
        }
    }

    /// Registers a plugin under its resource type.
    ///
    /// Re-registration under an existing resource type replaces the previous
    /// plugin and logs a warning. Every task the plugin declares is indexed
    /// under its composite key, silently overwriting colliding entries.
    pub fn register(&mut self, plugin: Arc<dyn ResourcePlugin>) {
        let resource_type = plugin.resource_type().to_string();
        if self.plugins.contains_key(&resource_type) {
            warn!(resource_type, "replacing previously registered plugin");
        }

        for task in plugin.task_types() {
            let key = task_key(&resource_type, task.name());
            debug!(task_key = %key, "indexing task type");
            self.tasks.insert(key, task);
        }
        self.plugins.insert(resource_type, plugin);
    }

    /// Removes a plugin and every task-index entry derived from it.
    ///
    /// Returns whether a plugin was actually present; an unknown resource
    /// type leaves the registry unchanged.
    pub fn unregister(&mut self, resource_type: &str) -> bool {
        if self.plugins.remove(resource_type).is_none() {
            return false;
        }
        let prefix = format!("{resource_type}:");
        self.tasks.retain(|key, _| !key.starts_with(&prefix));
        true
    }

    /// Looks up a plugin by resource type.
    pub fn get_plugin(&self, resource_type: &str) -> Option<Arc<dyn ResourcePlugin>> {
        self.plugins.get(resource_type).cloned()
    }

    /// All registered plugins, ordered by resource type.
    pub fn all_plugins(&self) -> Vec<Arc<dyn ResourcePlugin>> {
        let mut plugins: Vec<Arc<dyn ResourcePlugin>> =
            self.plugins.values().cloned().collect();
        plugins.sort_by(|a, b| a.resource_type().cmp(b.resource_type()));
        plugins
    }

    /// Looks up a task definition by composite key.
    pub fn task_handler(&self, task_key: &str) -> Option<Arc<dyn TaskType>> {
        self.tasks.get(task_key).cloned()
    }

    /// All indexed composite task keys, sorted.
    pub fn all_task_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.tasks.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Whether a task definition is indexed under the composite key.
    pub fn has_task_type(&self, task_key: &str) -> bool {
        self.tasks.contains_key(task_key)
    }

    /// Dispatches a task execution through the containment boundary.
    ///
    /// An unknown composite key and any error raised by the task definition
    /// both come back as a failed [`TaskResult`]; this method never fails
    /// from the caller's perspective.
    pub async fn execute_task(&self, task_key: &str, ctx: TaskContext) -> TaskResult {
        let Some(handler) = self.task_handler(task_key) else {
            return TaskResult::fail(format!("unknown task type: {task_key}"));
        };

        debug!(task_key, job_id = %ctx.job_id.0, "dispatching task");
        match handler.execute(ctx).await {
            Ok(result) => result,
            Err(error) => {
                debug!(task_key, %error, "task execution failed");
                TaskResult::fail(error.to_string())
            }
        }
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
