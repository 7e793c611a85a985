// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process bootstrap: registers the built-in plugins and announces them.
//!
//! Runs once at startup; plugins live for the process lifetime afterwards
//! (there is no teardown path besides an explicit `unregister` or full
//! shutdown).

use std::sync::Arc;

use tracing::info;

use strato_bus::{EventBus, SystemEvent};
use strato_core::{ResourcePlugin, StratoError};
use strato_kv::KvPlugin;
use strato_workers::WorkersPlugin;

use crate::registry::PluginRegistry;

/// The plugins compiled into this build.
fn builtin_plugins() -> Vec<Arc<dyn ResourcePlugin>> {
    vec![
        Arc::new(WorkersPlugin::new()),
        Arc::new(KvPlugin::new()),
    ]
}

/// Registers every built-in plugin and emits `plugin:registered` for each,
/// followed by `system:ready`.
pub fn bootstrap(registry: &mut PluginRegistry, bus: &EventBus) -> Result<(), StratoError> {
    for plugin in builtin_plugins() {
        let resource_type = plugin.resource_type().to_string();
        let task_count = plugin.task_types().len();

        registry.register(plugin);
        info!(resource_type, task_count, "plugin registered");
        bus.emit(SystemEvent::PluginRegistered {
            resource_type,
            task_count,
        })?;
    }

    let plugin_count = registry.len();
    info!(plugin_count, "bootstrap complete");
    bus.emit(SystemEvent::SystemReady { plugin_count })?;
    Ok(())
}
