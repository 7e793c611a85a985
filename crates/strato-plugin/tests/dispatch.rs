// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end dispatch tests: bootstrap, registry, bus, and plugins
//! working together against the mock cloud API.

use std::sync::{Arc, Mutex};

use serde_json::json;

use strato_bus::{EventBus, EventKind, SystemEvent};
use strato_core::types::{AccountInfo, JobId, TaskId, TaskProgress};
use strato_core::{CloudApi, TaskContext};
use strato_plugin::{bootstrap, PluginRegistry};
use strato_test_utils::MockCloudApi;

/// Builds a context whose progress callback republishes onto the bus as
/// `task:progress` events, the way the surrounding application wires it.
fn bus_context(
    api: Arc<MockCloudApi>,
    bus: Arc<EventBus>,
    job: &str,
    config: serde_json::Value,
) -> TaskContext {
    let job_id = JobId(job.to_string());
    let progress_job = job_id.clone();
    TaskContext {
        api,
        task_id: TaskId(format!("{job}-task")),
        job_id,
        account: AccountInfo {
            account_id: "acct-1".into(),
            subdomain: "tenant".into(),
        },
        config,
        progress: Arc::new(move |progress| {
            let _ = bus.emit(SystemEvent::TaskProgress {
                job_id: progress_job.clone(),
                progress,
            });
        }),
    }
}

#[tokio::test]
async fn provisioning_through_registry_reports_progress_events() {
    let mut registry = PluginRegistry::new();
    let bus = Arc::new(EventBus::new());
    bootstrap(&mut registry, &bus).unwrap();

    let seen: Arc<Mutex<Vec<TaskProgress>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.on(
        EventKind::TaskProgress,
        Arc::new(move |event| {
            if let SystemEvent::TaskProgress { progress, .. } = event {
                sink.lock().unwrap().push(progress.clone());
            }
            Ok(())
        }),
    );

    let api = MockCloudApi::shared();
    let ctx = bus_context(
        api.clone(),
        Arc::clone(&bus),
        "job-1",
        json!({"name": "foo", "content": "<script>"}),
    );

    let result = registry.execute_task("worker-script:provision", ctx).await;
    assert!(result.success, "provision failed: {:?}", result.error);

    let data = result.data.unwrap();
    assert_eq!(data["url"], "https://foo.tenant.workers.dev");

    let seen = seen.lock().unwrap();
    let steps: Vec<(String, u32, u32)> = seen
        .iter()
        .map(|p| (p.step.clone(), p.current, p.total))
        .collect();
    assert_eq!(
        steps,
        vec![
            ("create".to_string(), 1, 3),
            ("upload".to_string(), 2, 3),
            ("deploy".to_string(), 3, 3),
        ]
    );
}

#[tokio::test]
async fn failed_step_surfaces_service_message_and_leaves_partial_state() {
    let mut registry = PluginRegistry::new();
    let bus = Arc::new(EventBus::new());
    bootstrap(&mut registry, &bus).unwrap();

    let api = MockCloudApi::shared();
    api.fail_on("deploy_version").await;
    let ctx = bus_context(
        api.clone(),
        bus,
        "job-2",
        json!({"name": "bar", "content": "x"}),
    );

    let result = registry.execute_task("worker-script:provision", ctx).await;
    assert!(!result.success);
    assert!(result
        .error
        .unwrap()
        .contains("deploy_version failed (simulated)"));

    // The shell and version calls happened; nothing was rolled back.
    assert_eq!(
        api.calls().await,
        vec!["create_script", "upload_version", "deploy_version"]
    );
    assert_eq!(api.list_scripts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_composite_key_is_contained_at_the_boundary() {
    let mut registry = PluginRegistry::new();
    let bus = Arc::new(EventBus::new());
    bootstrap(&mut registry, &bus).unwrap();

    let ctx = bus_context(MockCloudApi::shared(), bus, "job-3", json!({}));
    let result = registry.execute_task("worker-script:ghost", ctx).await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("unknown task type"));
}

#[tokio::test]
async fn bulk_write_dispatch_rejects_malformed_payload_without_api_calls() {
    let mut registry = PluginRegistry::new();
    let bus = Arc::new(EventBus::new());
    bootstrap(&mut registry, &bus).unwrap();

    let api = MockCloudApi::shared();
    let ctx = bus_context(
        api.clone(),
        bus,
        "job-4",
        json!({"namespace_id": "ns-1", "entries": "]["}),
    );

    let result = registry.execute_task("kv-namespace:bulk-write", ctx).await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("invalid entries format"));
    assert_eq!(api.call_count().await, 0);
}

#[tokio::test]
async fn lookup_then_act_through_registry_short_circuits_on_missing_target() {
    let mut registry = PluginRegistry::new();
    let bus = Arc::new(EventBus::new());
    bootstrap(&mut registry, &bus).unwrap();

    let api = MockCloudApi::shared();
    let ctx = bus_context(api.clone(), bus, "job-5", json!({"name": "ghost"}));

    let result = registry.execute_task("worker-script:delete", ctx).await;
    assert!(!result.success);
    assert!(result.error.unwrap().contains("script not found: ghost"));
    assert_eq!(api.calls().await, vec!["list_scripts"]);
}
