// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The three-step script provisioning orchestration.
//!
//! Steps run strictly in sequence: create the script shell, upload the
//! content as a version, deploy that version. No step is retried and no
//! prior step is undone when a later one fails; whatever partial external
//! state exists at that point is left in place and the task returns a
//! failed result.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use strato_core::{
    FieldKind, FormField, FormSchema, StratoError, TaskContext, TaskResult, TaskType,
};

const TOTAL_STEPS: u32 = 3;

/// Provisions a new compute script end to end.
pub struct ProvisionTask;

#[async_trait]
impl TaskType for ProvisionTask {
    fn name(&self) -> &str {
        "provision"
    }

    fn display_name(&self) -> &str {
        "Provision script"
    }

    fn description(&self) -> &str {
        "Creates, uploads, and deploys a compute script in one run"
    }

    fn config_schema(&self) -> FormSchema {
        FormSchema::new(vec![
            FormField::required("name", "Script name", FieldKind::Text),
            FormField::required("content", "Script content", FieldKind::Textarea),
        ])
    }

    async fn execute(&self, ctx: TaskContext) -> Result<TaskResult, StratoError> {
        let name = ctx.require_str("name")?;
        let content = ctx.require_str("content")?;

        ctx.report("create", 1, TOTAL_STEPS);
        let shell = ctx.api.create_script(&name).await?;
        debug!(script_id = %shell.id, "script shell created");

        ctx.report("upload", 2, TOTAL_STEPS);
        let version = ctx.api.upload_version(&shell.id, &content).await?;
        debug!(version_id = %version.id, "script version uploaded");

        ctx.report("deploy", 3, TOTAL_STEPS);
        let deployment = ctx.api.deploy_version(&shell.id, &version.id).await?;
        debug!(deployment_id = %deployment.id, "script version deployed");

        let url = format!(
            "https://{}.{}.workers.dev",
            name, ctx.account.subdomain
        );
        Ok(TaskResult::ok(json!({
            "id": shell.id,
            "version_id": version.id,
            "deployment_id": deployment.id,
            "url": url,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strato_core::CloudApi;
    use strato_test_utils::{test_context, MockCloudApi};

    fn config() -> serde_json::Value {
        json!({"name": "foo", "content": "<script>"})
    }

    #[tokio::test]
    async fn provision_reports_three_steps_and_returns_identifiers() {
        let api = MockCloudApi::shared();
        let (ctx, recorder) = test_context(api.clone(), config());

        let result = ProvisionTask.execute(ctx).await.unwrap();
        assert!(result.success);

        let data = result.data.unwrap();
        assert!(data["id"].as_str().unwrap().starts_with("script-"));
        assert!(data["version_id"].as_str().unwrap().starts_with("version-"));
        assert!(data["deployment_id"]
            .as_str()
            .unwrap()
            .starts_with("deployment-"));
        assert_eq!(data["url"], "https://foo.example.workers.dev");

        let reports = recorder.reports();
        assert_eq!(reports.len(), 3);
        for (i, (report, step)) in reports
            .iter()
            .zip(["create", "upload", "deploy"])
            .enumerate()
        {
            assert_eq!(report.step, step);
            assert_eq!(report.current, i as u32 + 1);
            assert_eq!(report.total, 3);
        }

        assert_eq!(
            api.calls().await,
            vec!["create_script", "upload_version", "deploy_version"]
        );
    }

    #[tokio::test]
    async fn upload_failure_stops_sequence_without_cleanup() {
        let api = MockCloudApi::shared();
        api.fail_on("upload_version").await;
        let (ctx, recorder) = test_context(api.clone(), config());

        let err = ProvisionTask.execute(ctx).await.unwrap_err();
        assert!(err.to_string().contains("upload_version failed"));

        // Deploy is never attempted and the shell is not rolled back.
        assert_eq!(api.calls().await, vec!["create_script", "upload_version"]);
        assert_eq!(api.list_scripts().await.unwrap().len(), 1);
        assert_eq!(recorder.reports().len(), 2);
    }

    #[tokio::test]
    async fn missing_config_field_fails_before_any_call() {
        let api = MockCloudApi::shared();
        let (ctx, _) = test_context(api.clone(), json!({"name": "foo"}));

        let err = ProvisionTask.execute(ctx).await.unwrap_err();
        assert!(err.to_string().contains("content"));
        assert_eq!(api.call_count().await, 0);
    }

    #[test]
    fn config_schema_is_structurally_valid() {
        assert!(ProvisionTask.config_schema().validate().is_ok());
    }
}
