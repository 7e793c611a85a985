// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task-context builder and progress recorder for tests.

use std::sync::{Arc, Mutex};

use strato_core::types::{AccountInfo, JobId, TaskId, TaskProgress};
use strato_core::{CloudApi, TaskContext};

/// Captures every progress report made through a task context.
#[derive(Clone, Default)]
pub struct ProgressRecorder {
    reports: Arc<Mutex<Vec<TaskProgress>>>,
}

impl ProgressRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports captured so far, in order.
    pub fn reports(&self) -> Vec<TaskProgress> {
        self.reports.lock().expect("recorder lock poisoned").clone()
    }

    fn push(&self, progress: TaskProgress) {
        self.reports
            .lock()
            .expect("recorder lock poisoned")
            .push(progress);
    }
}

/// The account identity used by all test contexts.
pub fn test_account() -> AccountInfo {
    AccountInfo {
        account_id: "acct-test".to_string(),
        subdomain: "example".to_string(),
    }
}

/// Builds a task context around the given API and configuration, wiring the
/// progress callback into a recorder.
pub fn test_context(
    api: Arc<dyn CloudApi>,
    config: serde_json::Value,
) -> (TaskContext, ProgressRecorder) {
    let recorder = ProgressRecorder::new();
    let sink = recorder.clone();
    let ctx = TaskContext {
        api,
        task_id: TaskId(format!("task-{}", uuid::Uuid::new_v4())),
        job_id: JobId(format!("job-{}", uuid::Uuid::new_v4())),
        account: test_account(),
        config,
        progress: Arc::new(move |p| sink.push(p)),
    };
    (ctx, recorder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_cloud::MockCloudApi;

    #[tokio::test]
    async fn recorder_captures_reports_in_order() {
        let (ctx, recorder) = test_context(MockCloudApi::shared(), serde_json::json!({}));
        ctx.report("one", 1, 2);
        ctx.report("two", 2, 2);

        let reports = recorder.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].step, "one");
        assert_eq!(reports[1].current, 2);
    }

    #[tokio::test]
    async fn contexts_get_unique_job_ids() {
        let (a, _) = test_context(MockCloudApi::shared(), serde_json::json!({}));
        let (b, _) = test_context(MockCloudApi::shared(), serde_json::json!({}));
        assert_ne!(a.job_id, b.job_id);
    }
}
