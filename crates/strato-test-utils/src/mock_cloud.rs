// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock cloud API for deterministic testing.
//!
//! `MockCloudApi` implements `CloudApi` against in-memory state, records
//! every call by operation name, and can be told to fail specific
//! operations, enabling fast CI-runnable tests without a real cloud
//! account.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use strato_core::types::{
    Deployment, KvPair, NamespaceInfo, ScriptInfo, ScriptShell, ScriptVersion,
};
use strato_core::{CloudApi, StratoError};

/// In-memory stand-in for the external cloud service.
pub struct MockCloudApi {
    scripts: Mutex<Vec<ScriptInfo>>,
    namespaces: Mutex<Vec<NamespaceInfo>>,
    values: Mutex<HashMap<(String, String), String>>,
    calls: Mutex<Vec<String>>,
    fail_on: Mutex<HashSet<String>>,
    counter: Mutex<u64>,
}

impl MockCloudApi {
    pub fn new() -> Self {
        Self {
            scripts: Mutex::new(Vec::new()),
            namespaces: Mutex::new(Vec::new()),
            values: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            fail_on: Mutex::new(HashSet::new()),
            counter: Mutex::new(0),
        }
    }

    /// Wraps the mock in an `Arc` ready to hand to a task context.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Seeds the script listing.
    pub async fn seed_scripts(&self, scripts: Vec<ScriptInfo>) {
        *self.scripts.lock().await = scripts;
    }

    /// Seeds the namespace listing.
    pub async fn seed_namespaces(&self, namespaces: Vec<NamespaceInfo>) {
        *self.namespaces.lock().await = namespaces;
    }

    /// Makes the named operation fail with a simulated service error.
    pub async fn fail_on(&self, operation: &str) {
        self.fail_on.lock().await.insert(operation.to_string());
    }

    /// Operation names recorded so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    /// Number of calls recorded so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn record(&self, operation: &str) -> Result<(), StratoError> {
        self.calls.lock().await.push(operation.to_string());
        if self.fail_on.lock().await.contains(operation) {
            return Err(StratoError::api_message(format!(
                "{operation} failed (simulated)"
            )));
        }
        Ok(())
    }

    async fn next_id(&self, prefix: &str) -> String {
        let mut counter = self.counter.lock().await;
        *counter += 1;
        format!("{prefix}-{counter:04}")
    }
}

impl Default for MockCloudApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudApi for MockCloudApi {
    async fn list_scripts(&self) -> Result<Vec<ScriptInfo>, StratoError> {
        self.record("list_scripts").await?;
        Ok(self.scripts.lock().await.clone())
    }

    async fn create_script(&self, name: &str) -> Result<ScriptShell, StratoError> {
        self.record("create_script").await?;
        let id = self.next_id("script").await;
        self.scripts.lock().await.push(ScriptInfo {
            id: id.clone(),
            name: name.to_string(),
            modified_on: None,
        });
        Ok(ScriptShell { id })
    }

    async fn upload_version(
        &self,
        _script_id: &str,
        _content: &str,
    ) -> Result<ScriptVersion, StratoError> {
        self.record("upload_version").await?;
        Ok(ScriptVersion {
            id: self.next_id("version").await,
        })
    }

    async fn deploy_version(
        &self,
        _script_id: &str,
        _version_id: &str,
    ) -> Result<Deployment, StratoError> {
        self.record("deploy_version").await?;
        Ok(Deployment {
            id: self.next_id("deployment").await,
        })
    }

    async fn delete_script(&self, script_id: &str) -> Result<(), StratoError> {
        self.record("delete_script").await?;
        self.scripts.lock().await.retain(|s| s.id != script_id);
        Ok(())
    }

    async fn list_namespaces(&self) -> Result<Vec<NamespaceInfo>, StratoError> {
        self.record("list_namespaces").await?;
        Ok(self.namespaces.lock().await.clone())
    }

    async fn create_namespace(&self, title: &str) -> Result<NamespaceInfo, StratoError> {
        self.record("create_namespace").await?;
        let namespace = NamespaceInfo {
            id: self.next_id("namespace").await,
            title: title.to_string(),
        };
        self.namespaces.lock().await.push(namespace.clone());
        Ok(namespace)
    }

    async fn delete_namespace(&self, namespace_id: &str) -> Result<(), StratoError> {
        self.record("delete_namespace").await?;
        self.namespaces.lock().await.retain(|n| n.id != namespace_id);
        self.values
            .lock()
            .await
            .retain(|(ns, _), _| ns != namespace_id);
        Ok(())
    }

    async fn read_value(
        &self,
        namespace_id: &str,
        key: &str,
    ) -> Result<Option<String>, StratoError> {
        self.record("read_value").await?;
        Ok(self
            .values
            .lock()
            .await
            .get(&(namespace_id.to_string(), key.to_string()))
            .cloned())
    }

    async fn write_value(
        &self,
        namespace_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), StratoError> {
        self.record("write_value").await?;
        self.values.lock().await.insert(
            (namespace_id.to_string(), key.to_string()),
            value.to_string(),
        );
        Ok(())
    }

    async fn delete_value(&self, namespace_id: &str, key: &str) -> Result<(), StratoError> {
        self.record("delete_value").await?;
        self.values
            .lock()
            .await
            .remove(&(namespace_id.to_string(), key.to_string()));
        Ok(())
    }

    async fn bulk_write(
        &self,
        namespace_id: &str,
        pairs: &[KvPair],
    ) -> Result<usize, StratoError> {
        self.record("bulk_write").await?;
        let mut values = self.values.lock().await;
        for pair in pairs {
            values.insert(
                (namespace_id.to_string(), pair.key.clone()),
                pair.value.clone(),
            );
        }
        Ok(pairs.len())
    }

    async fn bulk_delete(
        &self,
        namespace_id: &str,
        keys: &[String],
    ) -> Result<usize, StratoError> {
        self.record("bulk_delete").await?;
        let mut values = self.values.lock().await;
        let mut deleted = 0;
        for key in keys {
            if values
                .remove(&(namespace_id.to_string(), key.clone()))
                .is_some()
            {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let api = MockCloudApi::new();
        api.list_scripts().await.unwrap();
        api.list_namespaces().await.unwrap();
        assert_eq!(api.calls().await, vec!["list_scripts", "list_namespaces"]);
    }

    #[tokio::test]
    async fn fail_on_simulates_service_error() {
        let api = MockCloudApi::new();
        api.fail_on("create_script").await;
        let err = api.create_script("demo").await.unwrap_err();
        assert!(err.to_string().contains("create_script failed"));
        // The failed call is still recorded.
        assert_eq!(api.call_count().await, 1);
    }

    #[tokio::test]
    async fn kv_round_trip_through_bulk_write() {
        let api = MockCloudApi::new();
        let written = api
            .bulk_write(
                "ns-1",
                &[
                    KvPair {
                        key: "a".into(),
                        value: "1".into(),
                    },
                    KvPair {
                        key: "b".into(),
                        value: "2".into(),
                    },
                ],
            )
            .await
            .unwrap();
        assert_eq!(written, 2);
        assert_eq!(api.read_value("ns-1", "b").await.unwrap().as_deref(), Some("2"));

        let deleted = api
            .bulk_delete("ns-1", &["a".into(), "missing".into()])
            .await
            .unwrap();
        assert_eq!(deleted, 1);
    }
}
