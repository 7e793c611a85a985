// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The external cloud API capability consumed by task definitions.
//!
//! The concrete transport (HTTP client, auth, retries) lives outside this
//! core; plugins receive the capability as an opaque `Arc<dyn CloudApi>`
//! through their task context. Every call either returns a value or fails
//! with a [`StratoError`] that the registry's dispatch boundary converts
//! into a failed task result.

use async_trait::async_trait;

use crate::error::StratoError;
use crate::types::{
    Deployment, KvPair, NamespaceInfo, ScriptInfo, ScriptShell, ScriptVersion,
};

/// Operations the external cloud service exposes for managed resources.
#[async_trait]
pub trait CloudApi: Send + Sync {
    // --- Compute scripts ---

    /// Lists all compute scripts on the account.
    async fn list_scripts(&self) -> Result<Vec<ScriptInfo>, StratoError>;

    /// Registers an empty script shell and returns its identifier.
    async fn create_script(&self, name: &str) -> Result<ScriptShell, StratoError>;

    /// Uploads script content as a new version of the given script.
    async fn upload_version(
        &self,
        script_id: &str,
        content: &str,
    ) -> Result<ScriptVersion, StratoError>;

    /// Activates a previously uploaded version.
    async fn deploy_version(
        &self,
        script_id: &str,
        version_id: &str,
    ) -> Result<Deployment, StratoError>;

    /// Deletes a script and all of its versions.
    async fn delete_script(&self, script_id: &str) -> Result<(), StratoError>;

    // --- Key-value namespaces ---

    /// Lists all key-value namespaces on the account.
    async fn list_namespaces(&self) -> Result<Vec<NamespaceInfo>, StratoError>;

    /// Creates a namespace with the given title.
    async fn create_namespace(&self, title: &str) -> Result<NamespaceInfo, StratoError>;

    /// Deletes a namespace and every key in it.
    async fn delete_namespace(&self, namespace_id: &str) -> Result<(), StratoError>;

    // --- Key-value entries ---

    /// Reads a single value; `None` when the key does not exist.
    async fn read_value(
        &self,
        namespace_id: &str,
        key: &str,
    ) -> Result<Option<String>, StratoError>;

    /// Writes a single key-value pair.
    async fn write_value(
        &self,
        namespace_id: &str,
        key: &str,
        value: &str,
    ) -> Result<(), StratoError>;

    /// Deletes a single key.
    async fn delete_value(&self, namespace_id: &str, key: &str) -> Result<(), StratoError>;

    /// Writes many pairs in one call; returns the number written.
    async fn bulk_write(
        &self,
        namespace_id: &str,
        pairs: &[KvPair],
    ) -> Result<usize, StratoError>;

    /// Deletes many keys in one call; returns the number deleted.
    async fn bulk_delete(
        &self,
        namespace_id: &str,
        keys: &[String],
    ) -> Result<usize, StratoError>;
}
