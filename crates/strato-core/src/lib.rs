// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Strato cloud resource manager.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types used throughout the Strato workspace. All resource plugins
//! implement traits defined here.

pub mod error;
pub mod forms;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::StratoError;
pub use forms::{FieldKind, FormField, FormSchema, TableColumn};
pub use types::{
    AccountInfo, Capability, JobId, TaskId, TaskProgress, TaskResult,
};

// Re-export the plugin architecture traits at crate root.
pub use traits::{CloudApi, ProgressFn, ResourcePlugin, TaskContext, TaskType};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strato_error_has_all_variants() {
        let _config = StratoError::Config("test".into());
        let _api = StratoError::Api {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _cap = StratoError::CapabilityNotSupported {
            resource_type: "worker-script".into(),
            capability: Capability::Update,
        };
        let _not_found = StratoError::NotFound {
            resource_type: "worker-script".into(),
            name: "missing".into(),
        };
        let _task_config = StratoError::TaskConfig("test".into());
        let _schema = StratoError::Schema("test".into());
        let _internal = StratoError::Internal("test".into());
    }

    #[test]
    fn capability_not_supported_message_names_both_sides() {
        let err = StratoError::CapabilityNotSupported {
            resource_type: "kv-namespace".into(),
            capability: Capability::Update,
        };
        let msg = err.to_string();
        assert!(msg.contains("Update"));
        assert!(msg.contains("kv-namespace"));
    }

    #[test]
    fn api_error_prefers_specific_message() {
        let err = StratoError::api("script name already taken", std::io::Error::other("409"));
        assert_eq!(err.to_string(), "cloud api error: script name already taken");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compile-time check that the core traits are reachable from the root.
        fn _assert_cloud_api<T: CloudApi>() {}
        fn _assert_resource_plugin<T: ResourcePlugin>() {}
        fn _assert_task_type<T: TaskType>() {}
    }
}
