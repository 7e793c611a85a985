// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Strato resource manager.

use thiserror::Error;

use crate::types::Capability;

/// The primary error type used across all Strato traits and core operations.
#[derive(Debug, Error)]
pub enum StratoError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// External cloud API errors (transport failure, rejected request, service error).
    ///
    /// `message` carries the most specific text available, preferring the
    /// service's own error message over a generic one.
    #[error("cloud api error: {message}")]
    Api {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A CRUD capability was invoked on a plugin that does not provide it.
    #[error("capability {capability} not supported by resource type {resource_type}")]
    CapabilityNotSupported {
        resource_type: String,
        capability: Capability,
    },

    /// A resource could not be resolved by its identifier.
    #[error("{resource_type} not found: {name}")]
    NotFound {
        resource_type: String,
        name: String,
    },

    /// A task was given configuration it cannot use (missing field, wrong type).
    #[error("invalid task configuration: {0}")]
    TaskConfig(String),

    /// A form schema or descriptor failed structural validation.
    #[error("schema error: {0}")]
    Schema(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StratoError {
    /// Wraps an external API failure, keeping the underlying error as source.
    pub fn api<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StratoError::Api {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// An API failure with a message only (the service gave us nothing richer).
    pub fn api_message(message: impl Into<String>) -> Self {
        StratoError::Api {
            message: message.into(),
            source: None,
        }
    }
}
