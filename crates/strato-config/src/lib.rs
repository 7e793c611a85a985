// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Strato resource manager.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides via the `STRATO_` prefix.

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::StratoConfig;
pub use validation::{render_errors, validate_config, ConfigError};

/// Load configuration from the XDG hierarchy and validate it.
///
/// Figment errors (parse failures, unknown keys) and semantic validation
/// failures are both reported as a list of [`ConfigError`] diagnostics.
pub fn load_and_validate() -> Result<StratoConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError {
            key: err
                .path
                .first()
                .cloned()
                .unwrap_or_else(|| "<config>".to_string()),
            message: err.to_string(),
        }]),
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<StratoConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError {
            key: err
                .path
                .first()
                .cloned()
                .unwrap_or_else(|| "<config>".to_string()),
            message: err.to_string(),
        }]),
    }
}
