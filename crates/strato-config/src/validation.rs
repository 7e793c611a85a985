// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation of configuration values.

use thiserror::Error;

use crate::model::StratoConfig;

/// A single configuration diagnostic: which key is wrong and why.
#[derive(Debug, Clone, Error)]
#[error("config key '{key}': {message}")]
pub struct ConfigError {
    pub key: String,
    pub message: String,
}

impl ConfigError {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validates values that deserialize fine but are semantically wrong.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &StratoConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !is_dns_label(&config.account.subdomain) {
        errors.push(ConfigError::new(
            "account.subdomain",
            format!(
                "'{}' must be a DNS label: lowercase alphanumerics and hyphens, \
                 not starting or ending with a hyphen",
                config.account.subdomain
            ),
        ));
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::new(
            "log.level",
            format!(
                "'{}' is not a log level (expected one of: {})",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_dns_label(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Renders validation errors to stderr, one per line.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("strato: {error}");
    }
}
