// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Strato configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StratoConfig {
    /// Cloud account identity settings.
    #[serde(default)]
    pub account: AccountConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Cloud account identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AccountConfig {
    /// Cloud account identifier. `None` until the account is configured.
    #[serde(default)]
    pub account_id: Option<String>,

    /// Workers subdomain used to derive deployed script URLs.
    #[serde(default = "default_subdomain")]
    pub subdomain: String,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            account_id: None,
            subdomain: default_subdomain(),
        }
    }
}

fn default_subdomain() -> String {
    "localtest".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
