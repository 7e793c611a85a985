// SPDX-FileCopyrightText: 2026 Strato Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./strato.toml` > `~/.config/strato/strato.toml`
//! > `/etc/strato/strato.toml`, with environment variable overrides via the
//! `STRATO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::StratoConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/strato/strato.toml` (system-wide)
/// 3. `~/.config/strato/strato.toml` (user XDG config)
/// 4. `./strato.toml` (local directory)
/// 5. `STRATO_*` environment variables
pub fn load_config() -> Result<StratoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StratoConfig::default()))
        .merge(Toml::file("/etc/strato/strato.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("strato/strato.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("strato.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<StratoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StratoConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<StratoConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(StratoConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment variable provider using explicit `map()` for section-to-dot
/// mapping. `STRATO_ACCOUNT_ACCOUNT_ID` maps to `account.account_id`, not
/// `account.account.id`.
fn env_provider() -> Env {
    Env::prefixed("STRATO_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("account_", "account.", 1)
            .replacen("log_", "log.", 1);
        mapped.into()
    })
}
