// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./paideia.toml` > `~/.config/paideia/paideia.toml`
//! > `/etc/paideia/paideia.toml`, with environment variable overrides via the
//! `PAIDEIA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PaideiaConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/paideia/paideia.toml` (system-wide)
/// 3. `~/.config/paideia/paideia.toml` (user XDG config)
/// 4. `./paideia.toml` (local directory)
/// 5. `PAIDEIA_*` environment variables
pub fn load_config() -> Result<PaideiaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PaideiaConfig::default()))
        .merge(Toml::file("/etc/paideia/paideia.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("paideia/paideia.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("paideia.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<PaideiaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PaideiaConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PaideiaConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PaideiaConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PAIDEIA_RISK_MEDIUM_THRESHOLD` must map
/// to `risk.medium_threshold`, not `risk.medium.threshold`.
fn env_provider() -> Env {
    Env::prefixed("PAIDEIA_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("classifier_", "classifier.", 1)
            .replacen("risk_", "risk.", 1)
            .replacen("strategy_", "strategy.", 1)
            .replacen("engine_", "engine.", 1);
        mapped.into()
    })
}
