// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Paideia tutoring engine.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostics for invalid values.
//!
//! # Usage
//!
//! ```no_run
//! use paideia_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("repeat threshold: {}", config.strategy.repeat_threshold);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    ClassifierConfig, EngineConfig, PaideiaConfig, RiskConfig, StrategyConfig,
};
pub use validation::validate_config;

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to a diagnostic error
pub fn load_and_validate() -> Result<PaideiaConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![err.into()]),
    }
}
