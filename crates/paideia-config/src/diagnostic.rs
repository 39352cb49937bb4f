// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge.
//!
//! Converts Figment deserialization errors and post-deserialization
//! validation failures into miette diagnostics so config mistakes surface
//! with the offending key and an actionable hint.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// The config file failed to parse or deserialize.
    #[error("failed to load configuration: {message}")]
    #[diagnostic(
        code(paideia::config::parse),
        help("check the TOML syntax and key names in your paideia.toml")
    )]
    Parse {
        /// Figment's description of the failure, including the key path.
        message: String,
    },

    /// A deserialized value violates a semantic constraint.
    #[error("invalid configuration value: {message}")]
    #[diagnostic(code(paideia::config::validation))]
    Validation {
        /// Which constraint failed and the offending value.
        message: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// Render collected config errors to stderr as miette reports.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        eprintln!("{:?}", miette::Report::msg(err.to_string()));
    }
}
