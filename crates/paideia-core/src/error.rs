// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Paideia tutoring engine.

use thiserror::Error;

/// The primary error type used across all Paideia crates.
#[derive(Debug, Error)]
pub enum PaideiaError {
    /// The caller passed an empty or malformed utterance. Recovered by the
    /// orchestrator as "ask the student to rephrase"; never silently
    /// defaulted to a classification.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An agent mode string did not parse to a known mode. Indicates a
    /// caller or configuration bug and is fatal to the current turn.
    #[error("unsupported agent mode: `{mode}`")]
    UnsupportedMode { mode: String },

    /// Configuration errors (invalid TOML, missing required fields,
    /// out-of-range weights or thresholds).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider boundary errors (API failure, malformed response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The per-turn deadline elapsed while awaiting the provider.
    #[error("turn timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
