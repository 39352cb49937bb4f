// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Paideia pedagogical governance engine.
//!
//! This crate provides the shared data model (classification results, risk
//! scores, strategy decisions, session history), the error type, and the
//! boundary trait to the external LLM collaborator. The classifier, risk
//! analyzer, strategy selector, and tracker crates all depend only on the
//! types defined here.

pub mod error;
pub mod history;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PaideiaError;
pub use history::HistorySummary;
pub use traits::TutorProvider;
pub use types::{
    AgentMode, ClassificationResult, CognitiveState, DelegationKind, DetailLevel,
    DimensionScore, RequestType, ResponseType, RiskDimension, RiskLevel, RiskScoreSet,
    Semaphore, SessionId, StrategyDecision, TutorRequest, TutorResponse,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_construct() {
        let _invalid = PaideiaError::InvalidInput("empty utterance".into());
        let _mode = PaideiaError::UnsupportedMode {
            mode: "professor".into(),
        };
        let _config = PaideiaError::Config("bad weight".into());
        let _provider = PaideiaError::Provider {
            message: "api failure".into(),
            source: None,
        };
        let _timeout = PaideiaError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = PaideiaError::Internal("bug".into());
    }

    #[test]
    fn error_messages_are_actionable() {
        let err = PaideiaError::UnsupportedMode {
            mode: "professor".into(),
        };
        assert_eq!(err.to_string(), "unsupported agent mode: `professor`");

        let err = PaideiaError::InvalidInput("empty utterance".into());
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn session_id_displays_inner_value() {
        let id = SessionId("sess-42".into());
        assert_eq!(id.to_string(), "sess-42");
    }
}
