// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture builders for common test inputs.

use paideia_core::history::HistorySummary;
use paideia_core::types::{
    ClassificationResult, CognitiveState, DelegationKind, RequestType,
};

/// A classification for a total-delegation request.
pub fn total_delegation_classification() -> ClassificationResult {
    ClassificationResult {
        cognitive_state: CognitiveState::Implementation,
        request_type: RequestType::Solution,
        delegation: Some(DelegationKind::Total),
    }
}

/// A classification for a benign conceptual question.
pub fn conceptual_classification() -> ClassificationResult {
    ClassificationResult {
        cognitive_state: CognitiveState::Exploration,
        request_type: RequestType::Conceptual,
        delegation: None,
    }
}

/// A history with the given number of delegation attempts.
pub fn history_with_delegations(delegation_attempts: u32) -> HistorySummary {
    HistorySummary {
        delegation_attempts,
        turns: delegation_attempts,
        ..HistorySummary::default()
    }
}
