// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session rolling history aggregate.
//!
//! `HistorySummary` is the only mutable value in the pipeline. It is owned
//! exclusively by one session (single writer; the orchestrator serializes
//! turns) and is read before each turn and updated after it. Persistence of
//! the archived summary at session end belongs to the external storage
//! collaborator.

use serde::{Deserialize, Serialize};

use crate::types::{ClassificationResult, CognitiveState, StrategyDecision};

/// Small rolling aggregate of a session's interaction history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of turns observed so far.
    pub turns: u32,
    /// Count of prior delegation attempts (total or partial).
    pub delegation_attempts: u32,
    /// Count of prior planning-phase turns with no delegation ("good
    /// planning" signals).
    pub good_planning_signals: u32,
    /// Solutions the student reached with low-detail guidance only.
    pub successful_autonomous_solutions: u32,
    /// Rolling mean of per-turn AI-involvement scores in [0, 1].
    pub avg_ai_involvement: f64,
    /// Cognitive state of the most recent turn, used to bias ambiguous
    /// short follow-ups toward continuity.
    pub last_state: Option<CognitiveState>,
}

impl HistorySummary {
    /// A fresh summary for a newly started session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed turn into the aggregate.
    ///
    /// `ai_involvement` is the orchestrator's estimate in [0, 1] of how much
    /// of this turn's work the system did; values are clamped.
    pub fn observe_turn(
        &mut self,
        classification: &ClassificationResult,
        decision: &StrategyDecision,
        ai_involvement: f64,
    ) {
        if classification.delegation.is_some() {
            self.delegation_attempts += 1;
        } else if classification.cognitive_state == CognitiveState::Planning {
            self.good_planning_signals += 1;
        }

        let involvement = ai_involvement.clamp(0.0, 1.0);
        let n = f64::from(self.turns);
        self.avg_ai_involvement = (self.avg_ai_involvement * n + involvement) / (n + 1.0);
        self.turns += 1;
        self.last_state = Some(classification.cognitive_state);

        // A non-blocked, low-detail turn that did not delegate counts toward
        // demonstrated autonomy.
        if !decision.block
            && decision.detail_level == crate::types::DetailLevel::Low
            && classification.delegation.is_none()
        {
            self.successful_autonomous_solutions += 1;
        }
    }
}
