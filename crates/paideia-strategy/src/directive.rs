// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering strategy decisions into LLM constraints.
//!
//! The downstream model receives the decision as a directive, not free
//! text: a fixed template per response type plus the detail budget. The
//! orchestrator copies the rendered directive into `TutorRequest.constraint`.

use paideia_core::types::{DetailLevel, ResponseType, StrategyDecision};

/// The structured constraint handed to the LLM boundary for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorDirective {
    pub response_type: ResponseType,
    pub detail_level: DetailLevel,
    /// Rendered instruction text for the downstream model.
    pub text: String,
}

impl TutorDirective {
    /// Render the directive for a decision.
    pub fn render(decision: &StrategyDecision) -> Self {
        let base = match decision.response_type {
            ResponseType::SocraticBlock => {
                "Do not produce the requested artifact or any substantial part of it. \
                 Respond only with questions that guide the student toward producing \
                 it themselves."
            }
            ResponseType::GuidedHints => {
                "Give scaffolded hints toward the next step only. Never provide a \
                 complete solution or a finished sub-piece."
            }
            ResponseType::ConceptualExplanation => {
                "Explain the concept fully, with examples. Solution artifacts are not \
                 at stake; completeness is welcome."
            }
            ResponseType::MetacognitivePrompts => {
                "Ask the student to evaluate their own approach: trade-offs, edge \
                 cases, and what they would test first. Do not evaluate it for them."
            }
            ResponseType::RolePlay => {
                "Stay in character for the simulation. React the way the simulated \
                 counterpart would; do not break role to tutor."
            }
            ResponseType::Observe | ResponseType::RiskReport => {
                "Produce no student-facing content. This turn is recorded for \
                 analysis only."
            }
        };

        let budget = match decision.detail_level {
            DetailLevel::Low => "Keep guidance minimal: one step or one question.",
            DetailLevel::Medium => "Moderate guidance: outline the direction, not the path.",
            DetailLevel::High => "Full guidance is appropriate for this turn.",
        };

        Self {
            response_type: decision.response_type,
            detail_level: decision.detail_level,
            text: format!("{base} {budget}"),
        }
    }
}
