// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Risk heuristics for the Paideia tutoring engine.
//!
//! Scores utterances along five fixed dimensions (cognitive, ethical,
//! epistemic, technical, governance) by walking a declarative, versioned
//! rule table. Weights and thresholds are configuration, not control flow.

pub mod analyzer;
pub mod rules;

pub use analyzer::RiskHeuristics;
pub use rules::{RULE_TABLE, RULE_VERSION, RiskRule, rules_for};
