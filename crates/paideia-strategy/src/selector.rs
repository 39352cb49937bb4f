// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategy selection state machine.
//!
//! Maps (classification, mode, history) to a `StrategyDecision` via
//! exhaustive matching over the closed `AgentMode` and `CognitiveState`
//! enums. Pure and deterministic: identical inputs produce bit-identical
//! decisions, with no hidden randomness.
//!
//! Tie-break policy: for the tutor, delegation outranks every other signal
//! (pedagogical integrity over technical help), so delegation is matched
//! before the cognitive state. Observer modes never block and keep the full
//! classification for diagnostics.

use paideia_config::StrategyConfig;
use paideia_core::history::HistorySummary;
use paideia_core::types::{
    AgentMode, ClassificationResult, CognitiveState, DelegationKind, DetailLevel,
    ResponseType, StrategyDecision,
};
use tracing::{debug, warn};

/// Deterministic strategy selector.
pub struct StrategySelector {
    config: StrategyConfig,
}

impl StrategySelector {
    /// Create a selector with the given escalation configuration.
    pub fn new(config: StrategyConfig) -> Self {
        Self { config }
    }

    /// Select the response strategy for one turn.
    pub fn select(
        &self,
        classification: &ClassificationResult,
        mode: AgentMode,
        history: &HistorySummary,
    ) -> StrategyDecision {
        let intervention_level = self.intervention_level(history);
        if intervention_level > 0 {
            warn!(
                %mode,
                intervention_level,
                delegation_attempts = history.delegation_attempts,
                "escalated intervention"
            );
        }

        let decision = match mode {
            AgentMode::Tutor => self.select_tutor(classification, history, intervention_level),
            // Observer modes never block; the classification itself carries
            // the diagnostic information.
            AgentMode::Evaluator => StrategyDecision {
                response_type: ResponseType::Observe,
                detail_level: DetailLevel::Low,
                block: false,
                redirect: false,
                intervention_level,
            },
            AgentMode::RiskAnalyst => StrategyDecision {
                response_type: ResponseType::RiskReport,
                detail_level: DetailLevel::Low,
                block: false,
                redirect: false,
                intervention_level,
            },
            // The simulator stays in character and never blocks, but
            // escalation still tightens how much it volunteers.
            AgentMode::Simulator => StrategyDecision {
                response_type: ResponseType::RolePlay,
                detail_level: DetailLevel::Medium.tightened_by(intervention_level),
                block: false,
                redirect: false,
                intervention_level,
            },
        };

        debug!(
            %mode,
            response = %decision.response_type,
            detail = %decision.detail_level,
            block = decision.block,
            "selected strategy"
        );
        debug_assert!(!decision.block || decision.response_type.is_blocking());
        decision
    }

    fn select_tutor(
        &self,
        classification: &ClassificationResult,
        history: &HistorySummary,
        intervention_level: u8,
    ) -> StrategyDecision {
        // Delegation first: it outranks debugging or any other state signal.
        match classification.delegation {
            Some(DelegationKind::Total) => {
                return Self::block_decision(intervention_level);
            }
            Some(DelegationKind::Partial) => {
                // Escalated sessions lose the benefit of the doubt.
                if intervention_level > 0 {
                    return Self::block_decision(intervention_level);
                }
                return StrategyDecision {
                    response_type: ResponseType::GuidedHints,
                    detail_level: self.autonomy_scaled_detail(history),
                    block: false,
                    redirect: true,
                    intervention_level,
                };
            }
            None => {}
        }

        let (response_type, base_detail) = match classification.cognitive_state {
            CognitiveState::Exploration => {
                (ResponseType::ConceptualExplanation, DetailLevel::High)
            }
            // Plans get probing prompts, not answers: the student evaluates
            // their own approach before committing to it.
            CognitiveState::Planning => {
                (ResponseType::MetacognitivePrompts, DetailLevel::Medium)
            }
            CognitiveState::Implementation | CognitiveState::Debugging => {
                (ResponseType::GuidedHints, self.autonomy_scaled_detail(history))
            }
            CognitiveState::Reflection => {
                (ResponseType::MetacognitivePrompts, DetailLevel::Medium)
            }
        };

        StrategyDecision {
            response_type,
            detail_level: base_detail.tightened_by(intervention_level),
            block: false,
            redirect: false,
            intervention_level,
        }
    }

    fn block_decision(intervention_level: u8) -> StrategyDecision {
        StrategyDecision {
            response_type: ResponseType::SocraticBlock,
            detail_level: DetailLevel::Low,
            block: true,
            redirect: true,
            intervention_level,
        }
    }

    /// Escalation counter: one step per delegation attempt at or past the
    /// repeat threshold, capped.
    fn intervention_level(&self, history: &HistorySummary) -> u8 {
        if history.delegation_attempts < self.config.repeat_threshold {
            return 0;
        }
        let over = history.delegation_attempts - self.config.repeat_threshold + 1;
        u8::try_from(over)
            .unwrap_or(u8::MAX)
            .min(self.config.intervention_cap)
    }

    /// More demonstrated autonomy, less unprompted detail.
    fn autonomy_scaled_detail(&self, history: &HistorySummary) -> DetailLevel {
        let solutions = history.successful_autonomous_solutions;
        if solutions >= self.config.autonomy_low {
            DetailLevel::Low
        } else if solutions >= self.config.autonomy_medium {
            DetailLevel::Medium
        } else {
            DetailLevel::High
        }
    }
}

impl Default for StrategySelector {
    fn default() -> Self {
        Self::new(StrategyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paideia_core::types::RequestType;
    use proptest::prelude::*;

    fn total_delegation() -> ClassificationResult {
        ClassificationResult {
            cognitive_state: CognitiveState::Implementation,
            request_type: RequestType::Solution,
            delegation: Some(DelegationKind::Total),
        }
    }

    fn no_delegation(state: CognitiveState) -> ClassificationResult {
        ClassificationResult {
            cognitive_state: state,
            request_type: RequestType::Unknown,
            delegation: None,
        }
    }

    fn history_with_repeats(delegation_attempts: u32) -> HistorySummary {
        HistorySummary {
            delegation_attempts,
            ..HistorySummary::default()
        }
    }

    #[test]
    fn tutor_blocks_total_delegation() {
        let decision = StrategySelector::default().select(
            &total_delegation(),
            AgentMode::Tutor,
            &HistorySummary::default(),
        );
        assert!(decision.block);
        assert!(decision.redirect);
        assert_eq!(decision.response_type, ResponseType::SocraticBlock);
    }

    #[test]
    fn evaluator_observes_the_same_classification() {
        let decision = StrategySelector::default().select(
            &total_delegation(),
            AgentMode::Evaluator,
            &HistorySummary::default(),
        );
        assert!(!decision.block);
        assert_eq!(decision.response_type, ResponseType::Observe);
    }

    #[test]
    fn repeats_raise_intervention_and_tighten_detail() {
        let selector = StrategySelector::default();
        let calm = selector.select(
            &total_delegation(),
            AgentMode::Tutor,
            &history_with_repeats(0),
        );
        let escalated = selector.select(
            &total_delegation(),
            AgentMode::Tutor,
            &history_with_repeats(3),
        );
        assert!(escalated.intervention_level > calm.intervention_level);
        assert!(escalated.detail_level <= calm.detail_level);
    }

    #[test]
    fn intervention_level_is_capped() {
        let selector = StrategySelector::default();
        let decision = selector.select(
            &total_delegation(),
            AgentMode::Tutor,
            &history_with_repeats(40),
        );
        assert_eq!(decision.intervention_level, 5);
    }

    #[test]
    fn escalated_partial_delegation_blocks() {
        let selector = StrategySelector::default();
        let partial = ClassificationResult {
            delegation: Some(DelegationKind::Partial),
            ..total_delegation()
        };
        let calm = selector.select(&partial, AgentMode::Tutor, &history_with_repeats(0));
        assert!(!calm.block);
        assert_eq!(calm.response_type, ResponseType::GuidedHints);

        let escalated = selector.select(&partial, AgentMode::Tutor, &history_with_repeats(4));
        assert!(escalated.block);
    }

    #[test]
    fn exploration_gets_full_conceptual_explanation() {
        let decision = StrategySelector::default().select(
            &no_delegation(CognitiveState::Exploration),
            AgentMode::Tutor,
            &HistorySummary::default(),
        );
        assert_eq!(decision.response_type, ResponseType::ConceptualExplanation);
        assert_eq!(decision.detail_level, DetailLevel::High);
        assert!(!decision.block);
    }

    #[test]
    fn reflection_gets_metacognitive_prompts() {
        let decision = StrategySelector::default().select(
            &no_delegation(CognitiveState::Reflection),
            AgentMode::Tutor,
            &HistorySummary::default(),
        );
        assert_eq!(decision.response_type, ResponseType::MetacognitivePrompts);
    }

    #[test]
    fn autonomy_scales_hint_detail_inversely() {
        let selector = StrategySelector::default();
        let debugging = no_delegation(CognitiveState::Debugging);

        let novice = selector.select(&debugging, AgentMode::Tutor, &HistorySummary::default());
        assert_eq!(novice.detail_level, DetailLevel::High);

        let some_autonomy = HistorySummary {
            successful_autonomous_solutions: 1,
            ..HistorySummary::default()
        };
        let mid = selector.select(&debugging, AgentMode::Tutor, &some_autonomy);
        assert_eq!(mid.detail_level, DetailLevel::Medium);

        let autonomous = HistorySummary {
            successful_autonomous_solutions: 3,
            ..HistorySummary::default()
        };
        let low = selector.select(&debugging, AgentMode::Tutor, &autonomous);
        assert_eq!(low.detail_level, DetailLevel::Low);
    }

    #[test]
    fn delegation_outranks_debugging_for_tutor() {
        let both = ClassificationResult {
            cognitive_state: CognitiveState::Debugging,
            request_type: RequestType::DebuggingHelp,
            delegation: Some(DelegationKind::Total),
        };
        let decision = StrategySelector::default().select(
            &both,
            AgentMode::Tutor,
            &HistorySummary::default(),
        );
        assert!(decision.block);
        assert_eq!(decision.response_type, ResponseType::SocraticBlock);
    }

    #[test]
    fn simulator_never_blocks_but_tightens_under_escalation() {
        let selector = StrategySelector::default();
        let calm = selector.select(
            &total_delegation(),
            AgentMode::Simulator,
            &history_with_repeats(0),
        );
        assert!(!calm.block);
        assert_eq!(calm.response_type, ResponseType::RolePlay);
        assert_eq!(calm.detail_level, DetailLevel::Medium);

        let escalated = selector.select(
            &total_delegation(),
            AgentMode::Simulator,
            &history_with_repeats(5),
        );
        assert!(!escalated.block);
        assert_eq!(escalated.detail_level, DetailLevel::Low);
    }

    #[test]
    fn risk_analyst_reports_without_blocking() {
        let decision = StrategySelector::default().select(
            &total_delegation(),
            AgentMode::RiskAnalyst,
            &HistorySummary::default(),
        );
        assert!(!decision.block);
        assert_eq!(decision.response_type, ResponseType::RiskReport);
    }

    // --- property tests ---

    fn arb_state() -> impl Strategy<Value = CognitiveState> {
        prop_oneof![
            Just(CognitiveState::Exploration),
            Just(CognitiveState::Planning),
            Just(CognitiveState::Implementation),
            Just(CognitiveState::Debugging),
            Just(CognitiveState::Reflection),
        ]
    }

    fn arb_delegation() -> impl Strategy<Value = Option<DelegationKind>> {
        prop_oneof![
            Just(None),
            Just(Some(DelegationKind::Partial)),
            Just(Some(DelegationKind::Total)),
        ]
    }

    fn arb_mode() -> impl Strategy<Value = AgentMode> {
        prop_oneof![
            Just(AgentMode::Tutor),
            Just(AgentMode::Evaluator),
            Just(AgentMode::Simulator),
            Just(AgentMode::RiskAnalyst),
        ]
    }

    proptest! {
        #[test]
        fn select_is_deterministic(
            state in arb_state(),
            delegation in arb_delegation(),
            mode in arb_mode(),
            repeats in 0u32..20,
            solutions in 0u32..10,
        ) {
            let classification = ClassificationResult {
                cognitive_state: state,
                request_type: RequestType::Unknown,
                delegation,
            };
            let history = HistorySummary {
                delegation_attempts: repeats,
                successful_autonomous_solutions: solutions,
                ..HistorySummary::default()
            };
            let selector = StrategySelector::default();
            let first = selector.select(&classification, mode, &history);
            let second = selector.select(&classification, mode, &history);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn detail_never_increases_with_repeats(
            state in arb_state(),
            delegation in arb_delegation(),
            mode in arb_mode(),
            repeats in 0u32..19,
        ) {
            let classification = ClassificationResult {
                cognitive_state: state,
                request_type: RequestType::Unknown,
                delegation,
            };
            let selector = StrategySelector::default();
            let fewer = selector.select(
                &classification,
                mode,
                &HistorySummary { delegation_attempts: repeats, ..HistorySummary::default() },
            );
            let more = selector.select(
                &classification,
                mode,
                &HistorySummary { delegation_attempts: repeats + 1, ..HistorySummary::default() },
            );
            prop_assert!(more.detail_level <= fewer.detail_level);
            prop_assert!(more.intervention_level >= fewer.intervention_level);
        }

        #[test]
        fn block_implies_blocking_response_type(
            state in arb_state(),
            delegation in arb_delegation(),
            mode in arb_mode(),
            repeats in 0u32..20,
        ) {
            let classification = ClassificationResult {
                cognitive_state: state,
                request_type: RequestType::Unknown,
                delegation,
            };
            let history = HistorySummary {
                delegation_attempts: repeats,
                ..HistorySummary::default()
            };
            let decision = StrategySelector::default().select(&classification, mode, &history);
            if decision.block {
                prop_assert!(decision.response_type.is_blocking());
            }
        }

        #[test]
        fn evaluator_never_blocks(
            state in arb_state(),
            delegation in arb_delegation(),
            repeats in 0u32..20,
        ) {
            let classification = ClassificationResult {
                cognitive_state: state,
                request_type: RequestType::Unknown,
                delegation,
            };
            let history = HistorySummary {
                delegation_attempts: repeats,
                ..HistorySummary::default()
            };
            let decision = StrategySelector::default()
                .select(&classification, AgentMode::Evaluator, &history);
            prop_assert!(!decision.block);
        }
    }
}
