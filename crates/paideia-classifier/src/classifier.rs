// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic prompt classification.
//!
//! Assigns a cognitive state, a request type, and a delegation kind to each
//! student utterance using the bilingual pattern families in `patterns`.
//! Pure function of (utterance, context): no network, no storage, bounded
//! time via the configurable scan cap.

use paideia_config::ClassifierConfig;
use paideia_core::types::{
    ClassificationResult, CognitiveState, DelegationKind, RequestType,
};
use paideia_core::PaideiaError;
use tracing::debug;

use crate::patterns;

/// Lightweight per-turn context supplied by the orchestrator.
///
/// `previous_state` lets ambiguous short follow-ups ("and now what?")
/// continue the prior phase instead of resetting to the default.
/// `prior_delegations` makes weak artifact requests count as partial
/// delegation once a session shows a delegation streak.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationContext {
    pub previous_state: Option<CognitiveState>,
    pub prior_delegations: u32,
}

/// Delegation attempts at which weak solution hints are promoted to
/// partial delegation.
const HINT_PROMOTION_STREAK: u32 = 2;

/// Heuristic prompt classifier with zero cost and zero latency.
pub struct PromptClassifier {
    config: ClassifierConfig,
}

impl PromptClassifier {
    /// Create a classifier with the given configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a student utterance.
    ///
    /// Empty or whitespace-only input is a caller error. Ambiguous input
    /// never fails: it maps to `request_type = Unknown`,
    /// `cognitive_state = Exploration` (or the previous state for short
    /// follow-ups).
    pub fn classify(
        &self,
        utterance: &str,
        context: &ClassificationContext,
    ) -> Result<ClassificationResult, PaideiaError> {
        let trimmed = utterance.trim();
        if trimmed.is_empty() {
            return Err(PaideiaError::InvalidInput(
                "utterance must not be empty".to_string(),
            ));
        }

        // Scan only the first `scan_cap_chars` characters so pathological
        // input stays bounded. The cap is a char count; find the matching
        // byte boundary.
        let scanned = match trimmed.char_indices().nth(self.config.scan_cap_chars) {
            Some((byte_idx, _)) => &trimmed[..byte_idx],
            None => trimmed,
        };

        let delegation = self.detect_delegation(scanned, context);
        let cognitive_state = self.detect_state(scanned, delegation, context);
        let request_type = Self::detect_request_type(scanned, delegation);

        let result = ClassificationResult {
            cognitive_state,
            request_type,
            delegation,
        };
        debug!(
            state = %result.cognitive_state,
            request = %result.request_type,
            delegation = ?result.delegation,
            "classified utterance"
        );
        Ok(result)
    }

    fn detect_delegation(
        &self,
        text: &str,
        context: &ClassificationContext,
    ) -> Option<DelegationKind> {
        // Total before partial: "dame el código completo" also matches the
        // partial family's "dame el código" phrasing.
        if patterns::matches_any(&patterns::TOTAL_DELEGATION, text) {
            return Some(DelegationKind::Total);
        }
        if patterns::matches_any(&patterns::PARTIAL_DELEGATION, text) {
            return Some(DelegationKind::Partial);
        }
        // Weak artifact requests only count once the session shows a streak.
        if context.prior_delegations >= HINT_PROMOTION_STREAK
            && patterns::matches_any(&patterns::SOLUTION_HINT, text)
        {
            return Some(DelegationKind::Partial);
        }
        None
    }

    fn detect_state(
        &self,
        text: &str,
        delegation: Option<DelegationKind>,
        context: &ClassificationContext,
    ) -> CognitiveState {
        if patterns::matches_any(&patterns::DEBUGGING, text) {
            return CognitiveState::Debugging;
        }
        if patterns::matches_any(&patterns::PLANNING, text) {
            return CognitiveState::Planning;
        }
        if patterns::matches_any(&patterns::REFLECTION, text) {
            return CognitiveState::Reflection;
        }
        if patterns::matches_any(&patterns::CONCEPTUAL, text) {
            return CognitiveState::Exploration;
        }
        // A delegation request with no other signal is implementation-phase:
        // the student is trying to produce the artifact.
        if delegation.is_some() {
            return CognitiveState::Implementation;
        }
        // Short ambiguous follow-ups inherit the previous state rather than
        // resetting the session to the default.
        if let Some(previous) = context.previous_state {
            let words = text.split_whitespace().count();
            if words <= self.config.follow_up_max_words {
                return previous;
            }
        }
        CognitiveState::Exploration
    }

    fn detect_request_type(text: &str, delegation: Option<DelegationKind>) -> RequestType {
        if patterns::matches_any(&patterns::VALIDATION, text) {
            return RequestType::Validation;
        }
        if patterns::matches_any(&patterns::CONCEPTUAL, text) {
            return RequestType::Conceptual;
        }
        if patterns::matches_any(&patterns::DEBUGGING, text) {
            return RequestType::DebuggingHelp;
        }
        if delegation.is_some() || patterns::matches_any(&patterns::SOLUTION_HINT, text) {
            return RequestType::Solution;
        }
        RequestType::Unknown
    }
}

impl Default for PromptClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(utterance: &str) -> ClassificationResult {
        PromptClassifier::default()
            .classify(utterance, &ClassificationContext::default())
            .unwrap()
    }

    #[test]
    fn total_delegation_in_spanish() {
        let result = classify("Dame el código completo de una cola con arreglos");
        assert!(result.delegation_detected());
        assert_eq!(result.delegation, Some(DelegationKind::Total));
        assert_eq!(result.request_type, RequestType::Solution);
        assert_eq!(result.cognitive_state, CognitiveState::Implementation);
    }

    #[test]
    fn conceptual_question_in_spanish() {
        let result = classify("¿Qué es una cola y para qué se usa?");
        assert!(!result.delegation_detected());
        assert_eq!(result.request_type, RequestType::Conceptual);
        assert_eq!(result.cognitive_state, CognitiveState::Exploration);
    }

    #[test]
    fn partial_delegation_in_english() {
        let result = classify("can you write the function that merges both lists?");
        assert_eq!(result.delegation, Some(DelegationKind::Partial));
    }

    #[test]
    fn debugging_state_with_delegation_kept_separately() {
        // Both families match; the result carries both signals and the
        // selector applies the tie-break.
        let result = classify("my code throws an error, just give me the code fixed");
        assert_eq!(result.cognitive_state, CognitiveState::Debugging);
        assert_eq!(result.delegation, Some(DelegationKind::Partial));
    }

    #[test]
    fn validation_request() {
        let result = classify("I plan to use a circular buffer, is that correct?");
        assert_eq!(result.request_type, RequestType::Validation);
        // First-person intent also marks the planning phase.
        assert_eq!(result.cognitive_state, CognitiveState::Planning);
    }

    #[test]
    fn planning_statement() {
        let result = classify("voy a implementar la cola con dos pilas");
        assert_eq!(result.cognitive_state, CognitiveState::Planning);
        assert!(!result.delegation_detected());
    }

    #[test]
    fn reflection_statement() {
        let result = classify("looking back, I learned that I should test edge cases first");
        assert_eq!(result.cognitive_state, CognitiveState::Reflection);
    }

    #[test]
    fn ambiguous_input_maps_to_safe_default() {
        let result = classify("queues and stuff maybe with pointers somehow");
        assert_eq!(result.request_type, RequestType::Unknown);
        assert_eq!(result.cognitive_state, CognitiveState::Exploration);
        assert!(!result.delegation_detected());
    }

    #[test]
    fn empty_utterance_is_invalid_input() {
        let classifier = PromptClassifier::default();
        let err = classifier
            .classify("   ", &ClassificationContext::default())
            .unwrap_err();
        assert!(matches!(err, PaideiaError::InvalidInput(_)));
    }

    #[test]
    fn short_follow_up_inherits_previous_state() {
        let classifier = PromptClassifier::default();
        let context = ClassificationContext {
            previous_state: Some(CognitiveState::Debugging),
            prior_delegations: 0,
        };
        let result = classifier.classify("and now what?", &context).unwrap();
        assert_eq!(result.cognitive_state, CognitiveState::Debugging);
    }

    #[test]
    fn long_utterance_does_not_inherit_previous_state() {
        let classifier = PromptClassifier::default();
        let context = ClassificationContext {
            previous_state: Some(CognitiveState::Debugging),
            prior_delegations: 0,
        };
        let result = classifier
            .classify(
                "I want to talk about something unrelated to the earlier problem now",
                &context,
            )
            .unwrap();
        assert_eq!(result.cognitive_state, CognitiveState::Exploration);
    }

    #[test]
    fn solution_hint_promoted_after_delegation_streak() {
        let classifier = PromptClassifier::default();
        let fresh = ClassificationContext::default();
        let streaky = ClassificationContext {
            previous_state: None,
            prior_delegations: 2,
        };
        let hint = "show me an example implementation of the enqueue";
        assert_eq!(
            classifier.classify(hint, &fresh).unwrap().delegation,
            None
        );
        assert_eq!(
            classifier.classify(hint, &streaky).unwrap().delegation,
            Some(DelegationKind::Partial)
        );
    }

    #[test]
    fn pathological_input_is_bounded_by_scan_cap() {
        let config = ClassifierConfig {
            scan_cap_chars: 64,
            ..ClassifierConfig::default()
        };
        let classifier = PromptClassifier::new(config);
        // The delegation phrase sits past the cap, so it is not scanned.
        let mut utterance = "a ".repeat(64);
        utterance.push_str("give me the full code");
        let result = classifier
            .classify(&utterance, &ClassificationContext::default())
            .unwrap();
        assert!(!result.delegation_detected());
    }
}
