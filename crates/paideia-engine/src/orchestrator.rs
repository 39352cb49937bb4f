// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-turn session orchestration.
//!
//! `SessionOrchestrator` wires the pipeline together: classify the
//! utterance, score its risk against session history, select a strategy,
//! record the intervention, fold the risk into the session aggregate, and
//! only then talk to the LLM boundary. Turns within one session are
//! serialized by a per-session mutex; different sessions proceed
//! concurrently.
//!
//! Governance state always advances before the downstream call: a provider
//! failure or timeout can lose a response, never a recorded decision.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use paideia_classifier::{ClassificationContext, PromptClassifier};
use paideia_config::PaideiaConfig;
use paideia_core::history::HistorySummary;
use paideia_core::traits::TutorProvider;
use paideia_core::types::{
    AgentMode, ClassificationResult, CognitiveState, DetailLevel, ResponseType, RiskScoreSet,
    SessionId, StrategyDecision, TutorRequest, TutorResponse,
};
use paideia_core::PaideiaError;
use paideia_risk::RiskHeuristics;
use paideia_strategy::{StrategySelector, TutorDirective};
use paideia_tracker::{AggregateStats, InterventionRecord, InterventionTracker};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::aggregate::SessionRiskAggregate;
use crate::cache::{Clock, SystemClock, TtlCache};

/// Everything one turn produced, for callers that render or log it.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub classification: ClassificationResult,
    pub risk: RiskScoreSet,
    pub decision: StrategyDecision,
    pub record: InterventionRecord,
    pub directive: TutorDirective,
    /// `None` for observer modes, which never contact the provider.
    pub response: Option<TutorResponse>,
}

/// Mutable per-session state, guarded by the session mutex.
struct SessionState {
    history: HistorySummary,
    turn_index: u32,
    aggregate: SessionRiskAggregate,
}

impl SessionState {
    fn new(max_indicators: usize) -> Self {
        Self {
            history: HistorySummary::new(),
            turn_index: 0,
            aggregate: SessionRiskAggregate::new(paideia_risk::RULE_VERSION, max_indicators),
        }
    }
}

/// Orchestrates the classify, score, select, record pipeline per turn.
pub struct SessionOrchestrator {
    classifier: PromptClassifier,
    risk: RiskHeuristics,
    selector: StrategySelector,
    tracker: InterventionTracker,
    provider: Arc<dyn TutorProvider>,
    sessions: DashMap<SessionId, Arc<Mutex<SessionState>>>,
    /// Last cognitive state per session. TTL-bounded so a long-idle session
    /// does not inherit stale context on resume.
    state_cache: std::sync::Mutex<TtlCache<SessionId, CognitiveState>>,
    turn_timeout: Duration,
    max_aggregate_indicators: usize,
}

impl SessionOrchestrator {
    /// Create an orchestrator from config and a provider, on the real clock.
    pub fn new(config: &PaideiaConfig, provider: Arc<dyn TutorProvider>) -> Self {
        Self::with_clock(config, provider, Arc::new(SystemClock))
    }

    /// Create an orchestrator with an injected clock for the state cache.
    pub fn with_clock(
        config: &PaideiaConfig,
        provider: Arc<dyn TutorProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            classifier: PromptClassifier::new(config.classifier.clone()),
            risk: RiskHeuristics::new(config.risk.clone()),
            selector: StrategySelector::new(config.strategy.clone()),
            tracker: InterventionTracker::new(),
            provider,
            sessions: DashMap::new(),
            state_cache: std::sync::Mutex::new(TtlCache::new(
                config.engine.cache_capacity,
                Duration::from_secs(config.engine.cache_ttl_secs),
                clock,
            )),
            turn_timeout: Duration::from_secs(config.engine.turn_timeout_secs),
            max_aggregate_indicators: config.engine.max_aggregate_indicators,
        }
    }

    /// Run one student turn through the pipeline.
    ///
    /// Classification errors (empty utterance) propagate before any state
    /// changes, so a rejected turn is never counted. Provider errors and
    /// timeouts propagate after the decision has been recorded.
    #[instrument(skip(self, utterance), fields(session_id = %session_id, %mode))]
    pub async fn handle_turn(
        &self,
        session_id: &SessionId,
        utterance: &str,
        mode: AgentMode,
    ) -> Result<TurnOutcome, PaideiaError> {
        let state = self
            .sessions
            .entry(session_id.clone())
            .or_insert_with(|| {
                Arc::new(Mutex::new(SessionState::new(self.max_aggregate_indicators)))
            })
            .clone();
        let mut state = state.lock().await;

        let previous_state = {
            let mut cache = self.state_cache.lock().expect("state cache lock poisoned");
            cache.get(session_id)
        };
        let context = ClassificationContext {
            previous_state,
            prior_delegations: state.history.delegation_attempts,
        };
        let classification = self.classifier.classify(utterance, &context)?;

        let risk = self.risk.analyze(utterance, Some(&state.history));
        let decision = self
            .selector
            .select(&classification, mode, &state.history);
        let record = self
            .tracker
            .record(session_id, state.turn_index, decision.clone());
        state.aggregate.merge(&risk);

        let directive = TutorDirective::render(&decision);
        state
            .history
            .observe_turn(&classification, &decision, Self::involvement_estimate(&decision));
        state.turn_index += 1;
        {
            let mut cache = self.state_cache.lock().expect("state cache lock poisoned");
            cache.insert(session_id.clone(), classification.cognitive_state);
        }

        info!(
            turn_index = record.turn_index,
            state = %classification.cognitive_state,
            response = %decision.response_type,
            risk_level = %risk.max_level(),
            "turn decided"
        );
        drop(state);

        let response = if Self::contacts_provider(decision.response_type) {
            let request = TutorRequest {
                session_id: session_id.clone(),
                utterance: utterance.to_string(),
                constraint: directive.text.clone(),
                detail_level: decision.detail_level,
            };
            let completion = tokio::time::timeout(
                self.turn_timeout,
                self.provider.complete(request),
            )
            .await
            .map_err(|_| {
                warn!(timeout = ?self.turn_timeout, "provider call timed out");
                PaideiaError::Timeout {
                    duration: self.turn_timeout,
                }
            })??;
            Some(completion)
        } else {
            None
        };

        Ok(TurnOutcome {
            classification,
            risk,
            decision,
            record,
            directive,
            response,
        })
    }

    /// Aggregate intervention stats for a session.
    pub fn summarize(&self, session_id: &SessionId) -> AggregateStats {
        self.tracker.summarize(session_id)
    }

    /// Snapshot of the session-level risk aggregate.
    pub async fn session_risk(&self, session_id: &SessionId) -> Option<RiskScoreSet> {
        let state = self.sessions.get(session_id)?.clone();
        let state = state.lock().await;
        Some(state.aggregate.snapshot())
    }

    /// Current history summary for a session.
    pub async fn history(&self, session_id: &SessionId) -> Option<HistorySummary> {
        let state = self.sessions.get(session_id)?.clone();
        let state = state.lock().await;
        Some(state.history.clone())
    }

    /// End a session, dropping its live state and returning the archived
    /// history. Intervention records are append-only and are kept.
    pub async fn end_session(&self, session_id: &SessionId) -> Option<HistorySummary> {
        let (_, state) = self.sessions.remove(session_id)?;
        {
            let mut cache = self.state_cache.lock().expect("state cache lock poisoned");
            cache.remove(session_id);
        }
        let state = state.lock().await;
        info!(%session_id, turns = state.history.turns, "session ended");
        Some(state.history.clone())
    }

    /// Observer modes produce no student-facing content and skip the provider.
    fn contacts_provider(response_type: ResponseType) -> bool {
        !matches!(response_type, ResponseType::Observe | ResponseType::RiskReport)
    }

    /// Coarse estimate of how much of the turn's work the system did, fed
    /// into the rolling involvement mean. A blocked turn produced almost
    /// nothing for the student; otherwise the detail budget is the proxy.
    fn involvement_estimate(decision: &StrategyDecision) -> f64 {
        if decision.block {
            return 0.1;
        }
        match decision.detail_level {
            DetailLevel::High => 0.8,
            DetailLevel::Medium => 0.5,
            DetailLevel::Low => 0.2,
        }
    }
}
