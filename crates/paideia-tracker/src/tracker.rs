// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only intervention tracking.
//!
//! Every strategy decision becomes an `InterventionRecord`. Records are
//! never mutated or removed by this component (deletion is an external
//! administrative action). Appends from different sessions are safe
//! concurrently; within one session the orchestrator serializes turns, so
//! records arrive in turn order.

use std::collections::BTreeMap;

use dashmap::DashMap;
use paideia_core::types::{ResponseType, Semaphore, SessionId, StrategyDecision};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Intervention level at or above which a record counts as red.
const RED_INTERVENTION_LEVEL: u8 = 4;

/// One recorded strategy decision. Immutable after append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterventionRecord {
    /// Unique record identifier (UUID v4).
    pub id: String,
    pub session_id: SessionId,
    /// Position of the turn within the session, starting at 0.
    pub turn_index: u32,
    pub decision: StrategyDecision,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl InterventionRecord {
    /// The semaphore bucket this record falls into.
    pub fn semaphore(&self) -> Semaphore {
        if self.decision.block || self.decision.intervention_level >= RED_INTERVENTION_LEVEL {
            Semaphore::Red
        } else if self.decision.intervention_level >= 1 || self.decision.redirect {
            Semaphore::Yellow
        } else {
            Semaphore::Green
        }
    }
}

/// Aggregate view over all records of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub session_id: SessionId,
    pub total_records: usize,
    /// Count of records per response type.
    pub by_response_type: BTreeMap<ResponseType, u32>,
    /// Count of records per semaphore bucket.
    pub by_semaphore: BTreeMap<Semaphore, u32>,
    /// Intervention level of the earliest record, if any.
    pub first_intervention_level: Option<u8>,
    /// Intervention level of the latest record, if any. Compared with
    /// `first_intervention_level` this shows the autonomy trend.
    pub last_intervention_level: Option<u8>,
    /// Worst semaphore bucket observed for the session.
    pub session_semaphore: Semaphore,
}

/// Append-only, per-session intervention log.
///
/// Uses a concurrent map keyed by session id: appends from different
/// sessions never contend, and no cross-session read-modify-write exists.
#[derive(Debug, Default)]
pub struct InterventionTracker {
    records: DashMap<SessionId, Vec<InterventionRecord>>,
}

impl InterventionTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decision for a turn and return the stored record.
    pub fn record(
        &self,
        session_id: &SessionId,
        turn_index: u32,
        decision: StrategyDecision,
    ) -> InterventionRecord {
        let record = InterventionRecord {
            id: uuid::Uuid::new_v4().to_string(),
            session_id: session_id.clone(),
            turn_index,
            decision,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.records
            .entry(session_id.clone())
            .or_default()
            .push(record.clone());

        info!(
            session_id = %record.session_id,
            turn_index = record.turn_index,
            response = %record.decision.response_type,
            intervention_level = record.decision.intervention_level,
            semaphore = %record.semaphore(),
            "intervention recorded"
        );
        record
    }

    /// Aggregate stats for one session. Single O(n) pass, side-effect-free.
    pub fn summarize(&self, session_id: &SessionId) -> AggregateStats {
        let mut by_response_type = BTreeMap::new();
        let mut by_semaphore = BTreeMap::new();
        let mut first_intervention_level = None;
        let mut last_intervention_level = None;
        let mut session_semaphore = Semaphore::Green;
        let mut total_records = 0;

        if let Some(records) = self.records.get(session_id) {
            total_records = records.len();
            for record in records.iter() {
                *by_response_type
                    .entry(record.decision.response_type)
                    .or_insert(0u32) += 1;
                let bucket = record.semaphore();
                *by_semaphore.entry(bucket).or_insert(0u32) += 1;
                session_semaphore = session_semaphore.max(bucket);
                if first_intervention_level.is_none() {
                    first_intervention_level = Some(record.decision.intervention_level);
                }
                last_intervention_level = Some(record.decision.intervention_level);
            }
        }

        AggregateStats {
            session_id: session_id.clone(),
            total_records,
            by_response_type,
            by_semaphore,
            first_intervention_level,
            last_intervention_level,
            session_semaphore,
        }
    }

    /// Number of records held for a session.
    pub fn len(&self, session_id: &SessionId) -> usize {
        self.records.get(session_id).map_or(0, |r| r.len())
    }

    /// Whether a session has no records yet.
    pub fn is_empty(&self, session_id: &SessionId) -> bool {
        self.len(session_id) == 0
    }

    /// A snapshot of a session's records, in append order.
    pub fn records(&self, session_id: &SessionId) -> Vec<InterventionRecord> {
        self.records
            .get(session_id)
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}
