// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session-level risk aggregation.
//!
//! The analyzer scores one utterance at a time; the orchestrator folds those
//! per-turn sets into a running session view. Composition is max-per-dimension
//! so one high-risk turn keeps the session flagged even if later turns are
//! benign. Indicator trails are concatenated in turn order and capped by
//! config so a long session cannot grow the aggregate without bound.

use std::collections::BTreeMap;

use paideia_core::types::{DimensionScore, RiskDimension, RiskLevel, RiskScoreSet};

/// Running max-per-dimension risk view for one session.
#[derive(Debug, Clone)]
pub struct SessionRiskAggregate {
    rule_version: String,
    max_indicators: usize,
    turns_merged: u32,
    scores: BTreeMap<RiskDimension, DimensionScore>,
}

impl SessionRiskAggregate {
    pub fn new(rule_version: impl Into<String>, max_indicators: usize) -> Self {
        let scores = RiskDimension::ALL
            .into_iter()
            .map(|dim| (dim, DimensionScore::zero()))
            .collect();
        Self {
            rule_version: rule_version.into(),
            max_indicators,
            turns_merged: 0,
            scores,
        }
    }

    /// Fold one per-turn score set into the session view.
    pub fn merge(&mut self, turn: &RiskScoreSet) {
        self.rule_version = turn.rule_version.clone();
        for (dim, entry) in turn.iter() {
            let agg = self
                .scores
                .get_mut(&dim)
                .expect("aggregate holds all dimensions");
            if entry.score > agg.score {
                agg.score = entry.score;
                agg.level = entry.level;
            }
            for indicator in &entry.indicators {
                if agg.indicators.len() >= self.max_indicators {
                    break;
                }
                agg.indicators.push(indicator.clone());
            }
        }
        self.turns_merged += 1;
    }

    /// Number of turns folded in so far.
    pub fn turns_merged(&self) -> u32 {
        self.turns_merged
    }

    /// The highest level across all dimensions.
    pub fn max_level(&self) -> RiskLevel {
        self.scores
            .values()
            .map(|s| s.level)
            .max()
            .unwrap_or(RiskLevel::Low)
    }

    /// Freeze the current view into an immutable score set.
    pub fn snapshot(&self) -> RiskScoreSet {
        RiskScoreSet::new(self.rule_version.clone(), self.scores.clone())
    }
}
