// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-table risk analysis.
//!
//! Scores an utterance (or a whole-session window supplied by the
//! orchestrator) along the five fixed dimensions. Pure analysis over the
//! provided text and history: no network, no storage.

use std::collections::BTreeMap;

use paideia_config::RiskConfig;
use paideia_core::history::HistorySummary;
use paideia_core::types::{DimensionScore, RiskDimension, RiskLevel, RiskScoreSet};
use tracing::debug;

use crate::rules::{RULE_TABLE, RULE_VERSION};

/// Upper bound for any dimension score.
const MAX_SCORE: f64 = 10.0;

/// Rule-table risk analyzer.
pub struct RiskHeuristics {
    config: RiskConfig,
}

impl RiskHeuristics {
    /// Create an analyzer with the given threshold configuration.
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Analyze `text` (plus optional session history) into a score set.
    ///
    /// Empty input returns the all-zero, all-low set: absence of interaction
    /// is not inherently risky. Scores are clamped to [0, 10]; levels follow
    /// the configured threshold ladder, identical across dimensions.
    pub fn analyze(&self, text: &str, history: Option<&HistorySummary>) -> RiskScoreSet {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return RiskScoreSet::empty(RULE_VERSION);
        }

        let mut scores: BTreeMap<RiskDimension, (f64, Vec<String>)> = BTreeMap::new();

        for rule in RULE_TABLE.iter() {
            if rule.pattern.is_match(trimmed) {
                debug!(rule = rule.id, dimension = %rule.dimension, "risk rule matched");
                let entry = scores.entry(rule.dimension).or_default();
                entry.0 += rule.weight;
                entry.1.push(rule.indicator.to_string());
            }
        }

        if let Some(history) = history {
            self.apply_history(history, &mut scores);
        }

        let scored = scores
            .into_iter()
            .map(|(dim, (raw, indicators))| {
                let score = raw.clamp(0.0, MAX_SCORE);
                (
                    dim,
                    DimensionScore {
                        score,
                        level: self.level_for(score),
                        indicators,
                    },
                )
            })
            .collect();
        RiskScoreSet::new(RULE_VERSION, scored)
    }

    /// History-driven increments: behavior the single utterance cannot show.
    fn apply_history(
        &self,
        history: &HistorySummary,
        scores: &mut BTreeMap<RiskDimension, (f64, Vec<String>)>,
    ) {
        if history.delegation_attempts >= self.config.delegation_streak {
            let entry = scores.entry(RiskDimension::Cognitive).or_default();
            entry.0 += self.config.streak_cognitive_increment;
            entry.1.push(format!(
                "delegation streak: {} attempts this session",
                history.delegation_attempts
            ));

            let entry = scores.entry(RiskDimension::Governance).or_default();
            entry.0 += self.config.streak_governance_increment;
            entry
                .1
                .push("repeated delegation despite prior redirection".to_string());
        }

        if history.avg_ai_involvement > self.config.involvement_threshold {
            let entry = scores.entry(RiskDimension::Governance).or_default();
            entry.0 += self.config.involvement_governance_increment;
            entry.1.push(format!(
                "average AI involvement {:.2} exceeds {:.2}",
                history.avg_ai_involvement, self.config.involvement_threshold
            ));
        }
    }

    /// The threshold ladder. Monotonic by config validation.
    fn level_for(&self, score: f64) -> RiskLevel {
        if score < self.config.medium_threshold {
            RiskLevel::Low
        } else if score < self.config.high_threshold {
            RiskLevel::Medium
        } else if score <= self.config.critical_threshold {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

impl Default for RiskHeuristics {
    fn default() -> Self {
        Self::new(RiskConfig::default())
    }
}
