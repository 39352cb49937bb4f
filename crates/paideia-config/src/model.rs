// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Paideia tutoring engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. Every numeric knob the pipeline consumes lives
//! here: pattern-scan caps, the risk threshold ladder, escalation thresholds,
//! cache bounds, and the per-turn timeout. None of them are scattered through
//! control flow.

use serde::{Deserialize, Serialize};

/// Top-level Paideia configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaideiaConfig {
    /// Prompt classification settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Risk heuristics settings.
    #[serde(default)]
    pub risk: RiskConfig,

    /// Strategy selection and escalation settings.
    #[serde(default)]
    pub strategy: StrategyConfig,

    /// Orchestrator settings (timeouts, caches, aggregation bounds).
    #[serde(default)]
    pub engine: EngineConfig,
}

/// Prompt classification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Soft cap on the number of characters scanned for pattern matches.
    /// Keeps classification bounded on pathological input; text past the cap
    /// is ignored by the pattern scan.
    #[serde(default = "default_scan_cap_chars")]
    pub scan_cap_chars: usize,

    /// Utterances at or below this many words are treated as short
    /// follow-ups and inherit a bias toward the previous cognitive state.
    #[serde(default = "default_follow_up_max_words")]
    pub follow_up_max_words: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            scan_cap_chars: default_scan_cap_chars(),
            follow_up_max_words: default_follow_up_max_words(),
        }
    }
}

fn default_scan_cap_chars() -> usize {
    4096
}

fn default_follow_up_max_words() -> usize {
    4
}

/// Risk heuristics configuration.
///
/// The three ladder thresholds apply identically to every dimension:
/// `score < medium` is low, `[medium, high)` is medium, `[high, critical]`
/// is high, `> critical` is critical.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RiskConfig {
    /// Lower bound of the medium band.
    #[serde(default = "default_medium_threshold")]
    pub medium_threshold: f64,

    /// Lower bound of the high band.
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,

    /// Upper bound of the high band; scores strictly above are critical.
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,

    /// Average AI-involvement above which the governance dimension receives
    /// a history-driven increment.
    #[serde(default = "default_involvement_threshold")]
    pub involvement_threshold: f64,

    /// Delegation-attempt count at which the cognitive dimension receives a
    /// history-driven increment.
    #[serde(default = "default_delegation_streak")]
    pub delegation_streak: u32,

    /// Cognitive-dimension increment applied when `delegation_streak` is
    /// reached.
    #[serde(default = "default_streak_cognitive_increment")]
    pub streak_cognitive_increment: f64,

    /// Governance-dimension increment applied when `delegation_streak` is
    /// reached.
    #[serde(default = "default_streak_governance_increment")]
    pub streak_governance_increment: f64,

    /// Governance-dimension increment applied when `avg_ai_involvement`
    /// exceeds `involvement_threshold`.
    #[serde(default = "default_involvement_governance_increment")]
    pub involvement_governance_increment: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            medium_threshold: default_medium_threshold(),
            high_threshold: default_high_threshold(),
            critical_threshold: default_critical_threshold(),
            involvement_threshold: default_involvement_threshold(),
            delegation_streak: default_delegation_streak(),
            streak_cognitive_increment: default_streak_cognitive_increment(),
            streak_governance_increment: default_streak_governance_increment(),
            involvement_governance_increment: default_involvement_governance_increment(),
        }
    }
}

fn default_medium_threshold() -> f64 {
    3.0
}

fn default_high_threshold() -> f64 {
    6.0
}

fn default_critical_threshold() -> f64 {
    8.0
}

fn default_involvement_threshold() -> f64 {
    0.8
}

fn default_delegation_streak() -> u32 {
    3
}

fn default_streak_cognitive_increment() -> f64 {
    2.0
}

fn default_streak_governance_increment() -> f64 {
    1.5
}

fn default_involvement_governance_increment() -> f64 {
    2.5
}

/// Strategy selection and escalation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StrategyConfig {
    /// Delegation attempts in history at which escalation starts.
    #[serde(default = "default_repeat_threshold")]
    pub repeat_threshold: u32,

    /// Cap on the intervention level.
    #[serde(default = "default_intervention_cap")]
    pub intervention_cap: u8,

    /// Autonomous solutions at which guided hints drop to medium detail.
    #[serde(default = "default_autonomy_medium")]
    pub autonomy_medium: u32,

    /// Autonomous solutions at which guided hints drop to low detail.
    #[serde(default = "default_autonomy_low")]
    pub autonomy_low: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            repeat_threshold: default_repeat_threshold(),
            intervention_cap: default_intervention_cap(),
            autonomy_medium: default_autonomy_medium(),
            autonomy_low: default_autonomy_low(),
        }
    }
}

fn default_repeat_threshold() -> u32 {
    3
}

fn default_intervention_cap() -> u8 {
    5
}

fn default_autonomy_medium() -> u32 {
    1
}

fn default_autonomy_low() -> u32 {
    3
}

/// Orchestrator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Per-turn deadline covering the downstream LLM call, in seconds.
    #[serde(default = "default_turn_timeout_secs")]
    pub turn_timeout_secs: u64,

    /// Maximum number of sessions held in the previous-state cache.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Time-to-live for previous-state cache entries, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Cap on indicators kept per dimension in the session-level risk
    /// aggregate.
    #[serde(default = "default_max_aggregate_indicators")]
    pub max_aggregate_indicators: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            turn_timeout_secs: default_turn_timeout_secs(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl_secs(),
            max_aggregate_indicators: default_max_aggregate_indicators(),
        }
    }
}

fn default_turn_timeout_secs() -> u64 {
    30
}

fn default_cache_capacity() -> usize {
    1024
}

fn default_cache_ttl_secs() -> u64 {
    1800
}

fn default_max_aggregate_indicators() -> usize {
    32
}
