// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared data model for the Paideia tutoring engine.
//!
//! These types flow between the classifier, risk analyzer, strategy
//! selector, tracker, and orchestrator. Everything here is a plain value
//! type: produced once per pipeline pass and never mutated afterwards,
//! except `HistorySummary` (see the `history` module) which is the one
//! per-session rolling aggregate.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::PaideiaError;

/// Unique identifier for a tutoring session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The pedagogical role the acting agent is playing for this interaction.
///
/// A closed enum: `select` matches exhaustively over it, so an unknown mode
/// cannot fall through silently. Unrecognized mode *strings* are rejected at
/// the parse boundary with [`PaideiaError::UnsupportedMode`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    /// Socratic tutor: guides, scaffolds, and blocks delegation.
    Tutor,
    /// Silent assessor: classifies and logs, never intervenes.
    Evaluator,
    /// Role-play collaborator (client, interviewer, rubber duck).
    Simulator,
    /// Risk analyst: observes and produces risk reports.
    RiskAnalyst,
}

impl AgentMode {
    /// Parse a mode string, mapping failures to [`PaideiaError::UnsupportedMode`].
    pub fn parse(s: &str) -> Result<Self, PaideiaError> {
        Self::from_str(s).map_err(|_| PaideiaError::UnsupportedMode {
            mode: s.to_string(),
        })
    }
}

/// The inferred phase of problem-solving a student is in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CognitiveState {
    Exploration,
    Planning,
    Implementation,
    Debugging,
    Reflection,
}

/// What kind of help the utterance is asking for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// "What is X", "why does X work" with no solution context.
    Conceptual,
    /// "I plan to use X, is that correct?"
    Validation,
    /// A request for a finished artifact or sub-piece.
    Solution,
    /// Error messages, stack traces, "why does this fail".
    DebuggingHelp,
    /// Ambiguous input; the safe default, never an error.
    Unknown,
}

/// How much of the work the student is asking the system to do for them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DelegationKind {
    /// An imperative request for a complete artifact.
    Total,
    /// A request for a finished sub-piece without attempted reasoning.
    Partial,
}

/// Result of classifying one student utterance. Produced once per turn,
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub cognitive_state: CognitiveState,
    pub request_type: RequestType,
    /// `Some` when a delegation pattern matched; the Rust rendering of the
    /// `delegation_detected`/`delegation_type` pair.
    pub delegation: Option<DelegationKind>,
}

impl ClassificationResult {
    /// Whether any delegation pattern was detected.
    pub fn delegation_detected(&self) -> bool {
        self.delegation.is_some()
    }
}

/// The five fixed risk dimensions. Every `RiskScoreSet` carries exactly
/// these, no more, no fewer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    Cognitive,
    Ethical,
    Epistemic,
    Technical,
    Governance,
}

impl RiskDimension {
    /// All five dimensions, in canonical order.
    pub const ALL: [RiskDimension; 5] = [
        RiskDimension::Cognitive,
        RiskDimension::Ethical,
        RiskDimension::Epistemic,
        RiskDimension::Technical,
        RiskDimension::Governance,
    ];
}

/// Qualitative risk level, mapped from a numeric score via the threshold
/// ladder (identical across dimensions for predictability).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Score, level, and matched-indicator trail for one risk dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Numeric score, clamped to [0, 10].
    pub score: f64,
    /// Level derived from `score` via the threshold ladder.
    pub level: RiskLevel,
    /// One human-readable string per matched rule, in detection order.
    /// Non-empty whenever `level` is above `Low`.
    pub indicators: Vec<String>,
}

impl DimensionScore {
    /// A zero score at the lowest level with no indicators.
    pub fn zero() -> Self {
        Self {
            score: 0.0,
            level: RiskLevel::Low,
            indicators: Vec::new(),
        }
    }
}

/// Scores for all five dimensions over one analyzed window. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreSet {
    /// Version of the rule table that produced this set, for reporting
    /// reproducibility.
    pub rule_version: String,
    scores: BTreeMap<RiskDimension, DimensionScore>,
}

impl RiskScoreSet {
    /// Build a score set from exactly the five fixed dimensions.
    ///
    /// Missing dimensions are filled with [`DimensionScore::zero`] so the
    /// invariant "exactly five" holds by construction.
    pub fn new(
        rule_version: impl Into<String>,
        mut scores: BTreeMap<RiskDimension, DimensionScore>,
    ) -> Self {
        for dim in RiskDimension::ALL {
            scores.entry(dim).or_insert_with(DimensionScore::zero);
        }
        Self {
            rule_version: rule_version.into(),
            scores,
        }
    }

    /// An all-zero, all-`Low` set. The result for empty input: absence of
    /// interaction is not inherently risky.
    pub fn empty(rule_version: impl Into<String>) -> Self {
        Self::new(rule_version, BTreeMap::new())
    }

    /// Score entry for one dimension. Always present.
    pub fn get(&self, dimension: RiskDimension) -> &DimensionScore {
        &self.scores[&dimension]
    }

    /// Iterate dimensions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskDimension, &DimensionScore)> {
        self.scores.iter().map(|(d, s)| (*d, s))
    }

    /// The highest level across all dimensions.
    pub fn max_level(&self) -> RiskLevel {
        self.scores
            .values()
            .map(|s| s.level)
            .max()
            .unwrap_or(RiskLevel::Low)
    }
}

/// How much unprompted guidance the response should carry. Ordered:
/// `Low < Medium < High`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Low,
    Medium,
    High,
}

impl DetailLevel {
    /// One step less detail; saturates at `Low`.
    pub fn tightened(self) -> Self {
        match self {
            DetailLevel::High => DetailLevel::Medium,
            DetailLevel::Medium | DetailLevel::Low => DetailLevel::Low,
        }
    }

    /// Tighten `steps` times, saturating at `Low`.
    pub fn tightened_by(self, steps: u8) -> Self {
        let mut level = self;
        for _ in 0..steps {
            level = level.tightened();
        }
        level
    }
}

/// The response strategy family handed to the LLM boundary.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// Refuse the artifact; redirect via Socratic questions.
    SocraticBlock,
    /// Scaffolded hints, detail scaled to demonstrated autonomy.
    GuidedHints,
    /// Full conceptual explanation, no solution artifact at stake.
    ConceptualExplanation,
    /// Prompts that push the student to evaluate their own work.
    MetacognitivePrompts,
    /// In-character role-play reply (simulator mode).
    RolePlay,
    /// Classification-only observation (evaluator mode).
    Observe,
    /// Observation annotated for risk reporting (risk-analyst mode).
    RiskReport,
}

impl ResponseType {
    /// Whether this variant belongs to the blocking-response set.
    pub fn is_blocking(self) -> bool {
        matches!(self, ResponseType::SocraticBlock)
    }
}

/// The strategy chosen for one turn. Derived deterministically from
/// (classification, mode, history); immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyDecision {
    pub response_type: ResponseType,
    pub detail_level: DetailLevel,
    /// `true` implies `response_type.is_blocking()`.
    pub block: bool,
    /// Whether the response should steer the student elsewhere.
    pub redirect: bool,
    /// Escalation counter for repeated risky behavior, capped by config.
    pub intervention_level: u8,
}

/// Three-state summary of how much intervention a session currently warrants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Semaphore {
    Green,
    Yellow,
    Red,
}

// --- LLM boundary types ---

/// A request forwarded to the external LLM boundary after the pipeline has
/// produced its decision. The `constraint` is the rendered tutoring
/// directive, not free text.
#[derive(Debug, Clone)]
pub struct TutorRequest {
    pub session_id: SessionId,
    /// The student's utterance, passed through verbatim.
    pub utterance: String,
    /// Rendered directive constraining the response.
    pub constraint: String,
    pub detail_level: DetailLevel,
}

/// A response from the external LLM boundary.
#[derive(Debug, Clone)]
pub struct TutorResponse {
    pub id: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_mode_parse_round_trip() {
        for mode in [
            AgentMode::Tutor,
            AgentMode::Evaluator,
            AgentMode::Simulator,
            AgentMode::RiskAnalyst,
        ] {
            let s = mode.to_string();
            assert_eq!(AgentMode::parse(&s).unwrap(), mode);
        }
    }

    #[test]
    fn agent_mode_parse_is_case_insensitive() {
        assert_eq!(AgentMode::parse("TUTOR").unwrap(), AgentMode::Tutor);
        assert_eq!(AgentMode::parse("Evaluator").unwrap(), AgentMode::Evaluator);
    }

    #[test]
    fn agent_mode_parse_rejects_unknown() {
        let err = AgentMode::parse("professor").unwrap_err();
        assert!(matches!(
            err,
            PaideiaError::UnsupportedMode { mode } if mode == "professor"
        ));
    }

    #[test]
    fn detail_level_tightens_monotonically() {
        assert_eq!(DetailLevel::High.tightened(), DetailLevel::Medium);
        assert_eq!(DetailLevel::Medium.tightened(), DetailLevel::Low);
        assert_eq!(DetailLevel::Low.tightened(), DetailLevel::Low);
        assert_eq!(DetailLevel::High.tightened_by(5), DetailLevel::Low);
        assert!(DetailLevel::Low < DetailLevel::High);
    }

    #[test]
    fn score_set_always_has_five_dimensions() {
        let set = RiskScoreSet::empty("v1");
        assert_eq!(set.iter().count(), 5);
        for dim in RiskDimension::ALL {
            let entry = set.get(dim);
            assert_eq!(entry.score, 0.0);
            assert_eq!(entry.level, RiskLevel::Low);
            assert!(entry.indicators.is_empty());
        }
    }

    #[test]
    fn score_set_max_level() {
        let mut scores = BTreeMap::new();
        scores.insert(
            RiskDimension::Cognitive,
            DimensionScore {
                score: 7.0,
                level: RiskLevel::High,
                indicators: vec!["total delegation request".into()],
            },
        );
        let set = RiskScoreSet::new("v1", scores);
        assert_eq!(set.max_level(), RiskLevel::High);
    }

    #[test]
    fn blocking_set_membership() {
        assert!(ResponseType::SocraticBlock.is_blocking());
        assert!(!ResponseType::Observe.is_blocking());
        assert!(!ResponseType::ConceptualExplanation.is_blocking());
    }

    #[test]
    fn enums_serialize_as_snake_case() {
        let json = serde_json::to_string(&ResponseType::SocraticBlock).unwrap();
        assert_eq!(json, "\"socratic_block\"");
        let parsed: ResponseType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ResponseType::SocraticBlock);
    }
}
