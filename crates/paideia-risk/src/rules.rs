// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The declarative risk rule table.
//!
//! Each rule is a (pattern, dimension, weight) triple with a stable id and a
//! human-readable indicator label. Rule changes never touch analyzer control
//! flow: the analyzer only iterates this table. The table carries a version
//! string so score sets record which rule set produced them.
//!
//! One utterance phrasing may appear under several dimensions with different
//! weights (a total-delegation request is a high cognitive risk and a medium
//! epistemic one); those are separate rules sharing a pattern.

use std::sync::LazyLock;

use paideia_core::types::RiskDimension;
use regex::Regex;

/// Version of the rule table. Bump on any rule addition, removal, or weight
/// change.
pub const RULE_VERSION: &str = "2026.08.1";

/// One entry in the risk rule table.
#[derive(Debug)]
pub struct RiskRule {
    /// Stable identifier, `<family>/<dimension>`.
    pub id: &'static str,
    /// The dimension this rule scores against.
    pub dimension: RiskDimension,
    /// Score increment applied when the pattern matches.
    pub weight: f64,
    /// Case-insensitive bilingual pattern.
    pub pattern: Regex,
    /// Human-readable explanation surfaced in `indicators`.
    pub indicator: &'static str,
}

fn rule(
    id: &'static str,
    dimension: RiskDimension,
    weight: f64,
    pattern: &str,
    indicator: &'static str,
) -> RiskRule {
    RiskRule {
        id,
        dimension,
        weight,
        pattern: Regex::new(&format!("(?i){pattern}")).expect("static rule must compile"),
        indicator,
    }
}

const TOTAL_DELEGATION_PATTERN: &str = r"dame (el|la|todo el) (c[oó]digo|soluci[oó]n|programa) complet[oa]|give me the (full|complete|entire|whole) (code|solution|program)|(solve|do) (this|it|everything) (for me )?(entirely|completely)|resu[eé]lve(lo|me)? todo|do my (homework|assignment) for me|haz mi (tarea|trabajo) por m[ií]";

const PARTIAL_DELEGATION_PATTERN: &str = r"(write|code|implement) (me )?(a|the|this) (function|method|class)|escr[ií]be(me)? (la|una|el) (funci[oó]n|m[eé]todo|clase)|just (give|send|paste) me the code|pasa(me)? el c[oó]digo";

/// The full rule table, in detection order.
pub static RULE_TABLE: LazyLock<Vec<RiskRule>> = LazyLock::new(|| {
    vec![
        // --- cognitive: offloading the thinking itself ---
        rule(
            "delegation-total/cognitive",
            RiskDimension::Cognitive,
            4.0,
            TOTAL_DELEGATION_PATTERN,
            "requested a complete solution artifact",
        ),
        rule(
            "delegation-partial/cognitive",
            RiskDimension::Cognitive,
            2.5,
            PARTIAL_DELEGATION_PATTERN,
            "requested a finished sub-piece without attempted reasoning",
        ),
        rule(
            "answer-only/cognitive",
            RiskDimension::Cognitive,
            3.0,
            r"just (tell|give) me the answer|solo (dime|dame) la respuesta|skip the explanation|sin explicaci[oó]n",
            "asked for the answer with no reasoning",
        ),
        // --- epistemic: not caring how or why it works ---
        rule(
            "delegation-total/epistemic",
            RiskDimension::Epistemic,
            2.0,
            TOTAL_DELEGATION_PATTERN,
            "complete-artifact request bypasses understanding",
        ),
        rule(
            "understanding-refusal/epistemic",
            RiskDimension::Epistemic,
            3.0,
            r"i don'?t (care|need to know) (how|why)|no (me importa|necesito saber) (c[oó]mo|por qu[eé])|whatever you say|lo que t[uú] digas",
            "explicitly declined to understand the solution",
        ),
        rule(
            "blind-trust/epistemic",
            RiskDimension::Epistemic,
            2.0,
            r"i('ll| will) just (copy|paste|use) (it|that|whatever)|lo copio (tal cual|y ya)|without (checking|testing|reading)",
            "intends to use output without verifying it",
        ),
        // --- ethical: misrepresentation and academic dishonesty ---
        rule(
            "authorship/ethical",
            RiskDimension::Ethical,
            4.0,
            r"make it (look|seem) like i wrote|que (parezca|se vea) que lo (hice|escrib[ií]) yo|que no se note que es de (la )?ia|so (the|my) (teacher|professor) (doesn'?t|can'?t) (notice|tell)",
            "asked to disguise AI authorship",
        ),
        rule(
            "assessment/ethical",
            RiskDimension::Ethical,
            4.5,
            r"(durante|during) (el|the) (examen|exam|quiz|test)|answers? (for|to) the exam|respuestas del examen|help me cheat|ay[uú]dame a hacer trampa",
            "requested help during or for an assessment",
        ),
        rule(
            "plagiarism/ethical",
            RiskDimension::Ethical,
            3.5,
            r"plagi(ar|arize|o)|copy (it )?from (a|my) classmate|copiar(lo)? de (un|mi) compa[ñn]ero",
            "plagiarism phrasing detected",
        ),
        // --- technical: unsafe engineering practice ---
        rule(
            "untested-code/technical",
            RiskDimension::Technical,
            2.0,
            r"(skip|without) (the )?test(s|ing)?|sin probar(lo)?|no (pienso|voy a) probar",
            "intends to ship code without testing",
        ),
        rule(
            "error-suppression/technical",
            RiskDimension::Technical,
            2.5,
            r"(ignore|silence|suppress) the (error|warning|exception)|ignorar? (el|la) (error|advertencia|excepci[oó]n)|catch (it )?and (ignore|do nothing)",
            "wants to suppress errors instead of fixing them",
        ),
        rule(
            "secrets/technical",
            RiskDimension::Technical,
            3.0,
            r"hard-?code (the )?(password|token|key|credentials)|poner (la|el) (contrase[ñn]a|clave|token) (directo|en el c[oó]digo)",
            "hard-coded credential phrasing detected",
        ),
        // --- governance: evading oversight and instruction boundaries ---
        rule(
            "oversight-evasion/governance",
            RiskDimension::Governance,
            3.5,
            r"don'?t tell (my|the) (teacher|professor|instructor)|no le (digas|cuentes) al (profe|profesor|docente)|between (you and me|us)|que quede entre nosotros",
            "asked to keep the interaction from instructors",
        ),
        rule(
            "prompt-evasion/governance",
            RiskDimension::Governance,
            4.0,
            r"ignore (your|all|previous) (instructions|rules)|ignora (tus|las) (instrucciones|reglas)|jailbreak|act as if you (have no|had no) (rules|restrictions)|olvida tus restricciones",
            "attempted to evade the tutoring constraints",
        ),
        rule(
            "dependency/governance",
            RiskDimension::Governance,
            2.5,
            r"i can'?t do (anything|this) without (you|the ai)|no puedo (hacer nada|con esto) sin (ti|la ia)|do everything for me from now on|hazlo todo t[uú] de ahora en adelante",
            "expressed total dependence on the assistant",
        ),
    ]
});

/// Rules scoring a given dimension, in table order.
pub fn rules_for(dimension: RiskDimension) -> impl Iterator<Item = &'static RiskRule> {
    RULE_TABLE.iter().filter(move |r| r.dimension == dimension)
}
