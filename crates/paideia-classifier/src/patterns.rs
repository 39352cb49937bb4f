// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern families for prompt classification.
//!
//! All patterns are case-insensitive and cover Spanish and English phrasing.
//! Families are checked independently: delegation detection is orthogonal to
//! cognitive-state detection, so "why does my code fail, just fix it all for
//! me" can match both the debugging and total-delegation families.

use std::sync::LazyLock;

use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("static pattern must compile"))
        .collect()
}

/// Imperative requests for a complete artifact.
pub static TOTAL_DELEGATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"dame (el|la|todo el) (c[oó]digo|soluci[oó]n|programa) complet[oa]",
        r"give me the (full|complete|entire|whole) (code|solution|program|implementation)",
        r"(solve|do) (this|it|everything) (for me )?(entirely|completely)",
        r"resu[eé]lve(lo|me)? (todo|por completo|enteramente)",
        r"hazme? (todo|todo el trabajo|la tarea entera)",
        r"write the (entire|whole|complete) (program|project|solution)",
        r"escribe todo el (programa|c[oó]digo|proyecto)",
        r"do my (homework|assignment|project) for me",
        r"haz mi (tarea|trabajo|proyecto) por m[ií]",
        r"soluci[oó]n completa lista para entregar",
    ])
});

/// Requests for a finished sub-piece without attempted reasoning.
pub static PARTIAL_DELEGATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(write|code|implement) (me )?(a|the|this) (function|method|class|query|loop)",
        r"escr[ií]be(me)? (la|una|el) (funci[oó]n|m[eé]todo|clase|consulta)",
        r"give me the (code|function|method|snippet) (for|that|to)",
        r"dame (el|la) (c[oó]digo|funci[oó]n|m[eé]todo) (de|para|que)",
        r"(can|could) you (write|code|implement|finish) (it|this|that|the)",
        r"puedes? (escribir|implementar|terminar|completar) (la|el|esto)",
        r"(fix|finish|complete) (it|this|the code) for me",
        r"(arr[eé]gla|term[ií]na|compl[eé]ta)(lo|melo) t[uú]",
        r"just (give|send|paste) me the code",
        r"pasa(me)? el c[oó]digo",
    ])
});

/// Weak solution-request phrasing: asks for an artifact but with enough
/// hedging that it only counts as delegation when the session already shows
/// a delegation streak.
pub static SOLUTION_HINT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(show|give) me an? example (code|implementation|solution)",
        r"mu[eé]strame un ejemplo (de c[oó]digo|de soluci[oó]n|implementado)",
        r"how would the (code|implementation|solution) look",
        r"c[oó]mo (quedar[ií]a|se ver[ií]a) el c[oó]digo",
    ])
});

/// "I plan to use X, is that correct?" phrasing.
pub static VALIDATION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"is (that|this|it|my approach) (correct|right|ok|okay|good)",
        r"(est[aá]|estar[ií]a) bien (si|usar|hacer|as[ií])",
        r"es correcto (usar|hacer|que)",
        r"(would|does|will) (this|that|it) work",
        r"funcionar[ií]a (si|esto|eso)",
        r"voy por buen camino",
        r"am i on the right track",
        r"what do you think of my (plan|approach|idea)",
        r"qu[eé] (opinas|piensas) de mi (plan|enfoque|idea)",
    ])
});

/// Error messages, stack traces, and failure questions.
pub static DEBUGGING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\b(error|exception|traceback|stack ?trace|segfault|panic)\b",
        r"why (does|is) (this|it|my code) fail(ing)?",
        r"por qu[eé] (falla|no funciona|se rompe)",
        r"(doesn't|does not|won't|can't) (work|compile|run)",
        r"no (funciona|compila|corre|anda)",
        r"me (da|tira|lanza|arroja) (un )?(error|excepci[oó]n)",
        r"(throws|raises|prints) an? (error|exception)",
        r"unexpected (output|result|behaviou?r)",
        r"resultado inesperado",
    ])
});

/// "What is X", "why does X work" with no solution context.
pub static CONCEPTUAL: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"^\s*¿?\s*(what is|what are|what does .+ mean)",
        r"^\s*¿?\s*(qu[eé] es|qu[eé] son|qu[eé] significa)",
        r"(why|how) does .+ work",
        r"(por qu[eé]|c[oó]mo) funciona",
        r"para qu[eé] (se usa|sirve)",
        r"what('s| is) the difference between",
        r"cu[aá]l es la diferencia entre",
        r"explain (the concept|what|why|how)",
        r"expl[ií]came? (el concepto|qu[eé]|por qu[eé]|c[oó]mo)",
    ])
});

/// First-person future/intent statements.
pub static PLANNING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bi (will|plan to|am going to|intend to|'ll) (implement|use|build|start|try|write)",
        r"my (approach|plan|idea|strategy) is",
        r"voy a (implementar|usar|hacer|empezar|intentar|escribir)",
        r"mi (plan|enfoque|idea|estrategia) es",
        r"primero (voy a|pienso|har[eé])",
        r"first,? i('ll| will| am going to)",
        r"pienso (usar|implementar|empezar)",
    ])
});

/// Looking back on completed work.
pub static REFLECTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"\bi (learned|realized|noticed|understood)\b",
        r"(aprend[ií]|me di cuenta|entend[ií]) (que|c[oó]mo)",
        r"looking back",
        r"en retrospectiva",
        r"what (could|should) i (improve|have done)",
        r"qu[eé] (puedo|podr[ií]a|deber[ií]a) mejorar",
        r"did i (do|solve) (it|this) (well|right|correctly)",
        r"lo hice bien",
    ])
});

/// Returns `true` when any pattern in the family matches `text`.
pub fn matches_any(family: &[Regex], text: &str) -> bool {
    family.iter().any(|p| p.is_match(text))
}
