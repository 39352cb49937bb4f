// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heuristic prompt classification for the Paideia tutoring engine.
//!
//! Inspects a raw student utterance plus lightweight session context and
//! assigns a cognitive state, a request type, and a delegation kind. Zero
//! cost and zero latency: no LLM pre-call, no network, no storage.

pub mod classifier;
pub mod patterns;

pub use classifier::{ClassificationContext, PromptClassifier};
