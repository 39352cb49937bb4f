// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The LLM boundary trait.
//!
//! Everything past this trait (HTTP clients, model selection, retries) is an
//! external collaborator. The orchestrator awaits `complete` under its
//! per-turn timeout; the core pipeline itself never suspends.

use async_trait::async_trait;

use crate::error::PaideiaError;
use crate::types::{TutorRequest, TutorResponse};

/// Boundary to the downstream LLM that generates the student-facing reply
/// under the constraint chosen by the strategy selector.
#[async_trait]
pub trait TutorProvider: Send + Sync {
    /// Generate a reply honoring the request's constraint and detail level.
    async fn complete(&self, request: TutorRequest) -> Result<TutorResponse, PaideiaError>;
}
