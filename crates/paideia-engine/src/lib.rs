// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session orchestration for the Paideia tutoring engine.
//!
//! Ties the classifier, risk analyzer, strategy selector, and intervention
//! tracker into a per-turn pipeline, and owns the session-scoped state:
//! rolling history, the session risk aggregate, and the TTL-bounded
//! previous-state cache.

pub mod aggregate;
pub mod cache;
pub mod orchestrator;

pub use aggregate::SessionRiskAggregate;
pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use orchestrator::{SessionOrchestrator, TurnOutcome};
