// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intervention tracking for the Paideia tutoring engine.
//!
//! Records every strategy decision as an append-only structured event and
//! aggregates them into per-session stats (response-type counts, semaphore
//! buckets, autonomy trend) for downstream reporting. Persistence of the
//! archived log belongs to the external storage collaborator.

pub mod tracker;

pub use tracker::{AggregateStats, InterventionRecord, InterventionTracker};
