// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategy selection for the Paideia tutoring engine.
//!
//! Consumes a classification and a session history and decides how the
//! acting agent responds: allow through, redirect Socratically, block with
//! explanation, or scaffold hints, with an associated detail budget.

pub mod directive;
pub mod selector;

pub use directive::TutorDirective;
pub use selector::StrategySelector;
