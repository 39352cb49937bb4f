// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary trait definitions for external collaborators.

pub mod provider;

pub use provider::TutorProvider;
