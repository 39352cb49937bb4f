// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Paideia integration tests.
//!
//! Provides a mock LLM provider and fixture builders for fast,
//! deterministic, CI-runnable tests without external services.

pub mod fixtures;
pub mod mock_provider;

pub use mock_provider::MockTutorProvider;
