// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Arkio discovery tests.
//!
//! Provides mock formats and candidate helpers for fast, deterministic,
//! CI-runnable tests without real codecs.
//!
//! # Components
//!
//! - [`MockFormat`] - Capability-configurable archive format
//! - [`candidate_of`] / [`failing_candidate`] / [`counting_candidate`] -
//!   candidate descriptors for well-formed, broken, and instrumented plugins
//! - [`static_context`] - in-memory loading contexts built from mock formats

pub mod candidates;
pub mod mock_format;

pub use candidates::{
    candidate_of, counting_candidate, failing_candidate, static_context, StaticArchiveContext,
};
pub use mock_format::MockFormat;
