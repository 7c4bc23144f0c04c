// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Arkio archive toolkit.
//!
//! This crate provides the foundational capability traits, error types, and
//! common types shared across the Arkio workspace. Format plugins implement
//! the traits defined here; the discovery registry in `arkio-discovery`
//! consumes them.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ConfigurationError;
pub use traits::{ArchiveFormat, Format};
pub use types::FormatCapability;
