// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability-based format discovery registry.
//!
//! This crate is the seam between the fixed Arkio core and an open-ended set
//! of format plugins: it finds every implementation of a capability interface
//! visible to a loading context, instantiates and validates all of them
//! eagerly at construction, and exposes the frozen result through
//! capability-filtered iteration and exact-name lookup.
//!
//! Construction is all-or-nothing: one broken candidate fails the whole
//! registry with a [`ConfigurationError`](arkio_core::ConfigurationError)
//! rather than silently shrinking the capability set.

pub mod archivers;
pub mod candidate;
pub mod contexts;
pub mod declarations;
pub mod discoverer;

pub use archivers::{Archivers, CapabilityPredicate, CapabilityView};
pub use candidate::{Candidate, CandidateProvider};
pub use contexts::{AmbientContext, ArchiveFormatRegistration, DeclarationContext, StaticContext};
pub use declarations::parse_declarations;
pub use discoverer::{Filtered, FilteredIter, FormatDiscoverer, FormatEntry};

// Plugins registering with the ambient context submit through this crate's
// `inventory`, so re-export it for version alignment.
pub use inventory;
