// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions for the Arkio plugin architecture.
//!
//! Every discoverable format implements the [`Format`] base trait; archive
//! container formats additionally implement [`ArchiveFormat`].

pub mod archive;
pub mod format;

// Re-export the traits at the traits module level for convenience.
pub use archive::ArchiveFormat;
pub use format::Format;
