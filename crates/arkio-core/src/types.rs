// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across format traits and the discovery registry.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifies one of the fixed capabilities an archive format can declare.
///
/// Each variant corresponds to a predicate on
/// [`ArchiveFormat`](crate::traits::ArchiveFormat). Capabilities are
/// declarative facts about a format, not operations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum FormatCapability {
    /// The format can write archives to a sink that cannot seek.
    NonSeekableWrite,
    /// The format can read archives from a source that cannot seek.
    NonSeekableRead,
    /// The format supports random-access reads over its input.
    RandomAccessInput,
}
