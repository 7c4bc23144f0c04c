// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability interface for archive container formats.

use crate::traits::format::Format;
use crate::types::FormatCapability;

/// The contract an archive format plugin satisfies to be discoverable.
///
/// The predicates are declarative facts about the implementation, answered
/// synchronously and without side effects. The interface deliberately exposes
/// no read or write operations; the byte-level codecs live behind a separate
/// surface.
pub trait ArchiveFormat: Format {
    /// Whether this format can write archives to a sink that cannot seek.
    fn supports_writing_to_non_seekable_channels(&self) -> bool;

    /// Whether this format can read archives from a source that cannot seek.
    fn supports_reading_from_non_seekable_channels(&self) -> bool;

    /// Whether this format supports random-access reads over its input.
    fn supports_random_access_input(&self) -> bool;

    /// Answers a capability query by dispatching to the matching predicate.
    fn supports(&self, capability: FormatCapability) -> bool {
        match capability {
            FormatCapability::NonSeekableWrite => self.supports_writing_to_non_seekable_channels(),
            FormatCapability::NonSeekableRead => {
                self.supports_reading_from_non_seekable_channels()
            }
            FormatCapability::RandomAccessInput => self.supports_random_access_input(),
        }
    }
}
