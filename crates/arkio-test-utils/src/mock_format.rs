// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock archive format for deterministic testing.
//!
//! `MockFormat` implements `ArchiveFormat` with a configurable name and
//! capability flags, so tests can assemble loading contexts with any
//! capability mix without touching real codecs.

use arkio_core::{ArchiveFormat, Format};

/// A capability-configurable archive format for tests.
///
/// All capability flags default to `false`; enable them through the builder
/// methods.
#[derive(Debug, Clone)]
pub struct MockFormat {
    name: String,
    non_seekable_write: bool,
    non_seekable_read: bool,
    random_access_input: bool,
}

impl MockFormat {
    /// Create a mock format with the given name and no capabilities.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            non_seekable_write: false,
            non_seekable_read: false,
            random_access_input: false,
        }
    }

    /// Set whether the format claims write support for non-seekable channels.
    pub fn with_non_seekable_write(mut self, value: bool) -> Self {
        self.non_seekable_write = value;
        self
    }

    /// Set whether the format claims read support for non-seekable channels.
    pub fn with_non_seekable_read(mut self, value: bool) -> Self {
        self.non_seekable_read = value;
        self
    }

    /// Set whether the format claims random-access input support.
    pub fn with_random_access_input(mut self, value: bool) -> Self {
        self.random_access_input = value;
        self
    }
}

impl Format for MockFormat {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ArchiveFormat for MockFormat {
    fn supports_writing_to_non_seekable_channels(&self) -> bool {
        self.non_seekable_write
    }

    fn supports_reading_from_non_seekable_channels(&self) -> bool {
        self.non_seekable_read
    }

    fn supports_random_access_input(&self) -> bool {
        self.random_access_input
    }
}
