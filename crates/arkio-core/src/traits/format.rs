// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base capability trait every discoverable format must implement.

/// The base contract for a pluggable format implementation.
///
/// Discovery instantiates each implementation through its zero-argument
/// construction path and reads the name immediately afterwards, so `name`
/// must be callable on a freshly constructed instance without any further
/// initialization and must not perform side effects.
pub trait Format: Send + Sync + 'static {
    /// Stable, non-empty, implementation-chosen identifier used for lookup.
    ///
    /// Names are matched exactly and case-sensitively. An implementation that
    /// returns an empty name fails discovery-time validation.
    fn name(&self) -> &str;
}
