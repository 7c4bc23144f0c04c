// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Archive-format specialization of the discovery engine.
//!
//! [`Archivers`] binds [`FormatDiscoverer`] to [`ArchiveFormat`] and adds
//! named convenience views — one pre-bound predicate per capability — plus a
//! name-lookup pass-through. It introduces no state or algorithm of its own.

use std::sync::Arc;

use arkio_core::{ArchiveFormat, ConfigurationError, FormatCapability};

use crate::candidate::CandidateProvider;
use crate::contexts::AmbientContext;
use crate::discoverer::{Filtered, FormatDiscoverer, FormatEntry};

/// Predicate signature used by the pre-bound capability views.
pub type CapabilityPredicate = fn(&dyn ArchiveFormat) -> bool;

/// A capability-filtered view over the discovered archive formats.
pub type CapabilityView<'a> = Filtered<'a, dyn ArchiveFormat, CapabilityPredicate>;

/// Registry of all discoverable archive formats.
///
/// Discovery runs eagerly inside the constructors so a mis-packaged format
/// plugin surfaces as a startup failure; afterwards the registry is frozen
/// and freely shareable across threads.
#[derive(Debug)]
pub struct Archivers {
    formats: FormatDiscoverer<dyn ArchiveFormat>,
}

impl Archivers {
    /// Discover archive formats in the ambient loading context.
    pub fn new() -> Result<Self, ConfigurationError> {
        Self::with_context(&AmbientContext)
    }

    /// Discover archive formats in an explicitly supplied loading context.
    pub fn with_context(
        context: &dyn CandidateProvider<dyn ArchiveFormat>,
    ) -> Result<Self, ConfigurationError> {
        let formats = FormatDiscoverer::discover(context)?;
        tracing::info!(count = formats.len(), "archive format registry ready");
        Ok(Self { formats })
    }

    /// All known formats that can write archives to non-seekable channels.
    pub fn formats_with_write_support_for_non_seekable_channels(&self) -> CapabilityView<'_> {
        self.formats.filter(|f| f.supports_writing_to_non_seekable_channels())
    }

    /// All known formats that can read archives from non-seekable channels.
    pub fn formats_with_read_support_for_non_seekable_channels(&self) -> CapabilityView<'_> {
        self.formats.filter(|f| f.supports_reading_from_non_seekable_channels())
    }

    /// All known formats that provide random-access input.
    pub fn formats_with_random_access_input(&self) -> CapabilityView<'_> {
        self.formats.filter(|f| f.supports_random_access_input())
    }

    /// All known formats declaring the given capability.
    pub fn formats_with_capability(
        &self,
        capability: FormatCapability,
    ) -> Filtered<'_, dyn ArchiveFormat, impl Fn(&dyn ArchiveFormat) -> bool> {
        self.formats.filter(move |f| f.supports(capability))
    }

    /// Filter the discovered formats by an arbitrary capability predicate.
    pub fn filter<P>(&self, predicate: P) -> Filtered<'_, dyn ArchiveFormat, P>
    where
        P: Fn(&dyn ArchiveFormat) -> bool,
    {
        self.formats.filter(predicate)
    }

    /// Get a format by its exact, case-sensitive name.
    pub fn archive_format_by_name(&self, name: &str) -> Option<&Arc<dyn ArchiveFormat>> {
        self.formats.format_by_name(name)
    }

    /// Iterate over every discovered format entry, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatEntry<dyn ArchiveFormat>> {
        self.formats.iter()
    }

    /// Returns the number of discovered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Returns true if no formats were discovered.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkio_discovery::{Archivers, CapabilityView};
    use arkio_test_utils::{static_context, MockFormat};

    fn sample_archivers() -> Archivers {
        let context = static_context([
            MockFormat::named("zip").with_random_access_input(true),
            MockFormat::named("tar")
                .with_non_seekable_write(true)
                .with_non_seekable_read(true),
            MockFormat::named("cpio")
                .with_non_seekable_write(true)
                .with_non_seekable_read(true),
        ]);
        Archivers::with_context(&context).expect("discovery should succeed")
    }

    fn names<'a>(view: &CapabilityView<'a>) -> Vec<&'a str> {
        view.iter().map(|f| f.name()).collect()
    }

    #[test]
    fn capability_views_are_pre_bound_filters() {
        let archivers = sample_archivers();
        assert_eq!(
            names(&archivers.formats_with_write_support_for_non_seekable_channels()),
            ["tar", "cpio"]
        );
        assert_eq!(
            names(&archivers.formats_with_read_support_for_non_seekable_channels()),
            ["tar", "cpio"]
        );
        assert_eq!(names(&archivers.formats_with_random_access_input()), ["zip"]);
    }

    #[test]
    fn capability_enum_view_matches_named_views() {
        let archivers = sample_archivers();
        let by_enum: Vec<&str> = archivers
            .formats_with_capability(FormatCapability::RandomAccessInput)
            .iter()
            .map(|f| f.name())
            .collect();
        assert_eq!(by_enum, ["zip"]);
    }

    #[test]
    fn name_lookup_passes_through() {
        let archivers = sample_archivers();
        let tar = archivers.archive_format_by_name("tar").expect("tar should resolve");
        assert!(tar.supports_writing_to_non_seekable_channels());
        assert!(archivers.archive_format_by_name("gzip").is_none());
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        let archivers = std::sync::Arc::new(sample_archivers());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let archivers = std::sync::Arc::clone(&archivers);
                std::thread::spawn(move || {
                    assert_eq!(archivers.len(), 3);
                    assert!(archivers.archive_format_by_name("zip").is_some());
                    archivers.formats_with_random_access_input().iter().count()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
