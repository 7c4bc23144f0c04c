// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The loading-context port the discovery engine depends on.
//!
//! A [`CandidateProvider`] enumerates [`Candidate`] descriptors: a
//! fully-qualified implementation id paired with the zero-argument
//! construction path used to instantiate it. Keeping enumeration behind this
//! port keeps the discovery algorithm and its fail-fast policy independent of
//! any particular plugin-listing mechanism.

use std::fmt;
use std::sync::Arc;

use arkio_core::ConfigurationError;

type Constructor<T> = dyn Fn() -> Result<Arc<T>, ConfigurationError> + Send + Sync;

/// A candidate implementation descriptor produced by a loading context.
///
/// The registry instantiates each candidate exactly once during discovery.
pub struct Candidate<T: ?Sized> {
    id: String,
    construct: Arc<Constructor<T>>,
}

impl<T: ?Sized> Candidate<T> {
    /// Create a candidate from a fully-qualified id and its construction path.
    pub fn new(
        id: impl Into<String>,
        construct: impl Fn() -> Result<Arc<T>, ConfigurationError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            construct: Arc::new(construct),
        }
    }

    /// The fully-qualified id this candidate was declared under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Run the zero-argument construction path.
    pub fn construct(&self) -> Result<Arc<T>, ConfigurationError> {
        (self.construct)()
    }
}

impl<T: ?Sized> Clone for Candidate<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            construct: Arc::clone(&self.construct),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Candidate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("id", &self.id).finish_non_exhaustive()
    }
}

/// A loading context: an ordered, finite, deterministic enumeration source of
/// candidate implementations of `T`.
///
/// Enumeration itself may fail (reading declaration artifacts, resolving ids);
/// that failure propagates as the registry's own construction failure. The
/// registry borrows the provider for the duration of discovery and never
/// mutates it.
pub trait CandidateProvider<T: ?Sized>: Send + Sync {
    /// Enumerate candidate implementation descriptors visible to this context.
    fn candidates(&self) -> Result<Vec<Candidate<T>>, ConfigurationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkio_core::{ArchiveFormat, Format};
    use arkio_test_utils::MockFormat;

    #[test]
    fn construct_runs_the_construction_path() {
        let candidate: Candidate<dyn ArchiveFormat> = Candidate::new("mock::zip", || {
            Ok(Arc::new(MockFormat::named("zip").with_random_access_input(true))
                as Arc<dyn ArchiveFormat>)
        });
        assert_eq!(candidate.id(), "mock::zip");
        let instance = candidate.construct().expect("construction should succeed");
        assert_eq!(Format::name(instance.as_ref()), "zip");
    }

    #[test]
    fn debug_elides_the_constructor() {
        let candidate: Candidate<dyn ArchiveFormat> =
            Candidate::new("mock::tar", || Err(ConfigurationError::new("boom")));
        let rendered = format!("{candidate:?}");
        assert!(rendered.contains("mock::tar"));
        assert!(!rendered.contains("construct"));
    }
}
