// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Concrete loading contexts.
//!
//! Three [`CandidateProvider`] implementations cover the common discovery
//! setups:
//!
//! - [`AmbientContext`] enumerates every archive format registered through
//!   [`inventory`] at link time — the default when the caller supplies no
//!   context of its own.
//! - [`DeclarationContext`] restricts and orders discovery by a declaration
//!   artifact (see [`crate::declarations`]), resolving each declared id
//!   against the ambient registration table.
//! - [`StaticContext`] serves an in-memory candidate list directly, which is
//!   also the fake-provider seam tests use.

use std::path::Path;
use std::sync::Arc;

use arkio_core::{ArchiveFormat, ConfigurationError};

use crate::candidate::{Candidate, CandidateProvider};
use crate::declarations::parse_declarations;

/// A link-time registration of an archive format implementation.
///
/// Format plugins submit one of these so the ambient context can find them:
///
/// ```ignore
/// inventory::submit! {
///     ArchiveFormatRegistration {
///         id: "my_crate::SevenZipFormat",
///         construct: || Ok(Arc::new(SevenZipFormat::default()) as Arc<dyn ArchiveFormat>),
///     }
/// }
/// ```
pub struct ArchiveFormatRegistration {
    /// Fully-qualified implementation id, unique per registration.
    pub id: &'static str,
    /// Zero-argument construction path for the implementation.
    pub construct: fn() -> Result<Arc<dyn ArchiveFormat>, ConfigurationError>,
}

inventory::collect!(ArchiveFormatRegistration);

fn registered() -> impl Iterator<Item = &'static ArchiveFormatRegistration> {
    inventory::iter::<ArchiveFormatRegistration>.into_iter()
}

/// The ambient loading context: every registration linked into the binary.
///
/// Enumeration order is fixed for a given binary but not specified across
/// builds; callers needing a portable order should use a
/// [`DeclarationContext`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AmbientContext;

impl CandidateProvider<dyn ArchiveFormat> for AmbientContext {
    fn candidates(&self) -> Result<Vec<Candidate<dyn ArchiveFormat>>, ConfigurationError> {
        Ok(registered().map(|reg| Candidate::new(reg.id, reg.construct)).collect())
    }
}

/// A loading context scoped by a provider-declaration artifact.
///
/// Declared ids are resolved against the ambient registration table at
/// enumeration time; an id with no matching registration fails enumeration,
/// which in turn fails registry construction.
#[derive(Debug, Clone)]
pub struct DeclarationContext {
    ids: Vec<String>,
}

impl DeclarationContext {
    /// Build a context from declaration text already in memory.
    pub fn from_declarations(text: &str) -> Self {
        Self {
            ids: parse_declarations(text).into_iter().map(String::from).collect(),
        }
    }

    /// Build a context by reading a declaration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ConfigurationError::with_source(
                format!("failed to read format declarations from {}", path.display()),
                e,
            )
        })?;
        Ok(Self::from_declarations(&text))
    }

    /// The declared ids, in declaration order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl CandidateProvider<dyn ArchiveFormat> for DeclarationContext {
    fn candidates(&self) -> Result<Vec<Candidate<dyn ArchiveFormat>>, ConfigurationError> {
        self.ids
            .iter()
            .map(|id| {
                registered()
                    .find(|reg| reg.id == id.as_str())
                    .map(|reg| Candidate::new(reg.id, reg.construct))
                    .ok_or_else(|| {
                        ConfigurationError::new(format!(
                            "no registered archive format matches declaration '{id}'"
                        ))
                    })
            })
            .collect()
    }
}

/// An in-memory loading context serving a fixed, ordered candidate list.
pub struct StaticContext<T: ?Sized> {
    candidates: Vec<Candidate<T>>,
}

impl<T: ?Sized> StaticContext<T> {
    /// Build a context over the given candidates, preserving their order.
    pub fn new(candidates: impl IntoIterator<Item = Candidate<T>>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }
}

impl<T: ?Sized> CandidateProvider<T> for StaticContext<T> {
    fn candidates(&self) -> Result<Vec<Candidate<T>>, ConfigurationError> {
        Ok(self.candidates.clone())
    }
}
