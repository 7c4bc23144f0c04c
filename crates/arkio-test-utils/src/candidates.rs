// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate and loading-context helpers for discovery tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arkio_core::{ArchiveFormat, ConfigurationError, Format};
use arkio_discovery::{Candidate, StaticContext};

use crate::mock_format::MockFormat;

/// An in-memory loading context over archive-format candidates.
pub type StaticArchiveContext = StaticContext<dyn ArchiveFormat>;

/// Wrap a mock format as a discoverable candidate.
///
/// The candidate id is derived from the format name (`mock::<name>`).
pub fn candidate_of(format: MockFormat) -> Candidate<dyn ArchiveFormat> {
    let id = format!("mock::{}", format.name());
    let format: Arc<dyn ArchiveFormat> = Arc::new(format);
    Candidate::new(id, move || Ok(Arc::clone(&format)))
}

/// A candidate whose construction path always fails with the given message.
pub fn failing_candidate(id: &str, message: &str) -> Candidate<dyn ArchiveFormat> {
    let message = message.to_string();
    Candidate::new(id, move || Err(ConfigurationError::new(message.clone())))
}

/// A candidate that counts how many times its construction path runs.
pub fn counting_candidate(
    name: &str,
    constructions: Arc<AtomicUsize>,
) -> Candidate<dyn ArchiveFormat> {
    let name = name.to_string();
    Candidate::new(format!("mock::{name}"), move || {
        constructions.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockFormat::named(name.clone())) as Arc<dyn ArchiveFormat>)
    })
}

/// Build a static loading context from mock formats, preserving their order.
pub fn static_context(formats: impl IntoIterator<Item = MockFormat>) -> StaticArchiveContext {
    StaticContext::new(formats.into_iter().map(candidate_of))
}
