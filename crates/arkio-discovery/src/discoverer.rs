// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic, eager format discovery engine.
//!
//! [`FormatDiscoverer`] enumerates every candidate implementation visible to a
//! loading context, instantiates and validates each one inside the fallible
//! factory [`FormatDiscoverer::discover`], and freezes the result. Any failure
//! during enumeration, instantiation, or name validation aborts the whole
//! registry; a mis-packaged plugin is a hard startup failure, never a silent
//! omission from a capability list.

use std::fmt;
use std::sync::Arc;

use arkio_core::{ConfigurationError, Format};

use crate::candidate::CandidateProvider;

/// A discovered `(name, instance)` pair.
///
/// The name is read from the instance once, immediately after construction,
/// and cached for lookup.
pub struct FormatEntry<T: ?Sized> {
    name: String,
    instance: Arc<T>,
}

impl<T: ?Sized> FormatEntry<T> {
    /// The name the instance reported at discovery time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The discovered instance.
    pub fn instance(&self) -> &Arc<T> {
        &self.instance
    }
}

impl<T: ?Sized> fmt::Debug for FormatEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatEntry").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Registry of all implementations of a capability interface `T` visible to a
/// loading context.
///
/// Discovery runs eagerly and completely inside [`discover`]; afterwards the
/// entry sequence is immutable, so any number of threads may query it
/// concurrently without coordination. Entries keep the order the loading
/// context enumerated them in.
///
/// [`discover`]: FormatDiscoverer::discover
pub struct FormatDiscoverer<T: ?Sized> {
    entries: Vec<FormatEntry<T>>,
}

impl<T: ?Sized + Format> FormatDiscoverer<T> {
    /// Discover every implementation visible to the given loading context.
    ///
    /// Instantiates each candidate exactly once, in enumeration order, and
    /// validates that it reports a non-empty name. The first failure aborts
    /// construction entirely; no partially populated registry is ever
    /// observable.
    pub fn discover(context: &dyn CandidateProvider<T>) -> Result<Self, ConfigurationError> {
        let candidates = context.candidates()?;
        let mut entries = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let instance = candidate.construct().map_err(|e| {
                ConfigurationError::with_source(
                    format!("failed to instantiate format candidate '{}'", candidate.id()),
                    e,
                )
            })?;
            let name = instance.name().to_string();
            if name.is_empty() {
                return Err(ConfigurationError::new(format!(
                    "format candidate '{}' reported an empty name",
                    candidate.id()
                )));
            }
            tracing::debug!(id = candidate.id(), name = %name, "discovered format");
            entries.push(FormatEntry { name, instance });
        }
        tracing::debug!(count = entries.len(), "format discovery complete");
        Ok(Self { entries })
    }
}

impl<T: ?Sized> FormatDiscoverer<T> {
    /// Borrow a restartable view of the instances matching `predicate`, in
    /// discovery order.
    ///
    /// The view evaluates the predicate lazily on each pass, so predicates
    /// must be pure and cheap.
    pub fn filter<P>(&self, predicate: P) -> Filtered<'_, T, P>
    where
        P: Fn(&T) -> bool,
    {
        Filtered {
            entries: &self.entries,
            predicate,
        }
    }

    /// Look up a format by its exact, case-sensitive name.
    ///
    /// When two discovered implementations share a name, the one discovered
    /// first wins; later duplicates stay reachable through [`filter`] and
    /// [`iter`].
    ///
    /// [`filter`]: FormatDiscoverer::filter
    /// [`iter`]: FormatDiscoverer::iter
    pub fn format_by_name(&self, name: &str) -> Option<&Arc<T>> {
        self.entries.iter().find(|entry| entry.name == name).map(FormatEntry::instance)
    }

    /// Iterate over all entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatEntry<T>> {
        self.entries.iter()
    }

    /// Returns the number of discovered formats.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the loading context enumerated no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for FormatDiscoverer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatDiscoverer").field("entries", &self.entries).finish()
    }
}

/// A restartable, side-effect-free view over the formats matching a predicate.
///
/// Borrowing iteration: each call to [`iter`](Filtered::iter) (or each
/// `for .. in &view` loop) starts over from the first entry.
pub struct Filtered<'a, T: ?Sized, P> {
    entries: &'a [FormatEntry<T>],
    predicate: P,
}

impl<'a, T: ?Sized, P> Filtered<'a, T, P>
where
    P: Fn(&T) -> bool,
{
    /// Iterate over the matching instances, in discovery order.
    pub fn iter(&self) -> FilteredIter<'_, 'a, T, P> {
        FilteredIter {
            entries: self.entries.iter(),
            predicate: &self.predicate,
        }
    }
}

impl<'s, 'a, T: ?Sized, P> IntoIterator for &'s Filtered<'a, T, P>
where
    P: Fn(&T) -> bool,
{
    type Item = &'a Arc<T>;
    type IntoIter = FilteredIter<'s, 'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Filtered`] view.
pub struct FilteredIter<'s, 'a, T: ?Sized, P> {
    entries: std::slice::Iter<'a, FormatEntry<T>>,
    predicate: &'s P,
}

impl<'s, 'a, T: ?Sized, P> Iterator for FilteredIter<'s, 'a, T, P>
where
    P: Fn(&T) -> bool,
{
    type Item = &'a Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.entries.by_ref() {
            if (self.predicate)(entry.instance.as_ref()) {
                return Some(&entry.instance);
            }
        }
        None
    }
}
