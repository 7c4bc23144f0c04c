// SPDX-FileCopyrightText: 2026 Arkio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Arkio archive toolkit.

use thiserror::Error;

/// The single fatal error class raised when format discovery cannot produce a
/// fully valid registry.
///
/// Raised during construction only: when candidate enumeration fails, when a
/// candidate's zero-argument construction path fails, or when a constructed
/// instance reports an invalid (empty) name. A registry that constructed
/// successfully can never surface this error from its query operations; a
/// lookup miss is an ordinary `None`.
#[derive(Debug, Error)]
#[error("configuration error: {message}")]
pub struct ConfigurationError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConfigurationError {
    /// Create a configuration error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error wrapping an underlying cause.
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// The human-readable description of what failed.
    pub fn message(&self) -> &str {
        &self.message
    }
}
