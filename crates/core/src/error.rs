//! Error types for display name resolution
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::identifier::IdentifierError;
use crate::model::ClassId;
use crate::strategy::StrategyError;
use thiserror::Error;

/// Result type alias for display name operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for display name resolution
#[derive(Debug, Error)]
pub enum Error {
    /// Artifact identity fields do not match its kind
    #[error("Malformed artifact: {reason}")]
    MalformedArtifact {
        /// What is missing or inconsistent
        reason: String,
    },

    /// Identifier failed validation
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    /// Referenced class was never registered
    #[error("Unknown class: {0}")]
    UnknownClass(ClassId),

    /// Class registered twice
    #[error("Class already registered: {0}")]
    DuplicateClass(ClassId),

    /// Strategy name already taken in the catalog
    #[error("Naming strategy '{0}' already registered")]
    DuplicateStrategy(String),

    /// Configuration names a strategy that is not in the catalog
    #[error("Unknown naming strategy '{0}'")]
    UnknownStrategy(String),

    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// A naming strategy failed; passed through as raised
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}

impl Error {
    /// Build a `MalformedArtifact` error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedArtifact {
            reason: reason.into(),
        }
    }

    /// Build a `Config` error
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
