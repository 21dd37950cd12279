//! Domain error model.

use thiserror::Error;

/// Result type used across the storefront domain crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised at boundaries only: ingesting a product record, adjusting stock,
/// parsing identifiers. The availability resolver never produces one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed JSON, empty name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A catalog invariant was violated (duplicate color, negative stock).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced color or size entry does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}
