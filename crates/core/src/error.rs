//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The storefront core is total over well-formed input; these variants only
/// describe input that was assembled outside the static catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested catalog entry was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::invalid_id("SessionId: bad length").to_string(),
            "invalid identifier: SessionId: bad length"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
