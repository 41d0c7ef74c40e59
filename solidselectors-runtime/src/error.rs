//! Typed error handling for strict selector factories.

use thiserror::Error;

/// Errors raised by [`crate::LiveSelector::strict`].
///
/// Strict mode exists to catch selector collisions at the call site
/// instead of letting two elements share a selector silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A key was missing or empty.
    #[error("strict selector requires a non-empty key")]
    MissingKey,

    /// The key was already used through this factory.
    #[error("strict selector key `{key}` was already used")]
    KeyReused { key: String },
}

impl SelectorError {
    /// Create a key-reuse error.
    pub fn key_reused(key: impl Into<String>) -> Self {
        Self::KeyReused { key: key.into() }
    }

    /// Get the offending key, if the error carries one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KeyReused { key } => Some(key),
            Self::MissingKey => None,
        }
    }
}

/// Convenience type alias for selector results.
pub type SelectorResult<T> = Result<T, SelectorError>;
