//! Derivation error taxonomy.

use facet_protocol::EnvelopeError;
use thiserror::Error;

/// Errors surfaced by read-only chain-data providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The requested entity does not exist upstream.
    #[error("{0} not found")]
    NotFound(String),
    /// Transport or node failure.
    #[error("{0}")]
    Upstream(String),
}

/// Failures while deriving a Facet transaction from an L1 submission.
///
/// There is no local recovery anywhere in the pipeline: the derivation is
/// read-only and idempotent, so every failure aborts the request and the
/// caller retries if it wants to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// Bad or missing request input.
    #[error("{0}")]
    Validation(String),
    /// The source transaction or a required upstream entity is absent.
    #[error("{0} not found")]
    NotFound(String),
    /// The submission violates the envelope protocol.
    #[error(transparent)]
    Protocol(#[from] EnvelopeError),
    /// A chain-data provider failed; the message passes through verbatim.
    #[error("{0}")]
    Upstream(String),
}

impl From<ProviderError> for DeriveError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound(what) => Self::NotFound(what),
            ProviderError::Upstream(message) => Self::Upstream(message),
        }
    }
}
