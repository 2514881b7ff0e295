//! Envelope decoding errors.

use thiserror::Error;

/// Errors produced while decoding a Facet envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    /// The inbox calldata does not carry the expected tag + RLP layout.
    #[error("malformed Facet envelope: {0}")]
    MalformedEnvelope(String),
    /// The log payload is not an RLP list of at least six byte strings.
    #[error("invalid RLP payload: {0}")]
    InvalidRlpPayload(String),
    /// No log in the receipt matched the Facet topic sentinel.
    #[error("No Facet event found")]
    NoFacetEvent,
    /// The envelope's embedded chain id does not match the target network.
    #[error("envelope chain id {got} does not match network chain id {expected}")]
    ChainIdMismatch {
        /// Chain id decoded from the envelope.
        got: u64,
        /// Chain id of the network being derived for.
        expected: u64,
    },
}
