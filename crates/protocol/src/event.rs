//! Contract-event envelope codec.

use alloy_primitives::{Address, Bytes, Log, U256};
use alloy_rlp::Decodable;

use crate::{EnvelopeError, FACET_LOG_INBOX_EVENT_SIG, FacetTransaction};

/// Positions of the canonical fields within the event payload list.
const TO_INDEX: usize = 1;
const VALUE_INDEX: usize = 2;
const GAS_LIMIT_INDEX: usize = 3;
const DATA_INDEX: usize = 4;
const MIN_ELEMENTS: usize = 6;

/// Returns the first log whose topic list is exactly the Facet sentinel.
///
/// Logs with the sentinel among several topics do not qualify; the protocol
/// requires a single-topic log.
pub fn find_facet_log(logs: &[Log]) -> Result<&Log, EnvelopeError> {
    logs.iter()
        .find(|log| matches!(log.data.topics(), [topic] if *topic == FACET_LOG_INBOX_EVENT_SIG))
        .ok_or(EnvelopeError::NoFacetEvent)
}

/// Decodes a Facet log payload into canonical fields.
///
/// The payload is one tag byte (expected `0x46`, not validated) followed by
/// an RLP list of at least six byte strings `[_, to, value, gasLimit, data,
/// _, ..]`. Extra elements are ignored.
pub fn decode_event_envelope(payload: &[u8]) -> Result<FacetTransaction, EnvelopeError> {
    if payload.is_empty() {
        return Err(EnvelopeError::InvalidRlpPayload("empty log data".to_string()));
    }

    let mut body = &payload[1..];
    let elements = Vec::<Bytes>::decode(&mut body)
        .map_err(|err| EnvelopeError::InvalidRlpPayload(err.to_string()))?;
    if elements.len() < MIN_ELEMENTS {
        return Err(EnvelopeError::InvalidRlpPayload(format!(
            "expected at least {MIN_ELEMENTS} elements, got {}",
            elements.len()
        )));
    }

    Ok(FacetTransaction {
        to: decode_to(&elements[TO_INDEX])?,
        value: decode_uint(&elements[VALUE_INDEX], "value")?,
        gas_limit: decode_uint(&elements[GAS_LIMIT_INDEX], "gas limit")?
            .try_into()
            .map_err(|_| EnvelopeError::InvalidRlpPayload("gas limit overflows u64".to_string()))?,
        data: elements[DATA_INDEX].clone(),
        mine_boost: None,
        fct_mint_amount: U256::ZERO,
    })
}

/// A `to` element of at most one byte is treated as absent, never as the
/// zero address.
fn decode_to(raw: &[u8]) -> Result<Option<Address>, EnvelopeError> {
    match raw.len() {
        0 | 1 => Ok(None),
        20 => Ok(Some(Address::from_slice(raw))),
        len => Err(EnvelopeError::InvalidRlpPayload(format!(
            "`to` element must be 20 bytes, got {len}"
        ))),
    }
}

/// Empty maps to zero; anything else is an unsigned big-endian integer.
fn decode_uint(raw: &[u8], field: &str) -> Result<U256, EnvelopeError> {
    if raw.len() > 32 {
        return Err(EnvelopeError::InvalidRlpPayload(format!(
            "`{field}` element exceeds 32 bytes"
        )));
    }
    Ok(U256::from_be_slice(raw))
}
