//! Direct inbox envelope codec and the source-transaction classifier.

use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::{Decodable, Encodable, RlpDecodable, RlpEncodable};

use crate::{EnvelopeError, FACET_INBOX_ADDRESS, FACET_TX_TYPE, FacetTransaction};

/// Routing decision for an L1 source transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// Calldata sent straight to the inbox address.
    Direct,
    /// Anything else; the submission, if any, lives in a receipt log.
    ContractEvent,
}

/// Classifies a source transaction by its recipient. Only calls to the fixed
/// inbox address qualify as direct; contract creations and every other
/// destination route to the event path.
pub fn classify(recipient: Option<Address>) -> EnvelopeKind {
    if recipient == Some(FACET_INBOX_ADDRESS) {
        EnvelopeKind::Direct
    } else {
        EnvelopeKind::ContractEvent
    }
}

/// Wire layout of the inbox envelope body, following the tag byte.
#[derive(Debug, Clone, RlpEncodable, RlpDecodable)]
struct DirectEnvelopeRlp {
    chain_id: u64,
    to: Bytes,
    value: U256,
    gas_limit: u64,
    data: Bytes,
    mine_boost: Bytes,
}

/// Decodes direct inbox calldata into canonical fields.
///
/// The input must be exactly `0x46 || RLP([chainId, to, value, gasLimit,
/// data, mineBoost])` with no trailing bytes, and the embedded chain id must
/// match `l2_chain_id`.
pub fn decode_direct_envelope(
    input: &[u8],
    l2_chain_id: u64,
) -> Result<FacetTransaction, EnvelopeError> {
    let tag = *input
        .first()
        .ok_or_else(|| EnvelopeError::MalformedEnvelope("empty input".to_string()))?;
    if tag != FACET_TX_TYPE {
        return Err(EnvelopeError::MalformedEnvelope(format!(
            "expected tag byte {FACET_TX_TYPE:#04x}, got {tag:#04x}"
        )));
    }

    let mut body = &input[1..];
    let envelope = DirectEnvelopeRlp::decode(&mut body)
        .map_err(|err| EnvelopeError::MalformedEnvelope(err.to_string()))?;
    if !body.is_empty() {
        return Err(EnvelopeError::MalformedEnvelope(format!(
            "{} trailing bytes after envelope",
            body.len()
        )));
    }
    if envelope.chain_id != l2_chain_id {
        return Err(EnvelopeError::ChainIdMismatch { got: envelope.chain_id, expected: l2_chain_id });
    }

    // Absent iff empty; anything between 0 and 20 bytes is an encoding error.
    let to = match envelope.to.len() {
        0 => None,
        20 => Some(Address::from_slice(&envelope.to)),
        len => {
            return Err(EnvelopeError::MalformedEnvelope(format!(
                "`to` field must be empty or 20 bytes, got {len}"
            )));
        }
    };

    Ok(FacetTransaction {
        to,
        value: envelope.value,
        gas_limit: envelope.gas_limit,
        data: envelope.data,
        mine_boost: (!envelope.mine_boost.is_empty()).then_some(envelope.mine_boost),
        fct_mint_amount: U256::ZERO,
    })
}

/// Re-serializes canonical fields into the tagged envelope bytes.
///
/// For any input accepted by [`decode_direct_envelope`], re-encoding the
/// decoded fields reproduces the input byte-for-byte; the result feeds the
/// direct-path mint cost.
pub fn encode_direct_envelope(tx: &FacetTransaction, l2_chain_id: u64) -> Bytes {
    let envelope = DirectEnvelopeRlp {
        chain_id: l2_chain_id,
        to: tx.to.map(|addr| Bytes::copy_from_slice(addr.as_slice())).unwrap_or_default(),
        value: tx.value,
        gas_limit: tx.gas_limit,
        data: tx.data.clone(),
        mine_boost: tx.mine_boost.clone().unwrap_or_default(),
    };
    let mut out = Vec::with_capacity(envelope.length() + 1);
    out.push(FACET_TX_TYPE);
    envelope.encode(&mut out);
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, bytes, hex};

    const FACET_MAINNET_CHAIN_ID: u64 = 0xface7a;

    #[test]
    fn classifies_inbox_calls_only() {
        assert_eq!(classify(Some(FACET_INBOX_ADDRESS)), EnvelopeKind::Direct);
        assert_eq!(
            classify(Some(address!("0xdb8dc4ac38c094746529a14be18d99c18ecaedac"))),
            EnvelopeKind::ContractEvent
        );
        assert_eq!(classify(None), EnvelopeKind::ContractEvent);
    }

    #[test]
    fn decodes_known_envelope() {
        let input =
            hex!("46e283face7a94111111111111111111111111111111111111111180830f424082123480");
        let tx = decode_direct_envelope(&input, FACET_MAINNET_CHAIN_ID).unwrap();
        assert_eq!(tx.to, Some(address!("0x1111111111111111111111111111111111111111")));
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas_limit, 1_000_000);
        assert_eq!(tx.data, bytes!("0x1234"));
        assert_eq!(tx.mine_boost, None);
        assert_eq!(tx.fct_mint_amount, U256::ZERO);
    }

    #[test]
    fn reencode_is_byte_identical() {
        let input =
            hex!("46e283face7a94111111111111111111111111111111111111111180830f424082123480");
        let tx = decode_direct_envelope(&input, FACET_MAINNET_CHAIN_ID).unwrap();
        assert_eq!(encode_direct_envelope(&tx, FACET_MAINNET_CHAIN_ID).as_ref(), &input[..]);
    }

    #[test]
    fn reencode_round_trips_creation_envelope() {
        let tx = FacetTransaction {
            to: None,
            value: U256::from(7u64),
            gas_limit: 21_000,
            data: bytes!("0x60016000"),
            mine_boost: Some(bytes!("0xffff")),
            fct_mint_amount: U256::ZERO,
        };
        let encoded = encode_direct_envelope(&tx, FACET_MAINNET_CHAIN_ID);
        let decoded = decode_direct_envelope(&encoded, FACET_MAINNET_CHAIN_ID).unwrap();
        assert_eq!(decoded, tx);
        assert_eq!(encode_direct_envelope(&decoded, FACET_MAINNET_CHAIN_ID), encoded);
    }

    #[test]
    fn empty_to_means_creation_not_zero_address() {
        let tx = FacetTransaction {
            to: None,
            value: U256::ZERO,
            gas_limit: 0,
            data: Bytes::new(),
            mine_boost: None,
            fct_mint_amount: U256::ZERO,
        };
        let encoded = encode_direct_envelope(&tx, FACET_MAINNET_CHAIN_ID);
        let decoded = decode_direct_envelope(&encoded, FACET_MAINNET_CHAIN_ID).unwrap();
        assert_eq!(decoded.to, None);
    }

    #[test]
    fn rejects_wrong_tag() {
        let input = hex!("47e283face7a94111111111111111111111111111111111111111180830f424082123480");
        assert!(matches!(
            decode_direct_envelope(&input, FACET_MAINNET_CHAIN_ID),
            Err(EnvelopeError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            decode_direct_envelope(&[], FACET_MAINNET_CHAIN_ID),
            Err(EnvelopeError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn rejects_chain_id_mismatch() {
        let input =
            hex!("46e283face7a94111111111111111111111111111111111111111180830f424082123480");
        assert_eq!(
            decode_direct_envelope(&input, 0xface7b),
            Err(EnvelopeError::ChainIdMismatch { got: 0xface7a, expected: 0xface7b })
        );
    }

    #[test]
    fn rejects_trailing_bytes() {
        let mut input =
            hex!("46e283face7a94111111111111111111111111111111111111111180830f424082123480")
                .to_vec();
        input.push(0x00);
        assert!(matches!(
            decode_direct_envelope(&input, FACET_MAINNET_CHAIN_ID),
            Err(EnvelopeError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn rejects_bad_to_length() {
        let mut raw = vec![FACET_TX_TYPE];
        let body = DirectEnvelopeRlp {
            chain_id: FACET_MAINNET_CHAIN_ID,
            to: bytes!("0xbeef"),
            value: U256::ZERO,
            gas_limit: 0,
            data: Bytes::new(),
            mine_boost: Bytes::new(),
        };
        body.encode(&mut raw);
        assert!(matches!(
            decode_direct_envelope(&raw, FACET_MAINNET_CHAIN_ID),
            Err(EnvelopeError::MalformedEnvelope(_))
        ));
    }
}
