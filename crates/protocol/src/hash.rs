//! Canonical Facet transaction hash derivation.

use alloy_primitives::{Address, B256, Bytes, keccak256};
use alloy_rlp::{Encodable, Header};

use crate::{FACET_TX_TYPE, FacetTransaction};

/// Computes the canonical L2 transaction hash for a derived submission.
///
/// The preimage is `0x46 || RLP([l1_tx_hash, from, to-or-empty, value, data,
/// gas_limit, fct_mint_amount])`: integers in canonical RLP, an empty byte
/// string standing in for an absent `to`. This layout is the
/// compatibility-critical contract of the whole derivation — an L2 node
/// computes the same bytes independently, so it is pinned by golden vectors
/// and never rebuilt ad hoc at call sites. `mine_boost` is not part of the
/// preimage.
pub fn facet_transaction_hash(l1_tx_hash: B256, from: Address, tx: &FacetTransaction) -> B256 {
    let to = tx.to.map(|addr| Bytes::copy_from_slice(addr.as_slice())).unwrap_or_default();
    let fields: [&dyn Encodable; 7] = [
        &l1_tx_hash,
        &from,
        &to,
        &tx.value,
        &tx.data,
        &tx.gas_limit,
        &tx.fct_mint_amount,
    ];

    let payload_length = fields.iter().map(|field| field.length()).sum();
    let mut out = Vec::with_capacity(payload_length + 4);
    out.push(FACET_TX_TYPE);
    Header { list: true, payload_length }.encode(&mut out);
    for field in fields {
        field.encode(&mut out);
    }
    keccak256(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{U256, address, b256, bytes};

    fn creation_tx() -> FacetTransaction {
        FacetTransaction {
            to: None,
            value: U256::ZERO,
            gas_limit: 0,
            data: Bytes::new(),
            mine_boost: None,
            fct_mint_amount: U256::ZERO,
        }
    }

    #[test]
    fn minimal_fields_golden_vector() {
        let hash = facet_transaction_hash(B256::ZERO, Address::ZERO, &creation_tx());
        assert_eq!(
            hash,
            b256!("0xed8985b06d7def5eb27049327c4748d428eaae6324715c3bdf571c4e869204db")
        );
    }

    #[test]
    fn direct_submission_golden_vector() {
        let tx = FacetTransaction {
            to: Some(address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa")),
            value: U256::from(10u64).pow(U256::from(18u64)),
            gas_limit: 21_000,
            data: Bytes::new(),
            mine_boost: None,
            fct_mint_amount: U256::from(6_320_000u64),
        };
        let hash = facet_transaction_hash(
            b256!("0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef"),
            address!("0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef"),
            &tx,
        );
        assert_eq!(
            hash,
            b256!("0x8263a23db065a64ad391e08b7010566cfaa20501955d62262964c29a78585c76")
        );
    }

    #[test]
    fn absent_to_hashes_differently_from_zero_address() {
        let creation = creation_tx();
        let zero_to = FacetTransaction { to: Some(Address::ZERO), ..creation.clone() };
        let l1_hash = B256::ZERO;
        assert_ne!(
            facet_transaction_hash(l1_hash, Address::ZERO, &creation),
            facet_transaction_hash(l1_hash, Address::ZERO, &zero_to),
        );
    }

    #[test]
    fn every_field_is_load_bearing() {
        let base = creation_tx();
        let l1_hash = b256!("0x00000000000000000000000000000000000000000000000000000000000000aa");
        let from = address!("0x00000000000000000000000000000000000000bb");
        let reference = facet_transaction_hash(l1_hash, from, &base);

        let variants = [
            FacetTransaction { value: U256::from(1u64), ..base.clone() },
            FacetTransaction { gas_limit: 1, ..base.clone() },
            FacetTransaction { data: bytes!("0x00"), ..base.clone() },
            FacetTransaction { fct_mint_amount: U256::from(1u64), ..base.clone() },
        ];
        for variant in &variants {
            assert_ne!(facet_transaction_hash(l1_hash, from, variant), reference);
        }
        assert_ne!(facet_transaction_hash(B256::ZERO, from, &base), reference);
        assert_ne!(facet_transaction_hash(l1_hash, Address::ZERO, &base), reference);
    }

    #[test]
    fn mine_boost_is_not_part_of_the_preimage() {
        let base = creation_tx();
        let boosted = FacetTransaction { mine_boost: Some(bytes!("0xffff")), ..base.clone() };
        assert_eq!(
            facet_transaction_hash(B256::ZERO, Address::ZERO, &base),
            facet_transaction_hash(B256::ZERO, Address::ZERO, &boosted),
        );
    }
}
