//! Canonical Facet transaction fields.

use alloy_primitives::{Address, Bytes, U256};

/// The canonical field set deterministically derived from an L1 submission.
///
/// Every field except `fct_mint_amount` is fixed by the envelope bytes; the
/// mint amount is filled in once the historical mint rate is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetTransaction {
    /// Target address. `None` iff the envelope encodes an empty byte string,
    /// i.e. contract creation.
    pub to: Option<Address>,
    /// Native value transferred on L2. Empty source field decodes to zero.
    pub value: U256,
    /// Gas limit for L2 execution. Empty source field decodes to zero.
    pub gas_limit: u64,
    /// L2 calldata, carried verbatim.
    pub data: Bytes,
    /// Extra bytes that count toward the mint without reaching execution.
    /// Only present on the direct path.
    pub mine_boost: Option<Bytes>,
    /// FCT minted for this submission. Zero until the mint rate is resolved.
    pub fct_mint_amount: U256,
}
