//! L1 to L2 address aliasing.

use alloy_primitives::{Address, aliases::U160, uint};

/// The aliasing offset, `0x1111000000000000000000000000000000001111`.
const ALIAS_OFFSET: U160 = uint!(0x1111000000000000000000000000000000001111_U160);

/// Derives the L2 sender identity for an L1 contract address by adding the
/// aliasing offset modulo 2^160. Applied only to contract-event submissions;
/// direct-path senders are never aliased.
pub fn alias_l1_to_l2(address: Address) -> Address {
    let aliased = U160::from_be_bytes(address.into_array()).wrapping_add(ALIAS_OFFSET);
    Address::from(aliased.to_be_bytes::<20>())
}

/// Inverse of [`alias_l1_to_l2`].
pub fn unalias_l2_to_l1(address: Address) -> Address {
    let unaliased = U160::from_be_bytes(address.into_array()).wrapping_sub(ALIAS_OFFSET);
    Address::from(unaliased.to_be_bytes::<20>())
}
