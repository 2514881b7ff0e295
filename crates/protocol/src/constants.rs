//! Protocol constants.

use alloy_primitives::{Address, B256, address, b256};

/// Tag byte prefixing every Facet envelope, on the wire and in the canonical
/// hash preimage.
pub const FACET_TX_TYPE: u8 = 0x46;

/// The fixed L1 address signaling a direct Facet submission when used as a
/// transaction recipient.
pub const FACET_INBOX_ADDRESS: Address = address!("0x00000000000000000000000000000000000FacE7");

/// Topic sentinel for contract-emitted Facet submissions. A qualifying log
/// carries exactly one topic, equal to this value.
pub const FACET_LOG_INBOX_EVENT_SIG: B256 =
    b256!("0x00000000000000000000000000000000000000000000000000000000000face7");

/// The L2 predeploy exposing `fctMintRate()` for historical state reads.
pub const L1_BLOCK_CONTRACT: Address = address!("0x4200000000000000000000000000000000000015");

/// Fixed L2 block period in seconds. Configured, not measured.
pub const L2_BLOCK_TIME: u64 = 12;
