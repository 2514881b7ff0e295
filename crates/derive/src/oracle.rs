//! Historical mint-rate block resolution.

use facet_protocol::L2_BLOCK_TIME;

use crate::BlockInfo;

/// Resolves the L2 height whose mint rate applies to an L1 submission with
/// timestamp `l1_timestamp`, given the current L2 tip.
///
/// Walks back `elapsed / 12` blocks from the tip, assuming constant block
/// spacing since the source transaction. Real spacing drifts, so the
/// selection can be off by a few blocks; the historical chain computed with
/// the same heuristic, so this is kept rather than corrected.
pub fn target_l2_block(l1_timestamp: u64, l2_tip: BlockInfo) -> u64 {
    let elapsed = l2_tip.timestamp.saturating_sub(l1_timestamp);
    l2_tip.number.saturating_sub(elapsed / L2_BLOCK_TIME)
}
