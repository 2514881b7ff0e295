//! FCT mint accounting.
//!
//! The two cost formulas are distinct on purpose and must stay that way:
//! historical L2 blocks charged direct submissions per zero/non-zero envelope
//! byte and contract-event submissions a flat per-byte rate on the log data.

use alloy_primitives::U256;

/// Gas charged per zero byte of a direct envelope.
const ZERO_BYTE_COST: u64 = 4;
/// Gas charged per non-zero byte of a direct envelope.
const NON_ZERO_BYTE_COST: u64 = 16;
/// Flat per-byte cost applied to contract-event log data, tag included.
const EVENT_BYTE_COST: u64 = 8;

/// Computes FCT mint amounts from envelope bytes and a historical mint rate.
#[derive(Debug, Clone, Copy)]
pub struct FctMintCalculator;

impl FctMintCalculator {
    /// Intrinsic-style input cost of the tagged direct envelope.
    pub fn input_gas_cost(bytes: &[u8]) -> u64 {
        bytes
            .iter()
            .map(|byte| if *byte == 0 { ZERO_BYTE_COST } else { NON_ZERO_BYTE_COST })
            .sum()
    }

    /// Flat input cost of a contract-event payload of `byte_len` bytes.
    pub const fn event_data_cost(byte_len: usize) -> u64 {
        byte_len as u64 * EVENT_BYTE_COST
    }

    /// Converts an input cost into the minted FCT amount at `rate`.
    pub fn mint_amount(input_cost: u64, rate: u128) -> U256 {
        U256::from(input_cost) * U256::from(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;
    use rstest::rstest;

    #[rstest]
    #[case(&[], 0)]
    #[case(&[0x00], 4)]
    #[case(&[0x46], 16)]
    #[case(&[0x00, 0x00, 0x01, 0xff], 40)]
    fn charges_four_per_zero_sixteen_per_nonzero(#[case] bytes: &[u8], #[case] expected: u64) {
        assert_eq!(FctMintCalculator::input_gas_cost(bytes), expected);
    }

    #[test]
    fn known_envelope_input_cost() {
        let envelope =
            hex!("46e283face7a94111111111111111111111111111111111111111180830f424082123480");
        assert_eq!(FctMintCalculator::input_gas_cost(&envelope), 576);
    }

    #[test]
    fn event_cost_is_eight_per_byte() {
        assert_eq!(FctMintCalculator::event_data_cost(0), 0);
        assert_eq!(FctMintCalculator::event_data_cost(16), 128);
    }

    #[test]
    fn mint_amount_scales_by_rate() {
        assert_eq!(FctMintCalculator::mint_amount(632, 10_000), U256::from(6_320_000u64));
        assert_eq!(FctMintCalculator::mint_amount(0, u128::MAX), U256::ZERO);
        // No overflow at the extremes of both operands.
        assert_eq!(
            FctMintCalculator::mint_amount(u64::MAX, u128::MAX),
            U256::from(u64::MAX) * U256::from(u128::MAX)
        );
    }
}
