//! Supported network pairs.

/// A Facet network, keyed by the L1 chain id requests select it with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Human-readable network name, also used for CLI flag naming.
    pub name: &'static str,
    /// The L1 chain id.
    pub l1_chain_id: u64,
    /// The Facet chain id embedded in direct envelopes.
    pub l2_chain_id: u64,
}

/// Every supported network. Adding one is a table entry, not a code branch.
pub const NETWORKS: [NetworkConfig; 2] = [
    NetworkConfig { name: "mainnet", l1_chain_id: 1, l2_chain_id: 0xface7a },
    NetworkConfig { name: "sepolia", l1_chain_id: 11_155_111, l2_chain_id: 0xface7b },
];

/// Looks up a network by its L1 chain id.
pub fn network_by_l1_chain_id(l1_chain_id: u64) -> Option<NetworkConfig> {
    NETWORKS.into_iter().find(|network| network.l1_chain_id == l1_chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, Some(0xface7a))]
    #[case(11_155_111, Some(0xface7b))]
    #[case(5, None)]
    #[case(0, None)]
    fn looks_up_by_l1_chain_id(#[case] l1: u64, #[case] expected_l2: Option<u64>) {
        assert_eq!(network_by_l1_chain_id(l1).map(|n| n.l2_chain_id), expected_l2);
    }
}
