//! Chain-data provider capability traits.

use alloy_primitives::{Address, B256, Bytes, Log};
use async_trait::async_trait;

use crate::ProviderError;

/// The slice of an L1 transaction the derivation consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTransaction {
    /// Transaction hash.
    pub hash: B256,
    /// Sender recovered by the node.
    pub from: Address,
    /// Recipient; `None` for contract creation.
    pub to: Option<Address>,
    /// Raw input bytes.
    pub input: Bytes,
    /// Hash of the containing block.
    pub block_hash: B256,
}

/// Block metadata consumed by the mint-rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInfo {
    /// Block height.
    pub number: u64,
    /// Block timestamp in seconds.
    pub timestamp: u64,
}

/// Read-only access to the L1 chain.
#[async_trait]
pub trait L1ChainProvider: Send + Sync {
    /// Fetches a transaction by hash.
    async fn transaction_by_hash(&self, hash: B256) -> Result<SourceTransaction, ProviderError>;

    /// Fetches the logs of the receipt for `hash`, in emission order.
    async fn receipt_logs_by_hash(&self, hash: B256) -> Result<Vec<Log>, ProviderError>;

    /// Fetches height and timestamp of the block with `hash`.
    async fn block_info_by_hash(&self, hash: B256) -> Result<BlockInfo, ProviderError>;
}

/// Read-only access to the Facet L2 chain.
#[async_trait]
pub trait L2ChainProvider: Send + Sync {
    /// Fetches the current head block.
    async fn tip_block_info(&self) -> Result<BlockInfo, ProviderError>;

    /// Reads `fctMintRate()` from the L1Block predeploy at `block_number`.
    async fn fct_mint_rate_at(&self, block_number: u64) -> Result<u128, ProviderError>;
}
