//! Test doubles for the provider traits.

use std::collections::HashMap;

use alloy_primitives::{B256, Log};
use async_trait::async_trait;

use crate::{
    BlockInfo, ProviderError, SourceTransaction,
    traits::{L1ChainProvider, L2ChainProvider},
};

/// An in-memory [`L1ChainProvider`].
#[derive(Debug, Clone, Default)]
pub struct TestL1Provider {
    transactions: HashMap<B256, SourceTransaction>,
    logs: HashMap<B256, Vec<Log>>,
    blocks: HashMap<B256, BlockInfo>,
}

impl TestL1Provider {
    /// Registers a transaction, keyed by its own hash.
    pub fn insert_transaction(&mut self, tx: SourceTransaction) {
        self.transactions.insert(tx.hash, tx);
    }

    /// Registers receipt logs for a transaction hash.
    pub fn insert_logs(&mut self, tx_hash: B256, logs: Vec<Log>) {
        self.logs.insert(tx_hash, logs);
    }

    /// Registers block metadata for a block hash.
    pub fn insert_block(&mut self, hash: B256, info: BlockInfo) {
        self.blocks.insert(hash, info);
    }
}

#[async_trait]
impl L1ChainProvider for TestL1Provider {
    async fn transaction_by_hash(&self, hash: B256) -> Result<SourceTransaction, ProviderError> {
        self.transactions
            .get(&hash)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound("transaction".to_string()))
    }

    async fn receipt_logs_by_hash(&self, hash: B256) -> Result<Vec<Log>, ProviderError> {
        self.logs
            .get(&hash)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound("transaction receipt".to_string()))
    }

    async fn block_info_by_hash(&self, hash: B256) -> Result<BlockInfo, ProviderError> {
        self.blocks
            .get(&hash)
            .copied()
            .ok_or_else(|| ProviderError::NotFound("block".to_string()))
    }
}

/// An in-memory [`L2ChainProvider`] with per-height mint rates.
#[derive(Debug, Clone, Default)]
pub struct TestL2Provider {
    tip: Option<BlockInfo>,
    rates: HashMap<u64, u128>,
}

impl TestL2Provider {
    /// Sets the current head block.
    pub fn set_tip(&mut self, tip: BlockInfo) {
        self.tip = Some(tip);
    }

    /// Registers the mint rate readable at `block_number`.
    pub fn insert_rate(&mut self, block_number: u64, rate: u128) {
        self.rates.insert(block_number, rate);
    }
}

#[async_trait]
impl L2ChainProvider for TestL2Provider {
    async fn tip_block_info(&self) -> Result<BlockInfo, ProviderError> {
        self.tip.ok_or_else(|| ProviderError::Upstream("no head block".to_string()))
    }

    async fn fct_mint_rate_at(&self, block_number: u64) -> Result<u128, ProviderError> {
        self.rates.get(&block_number).copied().ok_or_else(|| {
            ProviderError::Upstream(format!("state read failed at block {block_number}"))
        })
    }
}
