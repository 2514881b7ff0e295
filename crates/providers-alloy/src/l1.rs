//! Alloy-backed L1 provider.

use alloy_consensus::Transaction;
use alloy_primitives::{B256, Log};
use alloy_provider::{Provider, RootProvider};
use async_trait::async_trait;
use facet_derive::{BlockInfo, L1ChainProvider, ProviderError, SourceTransaction};
use url::Url;

/// An [`L1ChainProvider`] over an alloy HTTP provider.
#[derive(Debug, Clone)]
pub struct OnlineL1Provider {
    inner: RootProvider,
}

impl OnlineL1Provider {
    /// Creates a provider for the given HTTP endpoint.
    pub fn new_http(url: Url) -> Self {
        Self { inner: RootProvider::new_http(url) }
    }
}

#[async_trait]
impl L1ChainProvider for OnlineL1Provider {
    async fn transaction_by_hash(&self, hash: B256) -> Result<SourceTransaction, ProviderError> {
        let tx = self
            .inner
            .get_transaction_by_hash(hash)
            .await
            .map_err(|err| ProviderError::Upstream(err.to_string()))?
            .ok_or_else(|| ProviderError::NotFound("transaction".to_string()))?;
        // A pending transaction has no containing block and cannot be
        // derived against a historical rate.
        let block_hash = tx
            .block_hash
            .ok_or_else(|| ProviderError::NotFound("containing block".to_string()))?;

        Ok(SourceTransaction {
            hash,
            from: tx.inner.signer(),
            to: tx.inner.to(),
            input: tx.inner.input().clone(),
            block_hash,
        })
    }

    async fn receipt_logs_by_hash(&self, hash: B256) -> Result<Vec<Log>, ProviderError> {
        let receipt = self
            .inner
            .get_transaction_receipt(hash)
            .await
            .map_err(|err| ProviderError::Upstream(err.to_string()))?
            .ok_or_else(|| ProviderError::NotFound("transaction receipt".to_string()))?;

        Ok(receipt.inner.logs().iter().map(|log| log.inner.clone()).collect())
    }

    async fn block_info_by_hash(&self, hash: B256) -> Result<BlockInfo, ProviderError> {
        let block = self
            .inner
            .get_block_by_hash(hash)
            .await
            .map_err(|err| ProviderError::Upstream(err.to_string()))?
            .ok_or_else(|| ProviderError::NotFound("block".to_string()))?;

        Ok(BlockInfo { number: block.header.number, timestamp: block.header.timestamp })
    }
}
