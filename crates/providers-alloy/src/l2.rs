//! Alloy-backed Facet L2 provider.

use alloy_eips::{BlockId, BlockNumberOrTag};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types_eth::{TransactionInput, TransactionRequest};
use alloy_sol_types::{SolCall, sol};
use async_trait::async_trait;
use facet_derive::{BlockInfo, L2ChainProvider, ProviderError};
use facet_protocol::L1_BLOCK_CONTRACT;
use url::Url;

sol! {
    /// Mint-rate view on the L1Block predeploy.
    function fctMintRate() external view returns (uint128);
}

/// An [`L2ChainProvider`] over an alloy HTTP provider.
#[derive(Debug, Clone)]
pub struct OnlineL2Provider {
    inner: RootProvider,
}

impl OnlineL2Provider {
    /// Creates a provider for the given HTTP endpoint.
    pub fn new_http(url: Url) -> Self {
        Self { inner: RootProvider::new_http(url) }
    }
}

#[async_trait]
impl L2ChainProvider for OnlineL2Provider {
    async fn tip_block_info(&self) -> Result<BlockInfo, ProviderError> {
        let block = self
            .inner
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await
            .map_err(|err| ProviderError::Upstream(err.to_string()))?
            .ok_or_else(|| ProviderError::Upstream("no head block".to_string()))?;

        Ok(BlockInfo { number: block.header.number, timestamp: block.header.timestamp })
    }

    async fn fct_mint_rate_at(&self, block_number: u64) -> Result<u128, ProviderError> {
        let request = TransactionRequest::default()
            .to(L1_BLOCK_CONTRACT)
            .input(TransactionInput::new(fctMintRateCall {}.abi_encode().into()));

        let returned = self
            .inner
            .call(request)
            .block(BlockId::number(block_number))
            .await
            .map_err(|err| ProviderError::Upstream(err.to_string()))?;

        fctMintRateCall::abi_decode_returns(&returned)
            .map_err(|err| ProviderError::Upstream(format!("bad fctMintRate return: {err}")))
    }
}
