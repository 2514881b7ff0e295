//! The derivation pipeline.

use alloy_primitives::{Address, B256};
use facet_protocol::{
    EnvelopeKind, FacetTransaction, FctMintCalculator, alias_l1_to_l2, classify,
    decode_direct_envelope, decode_event_envelope, encode_direct_envelope, facet_transaction_hash,
    find_facet_log,
};
use tracing::debug;

use crate::{
    DeriveError, NetworkConfig, SourceTransaction,
    oracle::target_l2_block,
    traits::{L1ChainProvider, L2ChainProvider},
};

/// Derives canonical Facet transactions for one network pair.
///
/// Each derivation is request-scoped: providers are read-only, nothing is
/// cached across calls, and a single upstream failure aborts the whole run.
#[derive(Debug, Clone)]
pub struct FacetDeriver<L1, L2> {
    network: NetworkConfig,
    l1: L1,
    l2: L2,
}

impl<L1: L1ChainProvider, L2: L2ChainProvider> FacetDeriver<L1, L2> {
    /// Creates a deriver over the given network and providers.
    pub const fn new(network: NetworkConfig, l1: L1, l2: L2) -> Self {
        Self { network, l1, l2 }
    }

    /// The network this deriver serves.
    pub const fn network(&self) -> NetworkConfig {
        self.network
    }

    /// Derives the canonical L2 transaction hash for the L1 transaction
    /// `tx_hash`.
    pub async fn derive_transaction_hash(&self, tx_hash: B256) -> Result<B256, DeriveError> {
        let source = self.l1.transaction_by_hash(tx_hash).await?;

        let (from, mut facet_tx, input_cost) = match classify(source.to) {
            EnvelopeKind::Direct => self.decode_direct(&source)?,
            EnvelopeKind::ContractEvent => self.decode_event(&source).await?,
        };

        let rate = self.mint_rate_at_source(source.block_hash).await?;
        facet_tx.fct_mint_amount = FctMintCalculator::mint_amount(input_cost, rate);

        Ok(facet_transaction_hash(source.hash, from, &facet_tx))
    }

    /// Direct path: the sender is the L1 sender, never aliased, and the mint
    /// cost is the intrinsic-style cost of the re-serialized envelope.
    fn decode_direct(
        &self,
        source: &SourceTransaction,
    ) -> Result<(Address, FacetTransaction, u64), DeriveError> {
        let facet_tx = decode_direct_envelope(&source.input, self.network.l2_chain_id)?;
        let envelope = encode_direct_envelope(&facet_tx, self.network.l2_chain_id);
        let input_cost = FctMintCalculator::input_gas_cost(&envelope);
        Ok((source.from, facet_tx, input_cost))
    }

    /// Event path: the sender is the aliased emitter of the first sentinel
    /// log, and the mint cost is flat over the full log data.
    async fn decode_event(
        &self,
        source: &SourceTransaction,
    ) -> Result<(Address, FacetTransaction, u64), DeriveError> {
        let logs = self.l1.receipt_logs_by_hash(source.hash).await?;
        let log = find_facet_log(&logs)?;
        let facet_tx = decode_event_envelope(&log.data.data)?;
        let input_cost = FctMintCalculator::event_data_cost(log.data.data.len());
        Ok((alias_l1_to_l2(log.address), facet_tx, input_cost))
    }

    /// Reads the mint rate in effect when the source transaction landed on
    /// L1. The containing-block and tip fetches are independent and run
    /// concurrently; the state read depends on both. No retry, no fallback
    /// to the tip rate.
    async fn mint_rate_at_source(&self, block_hash: B256) -> Result<u128, DeriveError> {
        let (l1_block, l2_tip) =
            tokio::try_join!(self.l1.block_info_by_hash(block_hash), self.l2.tip_block_info())?;
        let target = target_l2_block(l1_block.timestamp, l2_tip);
        debug!(target: "facet_derive", l2_block = target, "reading historical mint rate");
        Ok(self.l2.fct_mint_rate_at(target).await?)
    }
}
