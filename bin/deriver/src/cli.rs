//! Command-line interface for the deriver service.

use std::net::IpAddr;

use clap::Parser;
use url::Url;

/// Derives canonical Facet transaction hashes from L1 transactions.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "FACET_DERIVER_ADDRESS", default_value = "0.0.0.0")]
    pub(crate) address: IpAddr,

    /// Port to bind the HTTP server to.
    #[arg(long, env = "FACET_DERIVER_PORT", default_value = "8080")]
    pub(crate) port: u16,

    /// Ethereum mainnet execution RPC endpoint.
    #[arg(long, env = "FACET_DERIVER_MAINNET_L1_RPC")]
    pub(crate) mainnet_l1_rpc: Option<Url>,

    /// Facet mainnet RPC endpoint.
    #[arg(long, env = "FACET_DERIVER_MAINNET_L2_RPC")]
    pub(crate) mainnet_l2_rpc: Option<Url>,

    /// Sepolia execution RPC endpoint.
    #[arg(long, env = "FACET_DERIVER_SEPOLIA_L1_RPC")]
    pub(crate) sepolia_l1_rpc: Option<Url>,

    /// Facet Sepolia RPC endpoint.
    #[arg(long, env = "FACET_DERIVER_SEPOLIA_L2_RPC")]
    pub(crate) sepolia_l2_rpc: Option<Url>,

    /// Log filter directives, e.g. `info,facet_derive=debug`.
    #[arg(long, env = "FACET_DERIVER_LOG", default_value = "info")]
    pub(crate) log_filter: String,
}

impl Cli {
    /// The configured RPC endpoint pair for a network, by name.
    pub(crate) fn rpc_pair(&self, network: &str) -> (Option<Url>, Option<Url>) {
        match network {
            "mainnet" => (self.mainnet_l1_rpc.clone(), self.mainnet_l2_rpc.clone()),
            "sepolia" => (self.sepolia_l1_rpc.clone(), self.sepolia_l2_rpc.clone()),
            _ => (None, None),
        }
    }
}
