//! Facet transaction hash derivation service.

use std::{collections::HashMap, net::SocketAddr};

use anyhow::bail;
use clap::Parser;
use facet_derive::{FacetDeriver, NETWORKS};
use facet_providers_alloy::{OnlineL1Provider, OnlineL2Provider};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod server;

use cli::Cli;
use server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_filter)?)
        .init();

    let mut pipelines = HashMap::new();
    for network in NETWORKS {
        match cli.rpc_pair(network.name) {
            (Some(l1_rpc), Some(l2_rpc)) => {
                info!(
                    target: "facet_deriver",
                    network = network.name,
                    l1_chain_id = network.l1_chain_id,
                    "serving network"
                );
                pipelines.insert(
                    network.l1_chain_id,
                    FacetDeriver::new(
                        network,
                        OnlineL1Provider::new_http(l1_rpc),
                        OnlineL2Provider::new_http(l2_rpc),
                    ),
                );
            }
            (None, None) => {}
            _ => bail!(
                "network {} needs both --{}-l1-rpc and --{}-l2-rpc",
                network.name,
                network.name,
                network.name
            ),
        }
    }
    if pipelines.is_empty() {
        bail!("no networks configured; pass at least one L1/L2 RPC endpoint pair");
    }

    let addr = SocketAddr::from((cli.address, cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(target: "facet_deriver", address = %listener.local_addr()?, "starting server");
    axum::serve(listener, router(AppState::new(pipelines))).await?;

    Ok(())
}
