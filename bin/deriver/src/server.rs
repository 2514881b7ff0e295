//! HTTP surface of the deriver.

use std::{collections::HashMap, sync::Arc};

use alloy_primitives::B256;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use facet_derive::{DeriveError, FacetDeriver, L1ChainProvider, L2ChainProvider};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Per-network derivation pipelines, keyed by L1 chain id.
#[derive(Debug)]
pub(crate) struct AppState<L1, L2> {
    pipelines: HashMap<u64, FacetDeriver<L1, L2>>,
}

impl<L1, L2> AppState<L1, L2> {
    /// Wraps the configured pipelines.
    pub(crate) const fn new(pipelines: HashMap<u64, FacetDeriver<L1, L2>>) -> Self {
        Self { pipelines }
    }
}

/// Builds the service router.
pub(crate) fn router<L1, L2>(state: AppState<L1, L2>) -> Router
where
    L1: L1ChainProvider + Clone + 'static,
    L2: L2ChainProvider + Clone + 'static,
{
    Router::new()
        .route("/", get(derive_transaction_hash::<L1, L2>))
        .route("/healthz", get(healthz))
        .with_state(Arc::new(state))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeriveQuery {
    tx_hash: Option<String>,
    chain_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeriveResponse {
    facet_transaction_hash: B256,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

async fn derive_transaction_hash<L1, L2>(
    State(state): State<Arc<AppState<L1, L2>>>,
    Query(query): Query<DeriveQuery>,
) -> Response
where
    L1: L1ChainProvider + Clone + 'static,
    L2: L2ChainProvider + Clone + 'static,
{
    match derive(&state, query).await {
        Ok(hash) => {
            (StatusCode::OK, Json(DeriveResponse { facet_transaction_hash: hash })).into_response()
        }
        Err(err) => error_response(&err),
    }
}

async fn derive<L1, L2>(
    state: &AppState<L1, L2>,
    query: DeriveQuery,
) -> Result<B256, DeriveError>
where
    L1: L1ChainProvider + Clone + 'static,
    L2: L2ChainProvider + Clone + 'static,
{
    let chain_id = query
        .chain_id
        .as_deref()
        .and_then(|raw| raw.parse::<u64>().ok())
        .ok_or_else(|| DeriveError::Validation("Invalid chainId".to_string()))?;
    let pipeline = state
        .pipelines
        .get(&chain_id)
        .ok_or_else(|| DeriveError::Validation("Invalid chainId".to_string()))?;
    let tx_hash = query
        .tx_hash
        .as_deref()
        .and_then(|raw| raw.parse::<B256>().ok())
        .ok_or_else(|| DeriveError::Validation("Invalid txHash".to_string()))?;

    info!(target: "facet_deriver", %tx_hash, chain_id, "deriving facet transaction hash");
    pipeline.derive_transaction_hash(tx_hash).await
}

fn error_response(err: &DeriveError) -> Response {
    let status = match err {
        DeriveError::Validation(_) | DeriveError::Protocol(_) => StatusCode::BAD_REQUEST,
        DeriveError::NotFound(_) => StatusCode::NOT_FOUND,
        DeriveError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(target: "facet_deriver", %err, "derivation failed upstream");
    }
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}

async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
