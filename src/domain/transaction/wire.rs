//! Wire types for swap transaction responses (REST).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw swap row from the token transactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(with = "crate::shared::serde_util::utc_string")]
    pub time_tx: DateTime<Utc>,
    pub tx_hash: String,
    pub address: String,
    pub amount_in: Decimal,
    pub amount_out: Decimal,
    pub symbol_in: String,
    pub symbol_out: String,
    pub value_usd: Decimal,
    pub swap_route: SwapRouteResponse,
}

/// Pools a swap was routed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapRouteResponse {
    #[serde(default)]
    pub routes: Vec<RouteResponse>,
}

/// One hop of a swap route.
///
/// Fields other than the pool name and output symbol (pool id, denoms, ...)
/// are kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub pool_name: String,
    pub token_out_symbol: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
