//! Wire types for token responses (REST).

use crate::shared::Denom;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw token row from the tokens endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub denom: Denom,
    pub price: Decimal,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub liquidity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_24h_change: Option<Decimal>,
    pub volume_24h: Decimal,
    pub volume_24h_change: Decimal,
    pub price_24h_change: Decimal,
    #[serde(default)]
    pub main: bool,
}
