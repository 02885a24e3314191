//! Transaction domain — swap history rows for the token page.

mod convert;
pub mod formatter;
pub mod wire;

use crate::config::DisplayConfig;
use crate::error::PoolviewError;
use crate::shared::TradeType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wire::{RouteResponse, TransactionResponse};

/// Execution time with its display forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxTime {
    pub value: DateTime<Utc>,
    /// Formatted with [`DisplayConfig::time_format`].
    pub display: String,
    /// Relative to the `now` passed to the formatter, e.g. `"5 minutes ago"`.
    pub ago: String,
}

/// A long identifier and its shortened form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortened {
    pub value: String,
    pub display: String,
}

/// One side of a swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    pub value: Decimal,
    pub symbol: String,
    pub symbol_display: String,
}

/// A route hop with display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(flatten)]
    pub route: RouteResponse,
    pub pool_name_display: String,
    pub token_out_symbol_display: String,
}

/// Pair shown in the pools column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pools {
    /// Icons for the input and output tokens.
    pub images: Vec<String>,
    /// `IN/OUT`
    pub name: String,
    pub name_display: String,
    pub routes: Vec<Route>,
}

/// A swap row ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TradeType,
    pub time: TxTime,
    pub hash: Shortened,
    pub address: Shortened,
    pub token_in: TokenAmount,
    pub token_out: TokenAmount,
    /// USD value of the swap.
    pub value: Decimal,
    pub pools: Pools,
}

/// Shape swap rows for the transactions table of `symbol`'s page.
///
/// Row order is preserved. `now` anchors the relative times.
pub fn format_transactions(
    rows: &[TransactionResponse],
    symbol: &str,
    config: &DisplayConfig,
    now: DateTime<Utc>,
) -> Result<Vec<Transaction>, PoolviewError> {
    rows.iter()
        .map(|row| Transaction::from_response(row, symbol, config, &now))
        .collect()
}
