//! Conversion: TransactionResponse → Transaction.

use super::wire::{RouteResponse, TransactionResponse};
use super::{Pools, Route, Shortened, TokenAmount, Transaction, TxTime};
use crate::config::DisplayConfig;
use crate::error::PoolviewError;
use crate::shared::fmt::{format_token_name, shorten_middle};
use crate::shared::time::{format_utc, time_ago};
use crate::shared::TradeType;
use chrono::{DateTime, Utc};

impl Transaction {
    pub(crate) fn from_response(
        row: &TransactionResponse,
        symbol: &str,
        config: &DisplayConfig,
        now: &DateTime<Utc>,
    ) -> Result<Self, PoolviewError> {
        let name_len = config.name_max_len;
        let symbol_in_display = format_token_name(&row.symbol_in, name_len);
        let symbol_out_display = format_token_name(&row.symbol_out, name_len);

        let pools = Pools {
            images: vec![
                config.asset_image(&row.symbol_in),
                config.asset_image(&row.symbol_out),
            ],
            name: format!("{}/{}", row.symbol_in, row.symbol_out),
            name_display: format!("{}/{}", symbol_in_display, symbol_out_display),
            routes: row
                .swap_route
                .routes
                .iter()
                .map(|route| Route::from_response(route, name_len))
                .collect(),
        };

        Ok(Self {
            kind: TradeType::for_symbol(&row.symbol_out, symbol),
            time: TxTime {
                value: row.time_tx,
                display: format_utc(&row.time_tx, &config.time_format)?,
                ago: time_ago(&row.time_tx, now),
            },
            hash: Shortened {
                value: row.tx_hash.clone(),
                display: shorten_middle(&row.tx_hash, config.edge_len),
            },
            address: Shortened {
                value: row.address.clone(),
                display: shorten_middle(&row.address, config.edge_len),
            },
            token_in: TokenAmount {
                value: row.amount_in,
                symbol: row.symbol_in.clone(),
                symbol_display: symbol_in_display,
            },
            token_out: TokenAmount {
                value: row.amount_out,
                symbol: row.symbol_out.clone(),
                symbol_display: symbol_out_display,
            },
            value: row.value_usd,
            pools,
        })
    }
}

impl Route {
    fn from_response(route: &RouteResponse, name_len: usize) -> Self {
        Self {
            pool_name_display: format_token_name(&route.pool_name, name_len),
            token_out_symbol_display: format_token_name(&route.token_out_symbol, name_len),
            route: route.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const ROW: &str = r#"{
        "time_tx": "2022-03-04T05:06:07",
        "tx_hash": "8F1E3C0D2B9A7F6E5D4C3B2A1908F7E6D5C4B3A29181716151413121110ABCDE",
        "address": "osmo1qyqszqgpqyqszqgpqyqszqgpqyqszqgpxk9q2",
        "amount_in": 12.5,
        "amount_out": "3.75",
        "symbol_in": "ATOM",
        "symbol_out": "OSMO",
        "value_usd": 150.25,
        "swap_route": {
            "routes": [
                {
                    "poolId": "1",
                    "poolName": "ATOM/OSMO",
                    "tokenOutSymbol": "OSMO",
                    "tokenOutDenom": "uosmo"
                }
            ]
        }
    }"#;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 3, 4, 8, 6, 7).unwrap()
    }

    fn row() -> TransactionResponse {
        serde_json::from_str(ROW).unwrap()
    }

    fn viewed_as(r: &TransactionResponse, symbol: &str) -> Transaction {
        Transaction::from_response(r, symbol, &DisplayConfig::default(), &now()).unwrap()
    }

    #[test]
    fn test_buy_when_output_is_viewed_symbol() {
        let tx = viewed_as(&row(), "OSMO");
        assert_eq!(tx.kind, TradeType::Buy);
        let tx = viewed_as(&row(), "ATOM");
        assert_eq!(tx.kind, TradeType::Sell);
    }

    #[test]
    fn test_time_display_and_ago() {
        let tx = viewed_as(&row(), "OSMO");
        assert_eq!(tx.time.value, Utc.with_ymd_and_hms(2022, 3, 4, 5, 6, 7).unwrap());
        assert_eq!(tx.time.display, "04/03/22 05:06:07");
        assert_eq!(tx.time.ago, "3 hours ago");
    }

    #[test]
    fn test_hash_and_address_shortened() {
        let tx = viewed_as(&row(), "OSMO");
        assert_eq!(tx.hash.display, "8F1E3...ABCDE");
        assert_eq!(tx.address.display, "osmo1...xk9q2");
        assert_eq!(tx.address.value, "osmo1qyqszqgpqyqszqgpqyqszqgpqyqszqgpxk9q2");
    }

    #[test]
    fn test_amounts_and_value() {
        let tx = viewed_as(&row(), "OSMO");
        assert_eq!(tx.token_in.value, Decimal::from_str("12.5").unwrap());
        assert_eq!(tx.token_out.value, Decimal::from_str("3.75").unwrap());
        assert_eq!(tx.token_in.symbol_display, "ATOM");
        assert_eq!(tx.value, Decimal::from_str("150.25").unwrap());
    }

    #[test]
    fn test_pools_images_and_routes() {
        let tx = viewed_as(&row(), "OSMO");
        assert_eq!(
            tx.pools.images,
            [
                "https://raw.githubusercontent.com/osmosis-labs/assetlists/main/images/atom.png",
                "https://raw.githubusercontent.com/osmosis-labs/assetlists/main/images/osmo.png",
            ]
        );
        assert_eq!(tx.pools.name, "ATOM/OSMO");
        assert_eq!(tx.pools.routes.len(), 1);
        let route = &tx.pools.routes[0];
        assert_eq!(route.pool_name_display, "ATOM/OSMO");
        assert_eq!(route.route.extra.get("poolId"), Some(&serde_json::json!("1")));

        let json = serde_json::to_value(route).unwrap();
        assert_eq!(json["tokenOutDenom"], "uosmo");
        assert_eq!(json["tokenOutSymbolDisplay"], "OSMO");
    }

    #[test]
    fn test_long_symbols_truncated_in_pool_name() {
        let mut r = row();
        r.symbol_in = "ibc/27394FB092D2ECCD".to_string();
        let tx = viewed_as(&r, "OSMO");
        assert_eq!(tx.pools.name_display, "ibc/27394F.../OSMO");
        assert_eq!(tx.pools.name, "ibc/27394FB092D2ECCD/OSMO");
    }

    #[test]
    fn test_invalid_time_tx_rejected() {
        let bad = ROW.replace("2022-03-04T05:06:07", "not a time");
        assert!(serde_json::from_str::<TransactionResponse>(&bad).is_err());
    }

    #[test]
    fn test_serialized_type_field() {
        let tx = viewed_as(&row(), "OSMO");
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "Buy");
        assert!(json.get("tokenIn").is_some());
    }
}
