//! Conversion: TokenResponse → Token.

use super::wire::TokenResponse;
use super::Token;
use crate::config::DEFAULT_NAME_MAX_LEN;
use crate::shared::fmt::format_token_name;

impl Token {
    pub(crate) fn from_response(row: &TokenResponse, id: usize, name_max_len: usize) -> Self {
        Self {
            id,
            denom: row.denom.clone(),
            price: row.price,
            symbol: row.symbol.clone(),
            symbol_display: format_token_name(&row.symbol, name_max_len),
            liquidity: row.liquidity,
            liquidity_24h_change: row.liquidity_24h_change.unwrap_or_default(),
            volume_24h: row.volume_24h,
            volume_24h_change: row.volume_24h_change,
            name: row.name.clone(),
            main: row.main,
            price_24h_change: row.price_24h_change,
        }
    }
}

impl From<TokenResponse> for Token {
    fn from(row: TokenResponse) -> Self {
        Token::from_response(&row, 0, DEFAULT_NAME_MAX_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn row_json() -> &'static str {
        r#"{
            "denom": "uosmo",
            "price": 0.85,
            "symbol": "OSMO",
            "name": "Osmosis",
            "liquidity": 125000000.5,
            "liquidity_24h_change": -1.25,
            "volume_24h": 4200000,
            "volume_24h_change": 3.5,
            "price_24h_change": -0.4,
            "main": true
        }"#
    }

    #[test]
    fn test_token_from_response() {
        let row: TokenResponse = serde_json::from_str(row_json()).unwrap();
        let token = Token::from(row);
        assert_eq!(token.id, 0);
        assert_eq!(token.denom.as_str(), "uosmo");
        assert_eq!(token.symbol_display, "OSMO");
        assert_eq!(token.volume_24h, Decimal::from(4_200_000));
        assert_eq!(token.liquidity_24h_change, Decimal::new(-125, 2));
        assert!(token.main);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let row: TokenResponse = serde_json::from_str(
            r#"{"denom": "uion", "price": 1, "symbol": "ION", "liquidity": 10,
                "volume_24h": 0, "volume_24h_change": 0, "price_24h_change": 0}"#,
        )
        .unwrap();
        let token = Token::from(row);
        assert!(!token.main);
        assert_eq!(token.name, "");
        assert_eq!(token.liquidity_24h_change, Decimal::ZERO);
    }

    #[test]
    fn test_token_serializes_camel_case() {
        let row: TokenResponse = serde_json::from_str(row_json()).unwrap();
        let value = serde_json::to_value(Token::from(row)).unwrap();
        assert!(value.get("symbolDisplay").is_some());
        assert!(value.get("volume24h").is_some());
        assert!(value.get("price24hChange").is_some());
    }
}
