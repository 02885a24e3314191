//! Token domain — pool token rows shaped for the token tables.

mod convert;
pub mod formatter;
pub mod wire;

use crate::config::DisplayConfig;
use crate::shared::Denom;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wire::TokenResponse;

// ─── Token ───────────────────────────────────────────────────────────────────

/// A token row ready for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// 1-based rank by liquidity in a [`TokenList`]; 0 for a standalone token.
    pub id: usize,
    pub denom: Denom,
    pub price: Decimal,
    pub symbol: String,
    pub symbol_display: String,
    pub liquidity: Decimal,
    pub liquidity_24h_change: Decimal,
    pub volume_24h: Decimal,
    pub volume_24h_change: Decimal,
    pub name: String,
    pub main: bool,
    pub price_24h_change: Decimal,
}

// ─── TokenList ───────────────────────────────────────────────────────────────

/// Token tables: everything, the curated main set, the frontier set, and the
/// currently selected tokens (filled by the app, empty here).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenList {
    pub all: Vec<Token>,
    pub main: Vec<Token>,
    pub frontier: Vec<Token>,
    pub current: Vec<Token>,
}

impl TokenList {
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn by_denom(&self, denom: &Denom) -> Option<&Token> {
        self.all.iter().find(|t| &t.denom == denom)
    }
}

/// Rank tokens by liquidity (highest first) and split them into tables.
///
/// The input slice is left untouched; ties keep their input order.
pub fn format_tokens(rows: &[TokenResponse], config: &DisplayConfig) -> TokenList {
    let mut ranked: Vec<&TokenResponse> = rows.iter().collect();
    ranked.sort_by(|a, b| b.liquidity.cmp(&a.liquidity));

    let mut list = TokenList::default();
    for (index, row) in ranked.into_iter().enumerate() {
        let token = Token::from_response(row, index + 1, config.name_max_len);
        if token.main {
            list.main.push(token.clone());
        }
        list.frontier.push(token.clone());
        list.all.push(token);
    }

    tracing::debug!(
        "Formatted {} token(s), {} main",
        list.all.len(),
        list.main.len()
    );
    list
}

/// Shape a single token row (token detail page).
pub fn format_token(row: &TokenResponse, config: &DisplayConfig) -> Token {
    Token::from_response(row, 0, config.name_max_len)
}
