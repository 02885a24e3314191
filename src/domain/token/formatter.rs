//! Tokens sub-formatter.

use super::wire::TokenResponse;
use super::{Token, TokenList};
use crate::dashboard::Dashboard;
use crate::error::PoolviewError;

/// Sub-formatter for token tables and token detail.
pub struct Tokens<'a> {
    pub(crate) dashboard: &'a Dashboard,
}

impl<'a> Tokens<'a> {
    pub fn list(&self, rows: &[TokenResponse]) -> TokenList {
        super::format_tokens(rows, self.dashboard.config())
    }

    pub fn get(&self, row: &TokenResponse) -> Token {
        super::format_token(row, self.dashboard.config())
    }

    /// Parse a raw token list payload and format it.
    pub fn list_from_json(&self, json: &str) -> Result<TokenList, PoolviewError> {
        let rows: Vec<TokenResponse> = serde_json::from_str(json)?;
        Ok(self.list(&rows))
    }

    /// Parse a raw single-token payload and format it.
    pub fn get_from_json(&self, json: &str) -> Result<Token, PoolviewError> {
        let row: TokenResponse = serde_json::from_str(json)?;
        Ok(self.get(&row))
    }
}
