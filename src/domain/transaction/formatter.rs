//! Transactions sub-formatter.

use super::wire::TransactionResponse;
use super::Transaction;
use crate::dashboard::Dashboard;
use crate::error::PoolviewError;
use chrono::{DateTime, Utc};

/// Sub-formatter for swap history tables.
pub struct Transactions<'a> {
    pub(crate) dashboard: &'a Dashboard,
}

impl<'a> Transactions<'a> {
    /// Format rows for `symbol`'s page with relative times anchored at `now`.
    pub fn list_at(
        &self,
        rows: &[TransactionResponse],
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, PoolviewError> {
        super::format_transactions(rows, symbol, self.dashboard.config(), now)
    }

    /// Format rows with relative times anchored at the current clock.
    pub fn list(
        &self,
        rows: &[TransactionResponse],
        symbol: &str,
    ) -> Result<Vec<Transaction>, PoolviewError> {
        self.list_at(rows, symbol, Utc::now())
    }

    /// Parse a raw transaction list payload and format it.
    pub fn list_from_json(
        &self,
        json: &str,
        symbol: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, PoolviewError> {
        let rows: Vec<TransactionResponse> = serde_json::from_str(json)?;
        self.list_at(&rows, symbol, now)
    }
}
