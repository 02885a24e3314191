//! `Dashboard` — the entry point, with nested sub-formatter accessors.
//!
//! Each domain has its own sub-formatter in `domain/<name>/formatter.rs`.
//! This module keeps the builder, the display configuration and the accessors.

use crate::config::DisplayConfig;
use crate::domain::series::formatter::Series;
use crate::domain::token::formatter::Tokens;
use crate::domain::transaction::formatter::Transactions;
use crate::error::PoolviewError;
use crate::skeleton::ChartContainerSkeleton;

// Re-export sub-formatter types for convenience.
pub use crate::domain::series::formatter::Series as SeriesFormatter;
pub use crate::domain::token::formatter::Tokens as TokensFormatter;
pub use crate::domain::transaction::formatter::Transactions as TransactionsFormatter;

/// Formats raw pool API responses into view data.
///
/// Immutable once built; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    config: DisplayConfig,
}

impl Dashboard {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    // ── Sub-formatter accessors ──────────────────────────────────────────

    pub fn series(&self) -> Series {
        Series
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { dashboard: self }
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions { dashboard: self }
    }

    pub fn skeleton(&self) -> ChartContainerSkeleton {
        ChartContainerSkeleton::layout()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct DashboardBuilder {
    config: DisplayConfig,
}

impl DashboardBuilder {
    pub fn asset_image_url(mut self, url: &str) -> Self {
        self.config.asset_image_url = url.to_string();
        self
    }

    pub fn name_max_len(mut self, len: usize) -> Self {
        self.config.name_max_len = len;
        self
    }

    pub fn edge_len(mut self, len: usize) -> Self {
        self.config.edge_len = len;
        self
    }

    pub fn time_format(mut self, format: &str) -> Self {
        self.config.time_format = format.to_string();
        self
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: DisplayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Dashboard, PoolviewError> {
        self.config.validate()?;
        tracing::debug!("Dashboard configured: {:?}", self.config);
        Ok(Dashboard {
            config: self.config,
        })
    }
}
