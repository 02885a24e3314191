//! # poolview
//!
//! View-model formatting for a liquidity-pool dashboard: token tables, swap
//! history, and volume/liquidity charts bucketed by calendar week and month.
//!
//! Nothing here fetches, stores or renders; every function takes raw API rows
//! and returns fresh view structures.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use poolview::prelude::*;
//!
//! let dashboard = Dashboard::builder().name_max_len(12).build()?;
//!
//! let tokens = dashboard.tokens().list_from_json(&tokens_json)?;
//! let volume = dashboard.series().volume(&samples)?;
//! println!("{} weekly buckets", volume.w.len());
//! ```

/// Shared newtypes, UTC calendar helpers and text formatting.
pub mod shared;

/// Domain modules (vertical slices): view types, wire types, conversions.
pub mod domain;

/// Loading placeholder layout.
pub mod skeleton;

/// Display configuration.
pub mod config;

/// Error types.
pub mod error;

/// `Dashboard` — the primary entry point.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::shared::{AggregationMode, Denom, Period, TradeType};

    // Series
    pub use crate::domain::series::wire::SampleResponse;
    pub use crate::domain::series::{
        aggregate, format_historical, format_liquidity, format_volume, AggregatedSeries, Bucket,
        PricePoint, Sample,
    };

    // Tokens
    pub use crate::domain::token::wire::TokenResponse;
    pub use crate::domain::token::{format_token, format_tokens, Token, TokenList};

    // Transactions
    pub use crate::domain::transaction::wire::{
        RouteResponse, SwapRouteResponse, TransactionResponse,
    };
    pub use crate::domain::transaction::{format_transactions, Transaction};

    pub use crate::skeleton::ChartContainerSkeleton;

    pub use crate::config::DisplayConfig;
    pub use crate::dashboard::{Dashboard, DashboardBuilder};
    pub use crate::error::PoolviewError;
}
