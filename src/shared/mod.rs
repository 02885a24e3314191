//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;
pub mod time;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Denom ───────────────────────────────────────────────────────────────────

/// Newtype for on-chain token denominations (e.g. `"uosmo"`, `"ibc/27394FB0..."`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Denom(String);

impl Denom {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// IBC-bridged denoms carry a `ibc/` hash prefix instead of a readable name.
    pub fn is_ibc(&self) -> bool {
        self.0.starts_with("ibc/")
    }
}

impl std::fmt::Display for Denom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Denom {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for Denom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Denom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Denom(s))
    }
}

// ─── TradeType ───────────────────────────────────────────────────────────────

/// Direction of a swap relative to the token being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    /// A swap that ends in `symbol` is a buy of `symbol`; anything else sells it.
    pub fn for_symbol(symbol_out: &str, symbol: &str) -> Self {
        if symbol_out == symbol {
            TradeType::Buy
        } else {
            TradeType::Sell
        }
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TradeType::Buy => write!(f, "Buy"),
            TradeType::Sell => write!(f, "Sell"),
        }
    }
}

// ─── AggregationMode ─────────────────────────────────────────────────────────

/// How samples that share a bucket are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Running total (volume).
    #[default]
    Sum,
    /// Most recent value wins (liquidity snapshots).
    Last,
}

impl AggregationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Last => "last",
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Calendar period used to bucket daily samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Week,
    Month,
}

impl Period {
    /// Calendar key of `date` for this period. The year is not part of the key.
    pub fn key(&self, date: chrono::NaiveDate) -> u32 {
        match self {
            Self::Week => time::week_number(date),
            Self::Month => time::month_index(date),
        }
    }
}
