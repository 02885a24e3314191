//! Series domain — daily volume/liquidity samples and their weekly/monthly buckets.

mod bucketing;
mod convert;
pub mod formatter;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use bucketing::{aggregate, bucket, format_historical, format_liquidity, format_volume};

/// One timestamped data point (daily volume, liquidity, or price).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix timestamp in seconds, UTC.
    pub time: i64,
    pub value: Decimal,
}

impl Sample {
    pub fn new(time: i64, value: Decimal) -> Self {
        Self { time, value }
    }
}

/// Aggregate of all samples that fell in one calendar week or month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Timestamp of the sample that opened the bucket (not a period boundary).
    pub time: i64,
    pub value: Decimal,
}

/// A historical price point, passed through to charts untouched.
pub type PricePoint = Sample;

/// Daily, weekly and monthly views of the same series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedSeries {
    /// Input samples, unchanged.
    pub d: Vec<Sample>,
    pub w: Vec<Bucket>,
    pub m: Vec<Bucket>,
}

impl AggregatedSeries {
    pub fn daily(&self) -> &[Sample] {
        &self.d
    }

    pub fn weekly(&self) -> &[Bucket] {
        &self.w
    }

    pub fn monthly(&self) -> &[Bucket] {
        &self.m
    }
}
