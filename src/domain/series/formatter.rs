//! Series sub-formatter — chart data for volume, liquidity and price history.

use super::wire::SampleResponse;
use super::{AggregatedSeries, PricePoint, Sample};
use crate::error::PoolviewError;
use crate::shared::AggregationMode;

/// Sub-formatter for chart series. Series output does not depend on display
/// settings, so this carries no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Series;

impl Series {
    pub fn volume(&self, samples: &[Sample]) -> Result<AggregatedSeries, PoolviewError> {
        super::format_volume(samples)
    }

    pub fn liquidity(&self, samples: &[Sample]) -> Result<AggregatedSeries, PoolviewError> {
        super::format_liquidity(samples)
    }

    pub fn historical(&self, rows: Vec<SampleResponse>) -> Vec<PricePoint> {
        super::format_historical(rows.into_iter().map(PricePoint::from).collect())
    }

    /// Parse a raw `[{time, value}, ...]` payload and aggregate it.
    pub fn from_json(
        &self,
        json: &str,
        mode: AggregationMode,
    ) -> Result<AggregatedSeries, PoolviewError> {
        let rows: Vec<SampleResponse> = serde_json::from_str(json)?;
        let samples: Vec<Sample> = rows.into_iter().map(Sample::from).collect();
        super::aggregate(&samples, mode)
    }
}
