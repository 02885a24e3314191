//! Weekly/monthly bucketing of daily samples.
//!
//! Both periods are built in a single pass. Each period keeps one open bucket,
//! seeded with the first sample's timestamp and a zero value; every sample
//! (the first one included) is then compared against the open bucket's
//! calendar key:
//!
//! - same key: the value is folded in (`Sum` adds, `Last` replaces)
//! - new key: the open bucket is closed and the sample opens the next one
//!
//! The open bucket is always emitted at the end. Keys carry no year, so equal
//! week or month numbers in different years share a bucket when they are
//! adjacent in the input.

use super::{AggregatedSeries, Bucket, PricePoint, Sample};
use crate::error::PoolviewError;
use crate::shared::time::date_utc;
use crate::shared::{AggregationMode, Period};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Open bucket plus everything already closed for one period.
struct Bucketer {
    period: Period,
    mode: AggregationMode,
    open: Bucket,
    open_key: u32,
    closed: Vec<Bucket>,
}

impl Bucketer {
    fn seed(period: Period, mode: AggregationMode, time: i64, date: NaiveDate) -> Self {
        Self {
            period,
            mode,
            open: Bucket {
                time,
                value: Decimal::ZERO,
            },
            open_key: period.key(date),
            closed: Vec::new(),
        }
    }

    fn push(&mut self, sample: &Sample, date: NaiveDate) -> Result<(), PoolviewError> {
        let key = self.period.key(date);
        if key == self.open_key {
            self.open.value = match self.mode {
                AggregationMode::Sum => {
                    self.open.value.checked_add(sample.value).ok_or_else(|| {
                        PoolviewError::invalid(format!(
                            "{:?} total overflows at sample time {}",
                            self.period, sample.time
                        ))
                    })?
                }
                AggregationMode::Last => sample.value,
            };
        } else {
            let next = Bucket::from(*sample);
            self.closed.push(std::mem::replace(&mut self.open, next));
            self.open_key = key;
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<Bucket> {
        self.closed.push(self.open);
        self.closed
    }
}

fn first_sample(samples: &[Sample]) -> Result<&Sample, PoolviewError> {
    samples
        .first()
        .ok_or_else(|| PoolviewError::invalid("cannot aggregate an empty sample series"))
}

/// Build daily, weekly and monthly views of `samples`.
///
/// `samples` must be non-empty and ordered by time; the daily view is a copy
/// of the input.
pub fn aggregate(
    samples: &[Sample],
    mode: AggregationMode,
) -> Result<AggregatedSeries, PoolviewError> {
    let first = first_sample(samples)?;
    let seed_date = date_utc(first.time)?;

    let mut weekly = Bucketer::seed(Period::Week, mode, first.time, seed_date);
    let mut monthly = Bucketer::seed(Period::Month, mode, first.time, seed_date);

    let mut previous = first.time;
    let mut out_of_order = 0usize;
    for sample in samples {
        if sample.time < previous {
            out_of_order += 1;
        }
        previous = sample.time;

        let date = date_utc(sample.time)?;
        weekly.push(sample, date)?;
        monthly.push(sample, date)?;
    }

    if out_of_order > 0 {
        tracing::warn!(
            "{} sample(s) out of time order; buckets follow input order",
            out_of_order
        );
    }

    let series = AggregatedSeries {
        d: samples.to_vec(),
        w: weekly.finish(),
        m: monthly.finish(),
    };

    tracing::debug!(
        "Aggregated {} sample(s) ({}) into {} weekly / {} monthly bucket(s)",
        series.d.len(),
        mode,
        series.w.len(),
        series.m.len()
    );

    Ok(series)
}

/// Bucket `samples` for a single period.
pub fn bucket(
    samples: &[Sample],
    period: Period,
    mode: AggregationMode,
) -> Result<Vec<Bucket>, PoolviewError> {
    let first = first_sample(samples)?;
    let mut bucketer = Bucketer::seed(period, mode, first.time, date_utc(first.time)?);
    for sample in samples {
        bucketer.push(sample, date_utc(sample.time)?)?;
    }
    Ok(bucketer.finish())
}

/// Volume chart data: weekly and monthly totals.
pub fn format_volume(samples: &[Sample]) -> Result<AggregatedSeries, PoolviewError> {
    aggregate(samples, AggregationMode::Sum)
}

/// Liquidity chart data: the last snapshot of each week and month.
pub fn format_liquidity(samples: &[Sample]) -> Result<AggregatedSeries, PoolviewError> {
    aggregate(samples, AggregationMode::Last)
}

/// Historical prices are charted as delivered.
pub fn format_historical(points: Vec<PricePoint>) -> Vec<PricePoint> {
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;
    // 2023-03-01T00:00:00Z, a Wednesday.
    const MAR_1_2023: i64 = 1_677_628_800;

    fn sample(time: i64, value: i64) -> Sample {
        Sample::new(time, Decimal::from(value))
    }

    fn buckets(pairs: &[(i64, i64)]) -> Vec<Bucket> {
        pairs
            .iter()
            .map(|&(time, value)| Bucket {
                time,
                value: Decimal::from(value),
            })
            .collect()
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let err = aggregate(&[], AggregationMode::Sum).unwrap_err();
        assert!(matches!(err, PoolviewError::InvalidInput(_)));
        assert!(bucket(&[], Period::Week, AggregationMode::Last).is_err());
    }

    #[test]
    fn test_single_sample_sum_and_last() {
        let input = vec![sample(MAR_1_2023, 42)];
        for mode in [AggregationMode::Sum, AggregationMode::Last] {
            let series = aggregate(&input, mode).unwrap();
            assert_eq!(series.d, input);
            assert_eq!(series.w, buckets(&[(MAR_1_2023, 42)]));
            assert_eq!(series.m, buckets(&[(MAR_1_2023, 42)]));
        }
    }

    #[test]
    fn test_sum_same_week_and_month() {
        let input = vec![sample(MAR_1_2023, 10), sample(MAR_1_2023 + DAY, 20)];
        let series = format_volume(&input).unwrap();
        assert_eq!(series.d, input);
        assert_eq!(series.w, buckets(&[(MAR_1_2023, 30)]));
        assert_eq!(series.m, buckets(&[(MAR_1_2023, 30)]));
    }

    #[test]
    fn test_sum_week_boundary_on_sunday() {
        // Sat 4th, Sun 5th, Mon 6th of March 2023.
        let sat = MAR_1_2023 + 3 * DAY;
        let sun = sat + DAY;
        let input = vec![sample(sat, 1), sample(sun, 2), sample(sun + DAY, 3)];
        let series = format_volume(&input).unwrap();
        assert_eq!(series.w, buckets(&[(sat, 1), (sun, 5)]));
        assert_eq!(series.m, buckets(&[(sat, 6)]));
    }

    #[test]
    fn test_last_two_months() {
        let mar_30 = MAR_1_2023 + 29 * DAY;
        let mar_31 = mar_30 + DAY;
        let apr_1 = mar_31 + DAY;
        let input = vec![sample(mar_30, 5), sample(mar_31, 7), sample(apr_1, 9)];
        let series = format_liquidity(&input).unwrap();
        assert_eq!(series.m, buckets(&[(mar_30, 7), (apr_1, 9)]));
        // Thu 30th through Sat 1st share a week.
        assert_eq!(series.w, buckets(&[(mar_30, 9)]));
    }

    #[test]
    fn test_bucket_time_is_opening_sample_not_boundary() {
        let mid_day = MAR_1_2023 + 13 * 3_600;
        let series = format_volume(&[sample(mid_day, 1)]).unwrap();
        assert_eq!(series.w[0].time, mid_day);
        assert_eq!(series.m[0].time, mid_day);
    }

    #[test]
    fn test_same_week_number_next_year_aliases() {
        // 2023-01-10 and 2024-01-10 are both in week 2 of January.
        let jan_10_2023 = 1_673_308_800;
        let jan_10_2024 = 1_704_844_800;
        let input = vec![sample(jan_10_2023, 1), sample(jan_10_2024, 2)];
        let series = format_volume(&input).unwrap();
        assert_eq!(series.w, buckets(&[(jan_10_2023, 3)]));
        assert_eq!(series.m, buckets(&[(jan_10_2023, 3)]));
    }

    #[test]
    fn test_out_of_order_input_follows_input_order() {
        let apr_1 = MAR_1_2023 + 31 * DAY;
        let input = vec![sample(apr_1, 1), sample(MAR_1_2023, 2), sample(apr_1 + DAY, 3)];
        let series = format_volume(&input).unwrap();
        assert_eq!(
            series.m,
            buckets(&[(apr_1, 1), (MAR_1_2023, 2), (apr_1 + DAY, 3)])
        );
    }

    #[test]
    fn test_bucket_single_period_matches_aggregate() {
        let input: Vec<Sample> = (0..40).map(|i| sample(MAR_1_2023 + i * DAY, i)).collect();
        let series = format_liquidity(&input).unwrap();
        assert_eq!(
            bucket(&input, Period::Week, AggregationMode::Last).unwrap(),
            series.w
        );
        assert_eq!(
            bucket(&input, Period::Month, AggregationMode::Last).unwrap(),
            series.m
        );
    }

    #[test]
    fn test_timestamp_out_of_range_is_invalid() {
        let input = vec![sample(MAR_1_2023, 1), sample(i64::MAX, 2)];
        assert!(matches!(
            format_volume(&input),
            Err(PoolviewError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_sum_overflow_is_invalid() {
        let input = vec![
            Sample::new(MAR_1_2023, Decimal::MAX),
            Sample::new(MAR_1_2023 + DAY, Decimal::MAX),
        ];
        assert!(matches!(
            format_volume(&input),
            Err(PoolviewError::InvalidInput(_))
        ));
        assert!(matches!(
            bucket(&input, Period::Month, AggregationMode::Sum),
            Err(PoolviewError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_last_never_overflows() {
        let input = vec![
            Sample::new(MAR_1_2023, Decimal::MAX),
            Sample::new(MAR_1_2023 + DAY, Decimal::MAX),
        ];
        let series = format_liquidity(&input).unwrap();
        assert_eq!(series.m[0].value, Decimal::MAX);
    }

    #[test]
    fn test_format_historical_is_identity() {
        let points = vec![sample(MAR_1_2023, 3), sample(MAR_1_2023 - DAY, 4)];
        assert_eq!(format_historical(points.clone()), points);
    }
}
