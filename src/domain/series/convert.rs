//! Conversions from wire types to domain types for series.

use super::wire::SampleResponse;
use super::{Bucket, Sample};

impl From<SampleResponse> for Sample {
    fn from(row: SampleResponse) -> Self {
        Self {
            time: row.time,
            value: row.value,
        }
    }
}

impl From<Sample> for Bucket {
    fn from(sample: Sample) -> Self {
        Self {
            time: sample.time,
            value: sample.value,
        }
    }
}
