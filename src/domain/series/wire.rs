//! Wire types for chart series responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw `{time, value}` row from the volume, liquidity and price endpoints.
///
/// `value` is accepted as a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResponse {
    pub time: i64,
    pub value: Decimal,
}
