//! Custom serde helpers for backend wire formats.

/// Deserializes a backend timestamp string into `DateTime<Utc>`.
///
/// Transaction rows carry `time_tx` either as RFC 3339 or as a naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` string that is already in UTC.
pub mod utc_string {
    use crate::shared::time::parse_utc;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_utc(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", raw)))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }
}
