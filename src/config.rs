//! Display configuration and its defaults.

use crate::error::PoolviewError;
use chrono::format::{Item, StrftimeItems};

/// Base URL for token icons (one `<symbol>.png` per asset).
pub const DEFAULT_ASSET_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/osmosis-labs/assetlists/main/images";

/// Token names longer than this are shortened with an ellipsis.
pub const DEFAULT_NAME_MAX_LEN: usize = 10;

/// Characters kept on each side of a shortened hash or address.
pub const DEFAULT_EDGE_LEN: usize = 5;

/// `DD/MM/YY HH:mm:ss`
pub const DEFAULT_TIME_FORMAT: &str = "%d/%m/%y %H:%M:%S";

/// Display settings shared by every formatter of a [`crate::dashboard::Dashboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub asset_image_url: String,
    pub name_max_len: usize,
    pub edge_len: usize,
    pub time_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            asset_image_url: DEFAULT_ASSET_IMAGE_URL.to_string(),
            name_max_len: DEFAULT_NAME_MAX_LEN,
            edge_len: DEFAULT_EDGE_LEN,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), PoolviewError> {
        if self.asset_image_url.trim().is_empty() {
            return Err(PoolviewError::invalid("asset image URL must not be empty"));
        }
        if self.name_max_len == 0 {
            return Err(PoolviewError::invalid("name_max_len must be at least 1"));
        }
        if self.edge_len == 0 {
            return Err(PoolviewError::invalid("edge_len must be at least 1"));
        }
        if self.time_format.is_empty()
            || StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error))
        {
            return Err(PoolviewError::invalid(format!(
                "invalid time format: {:?}",
                self.time_format
            )));
        }
        Ok(())
    }

    /// Icon URL for a token symbol.
    pub fn asset_image(&self, symbol: &str) -> String {
        format!(
            "{}/{}.png",
            self.asset_image_url.trim_end_matches('/'),
            symbol.to_lowercase()
        )
    }
}
