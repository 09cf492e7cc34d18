//! History domain — OHLC downsampling into fixed-width chart series.

#[cfg(feature = "http")]
pub mod client;
mod format;
pub mod wire;

pub use format::format_chart;

use serde::{Deserialize, Serialize};

/// Number of chart columns produced when the caller does not pick one.
pub const DEFAULT_COLUMNS: u32 = 12;

/// Upstream cap on the number of samples a single history request may return.
pub const MAX_LIMIT: u32 = 2000;

/// A single downsampled chart point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Midpoint of the sample's low and high.
    pub price: f64,
    /// Unix timestamp (seconds) carried over from the sample.
    pub time: i64,
}
