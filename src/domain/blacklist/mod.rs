//! Blacklist domain — staleness detection and the persisted blob codec.

#[cfg(feature = "http")]
pub mod client;
mod staleness;

pub use staleness::find_stale;

use crate::domain::pairs::{BaseIndexed, ExchangeGraphs};
use crate::error::DataError;

/// Seconds after which a pair's last update counts as stale (365 days).
pub const STALE_AFTER_SECS: i64 = 31_536_000;

/// Serialize a stale-pair map into the persisted blob form.
pub fn encode_blacklist(stale: &ExchangeGraphs<BaseIndexed>) -> Result<String, DataError> {
    Ok(serde_json::to_string(stale)?)
}

/// Parse a persisted blob back into a stale-pair map.
///
/// A corrupt blob is a data error, never an empty blacklist.
pub fn decode_blacklist(blob: &str) -> Result<ExchangeGraphs<BaseIndexed>, DataError> {
    Ok(serde_json::from_str(blob)?)
}
