//! Wire types for the full multi-pair price endpoint.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw multi-pair full price payload.
///
/// A success carries the nested records under `RAW` (base → quote → record);
/// an error carries a `Response`/`Message` envelope and no `RAW` at all.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiPriceResponse {
    #[serde(rename = "RAW")]
    pub raw: Option<BTreeMap<String, BTreeMap<String, RawPairPrice>>>,
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

/// One raw full price record.
///
/// `LASTUPDATE` stays optional here; its presence is enforced at the domain
/// boundary where the pair it belongs to is known.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPairPrice {
    #[serde(rename = "LASTUPDATE")]
    pub last_update: Option<i64>,
    #[serde(rename = "PRICE", default)]
    pub price: f64,
    #[serde(rename = "LASTVOLUME", default)]
    pub last_volume: f64,
    #[serde(rename = "LASTVOLUMETO", default)]
    pub last_volume_to: f64,
    #[serde(rename = "VOLUME24HOUR", default)]
    pub volume24_hour: f64,
    #[serde(rename = "VOLUME24HOURTO", default)]
    pub volume24_hour_to: f64,
    #[serde(rename = "OPEN24HOUR", default)]
    pub open24_hour: f64,
    #[serde(rename = "HIGH24HOUR", default)]
    pub high24_hour: f64,
    #[serde(rename = "LOW24HOUR", default)]
    pub low24_hour: f64,
    #[serde(rename = "CHANGE24HOUR", default)]
    pub change24_hour: f64,
    #[serde(rename = "CHANGEPCT24HOUR", default)]
    pub change_pct24_hour: f64,
    #[serde(rename = "MARKET")]
    pub market: Option<String>,
    #[serde(rename = "LASTMARKET")]
    pub last_market: Option<String>,
}
