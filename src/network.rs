//! Network URL constants for the CryptoCompare SDK.

/// Default REST API base URL (the min-API data root).
pub const DEFAULT_API_URL: &str = "https://min-api.cryptocompare.com/data";

/// Path of the pair universe endpoint (exchange → quote → base symbols).
pub const ALL_EXCHANGES_PATH: &str = "all/exchanges";

/// Path of the full multi-pair price endpoint.
pub const PRICE_MULTI_FULL_PATH: &str = "pricemultifull";

/// Exchange name the upstream substitutes when none is given: its own
/// aggregate index.
pub const DEFAULT_EXCHANGE_NAME: &str = "CCCAGG";
