//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Exchange not listed in the pair universe: {0}")]
    ExchangeNotFound(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Malformed upstream payloads and persisted blobs.
///
/// These are never coerced to defaults: a record without its last-update
/// timestamp or a blob that fails to parse surfaces here instead of being
/// silently treated as fresh, stale, or absent.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Bad response envelope: {message}")]
    BadEnvelope { message: String },

    #[error("Price record for {base}/{quote} is missing its last-update timestamp")]
    MissingLastUpdate { base: String, quote: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Blacklist persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),
}
