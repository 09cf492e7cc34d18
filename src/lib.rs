//! # CryptoCompare SDK
//!
//! A Rust SDK for CryptoCompare-style price APIs: pair universe discovery,
//! full price snapshots, stale-pair blacklists, and downsampled chart history.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, domain models, pure graph/chart logic (always available)
//! 2. **Store** — `BlacklistStore` persistence trait + in-memory backend
//! 3. **HTTP API** — `CryptoCompareHttp` with per-endpoint retry policies
//! 4. **High-Level Client** — `CryptoCompareClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptocompare_sdk::prelude::*;
//!
//! let client = CryptoCompareClient::builder()
//!     .api_key("...")
//!     .app_name("my-app")
//!     .build()?;
//!
//! let mut requested = PairGraph::new();
//! requested.insert(Symbol::from("BTC"), Symbol::from("USD"));
//! let tradable = client
//!     .blacklist()
//!     .filter_requested(&requested, &ExchangeId::from("Kraken"))
//!     .await?;
//!
//! let chart = client
//!     .history()
//!     .chart(&Symbol::from("BTC"), &Symbol::from("USD"), HistoryPeriod::Day)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Store ───────────────────────────────────────────────────────────

/// Blacklist persistence: the `BlacklistStore` trait and backends.
pub mod store;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CryptoCompareClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ExchangeId, HistoryFunction, HistoryPeriod, Symbol};

    // Domain types — pairs
    pub use crate::domain::pairs::{
        BaseIndexed, ExchangeGraphs, Indexing, PairGraph, QuoteIndexed,
    };

    // Domain types — prices
    pub use crate::domain::prices::{ExchangePrices, PriceRecord, PricedGraph};

    // Domain types — blacklist
    pub use crate::domain::blacklist::{
        decode_blacklist, encode_blacklist, find_stale, STALE_AFTER_SECS,
    };

    // Domain types — history
    pub use crate::domain::history::{format_chart, ChartPoint, DEFAULT_COLUMNS, MAX_LIMIT};
    pub use crate::domain::history::wire::HistoryResponse;

    // Errors
    pub use crate::error::{DataError, HttpError, SdkError, StoreError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_EXCHANGE_NAME};

    // Store
    pub use crate::store::{BlacklistStore, MemoryBlacklistStore};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        BlacklistClient, CryptoCompareClient, CryptoCompareClientBuilder, HistoryClient,
        PairsClient, PricesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
