//! High-level client — `CryptoCompareClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::blacklist::client::Blacklist;
use crate::domain::history::client::History;
use crate::domain::pairs::client::Pairs;
use crate::domain::pairs::{ExchangeGraphs, QuoteIndexed};
use crate::domain::prices::client::Prices;
use crate::error::SdkError;
use crate::http::CryptoCompareHttp;
use crate::shared::ExchangeId;
use crate::store::{BlacklistStore, MemoryBlacklistStore};

use async_lock::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::blacklist::client::Blacklist as BlacklistClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::pairs::client::Pairs as PairsClient;
pub use crate::domain::prices::client::Prices as PricesClient;

/// The primary entry point for the CryptoCompare SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.pairs()`, `client.blacklist()`, etc.
pub struct CryptoCompareClient {
    pub(crate) http: CryptoCompareHttp,
    /// Where reconciled blacklists persist between runs.
    pub(crate) store: Arc<dyn BlacklistStore>,
    /// Pair universe cache: (universe, fetched_at)
    pub(crate) universe_cache: Arc<RwLock<Option<(ExchangeGraphs<QuoteIndexed>, Instant)>>>,
    /// Cache TTL for the pair universe
    pub(crate) universe_cache_ttl: Duration,
    /// One lock per exchange, so concurrent reconciliation passes for the
    /// same exchange queue instead of racing on the store.
    pub(crate) reconcile_locks: Arc<Mutex<HashMap<ExchangeId, Arc<Mutex<()>>>>>,
}

impl CryptoCompareClient {
    pub fn builder() -> CryptoCompareClientBuilder {
        CryptoCompareClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn pairs(&self) -> Pairs<'_> {
        Pairs { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn blacklist(&self) -> Blacklist<'_> {
        Blacklist { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        *self.universe_cache.write().await = None;
    }

    /// The lock serializing reconciliation passes for one exchange.
    pub(crate) async fn reconcile_lock(&self, exchange: &ExchangeId) -> Arc<Mutex<()>> {
        let mut locks = self.reconcile_locks.lock().await;
        locks.entry(exchange.clone()).or_default().clone()
    }
}

impl Clone for CryptoCompareClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            store: self.store.clone(),
            universe_cache: self.universe_cache.clone(),
            universe_cache_ttl: self.universe_cache_ttl,
            reconcile_locks: self.reconcile_locks.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CryptoCompareClientBuilder {
    base_url: String,
    api_key: Option<String>,
    app_name: Option<String>,
    universe_cache_ttl: Duration,
    store: Option<Arc<dyn BlacklistStore>>,
}

impl Default for CryptoCompareClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            app_name: None,
            universe_cache_ttl: Duration::from_secs(60),
            store: None,
        }
    }
}

impl CryptoCompareClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// API key for authenticated rate limits.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Application name reported to the upstream with every request.
    pub fn app_name(mut self, name: &str) -> Self {
        self.app_name = Some(name.to_string());
        self
    }

    pub fn universe_cache_ttl(mut self, ttl: Duration) -> Self {
        self.universe_cache_ttl = ttl;
        self
    }

    /// Blacklist persistence backend. Defaults to an in-memory store.
    pub fn store(mut self, store: Arc<dyn BlacklistStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<CryptoCompareClient, SdkError> {
        if self.base_url.is_empty() {
            return Err(SdkError::Config("base URL is empty".to_string()));
        }
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| SdkError::Config(format!("invalid base URL {:?}: {}", self.base_url, e)))?;

        Ok(CryptoCompareClient {
            http: CryptoCompareHttp::new(&self.base_url, self.api_key, self.app_name),
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryBlacklistStore::new())),
            universe_cache: Arc::new(RwLock::new(None)),
            universe_cache_ttl: self.universe_cache_ttl,
            reconcile_locks: Arc::new(Mutex::new(HashMap::new())),
        })
    }
}
