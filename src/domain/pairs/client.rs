//! Pairs sub-client — pair universe fetch with TTL caching.

use crate::client::CryptoCompareClient;
use crate::domain::pairs::{ExchangeGraphs, QuoteIndexed};
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for pair universe operations.
pub struct Pairs<'a> {
    pub(crate) client: &'a CryptoCompareClient,
}

impl<'a> Pairs<'a> {
    /// Get the full pair universe, quote-indexed as the upstream reports it.
    /// Uses TTL cache.
    pub async fn all(&self) -> Result<ExchangeGraphs<QuoteIndexed>, SdkError> {
        {
            let cache = self.client.universe_cache.read().await;
            if let Some((universe, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.universe_cache_ttl {
                    return Ok(universe.clone());
                }
            }
        }

        let resp = self.client.http.all_exchanges().await?;
        let universe: ExchangeGraphs<QuoteIndexed> = resp.into();
        *self.client.universe_cache.write().await = Some((universe.clone(), Instant::now()));
        Ok(universe)
    }

    /// Drop the cached universe so the next call re-fetches.
    pub async fn invalidate_cache(&self) {
        *self.client.universe_cache.write().await = None;
    }
}
