//! Blacklist sub-client — reconciliation, persistence, pair filtering.

use crate::client::CryptoCompareClient;
use crate::domain::blacklist::{decode_blacklist, encode_blacklist, find_stale, STALE_AFTER_SECS};
use crate::domain::pairs::{BaseIndexed, ExchangeGraphs, PairGraph};
use crate::error::SdkError;
use crate::shared::ExchangeId;
use chrono::Utc;

/// Sub-client for stale-pair blacklist operations.
pub struct Blacklist<'a> {
    pub(crate) client: &'a CryptoCompareClient,
}

impl<'a> Blacklist<'a> {
    /// Run a full reconciliation pass for one exchange.
    ///
    /// Fetches the pair universe, reverses it to base-indexed, fetches the
    /// exchange's complete price set, collects its stale pairs, and persists
    /// them when at least one exists. Returns the per-exchange stale map,
    /// keyed by the universe's verbatim spelling of the exchange; the entry
    /// is an empty graph when nothing is stale.
    ///
    /// At most one pass runs per exchange at a time; simultaneous callers
    /// queue on a per-exchange lock.
    pub async fn full_exchange_blacklist(
        &self,
        exchange: &ExchangeId,
    ) -> Result<ExchangeGraphs<BaseIndexed>, SdkError> {
        let lock = self.client.reconcile_lock(exchange).await;
        let _guard = lock.lock().await;

        let universe = self.client.pairs().all().await?.reverse_all();
        let (listed_as, listed) = universe
            .iter()
            .find(|(candidate, _)| *candidate == exchange)
            .map(|(candidate, graph)| (candidate.clone(), graph.clone()))
            .ok_or_else(|| SdkError::ExchangeNotFound(exchange.to_string()))?;

        let prices = self.client.prices().for_pairs(&listed, &listed_as).await?;
        let stale = find_stale(&prices, Utc::now().timestamp(), STALE_AFTER_SECS);

        let found = stale.get(exchange).map_or(0, |graph| graph.edge_count());
        tracing::info!(exchange = %listed_as, stale_pairs = found, "Reconciled exchange blacklist");

        if found > 0 {
            let blob = encode_blacklist(&stale)?;
            if let Err(err) = self.client.store.put(exchange, blob).await {
                tracing::warn!(
                    exchange = %exchange,
                    error = %err,
                    "Failed to persist blacklist; keeping the computed result"
                );
            }
        }

        Ok(stale)
    }

    /// Filter a requested pair set against the exchange's stale pairs.
    ///
    /// `cached` is a previously persisted blob; when absent, a full
    /// reconciliation pass runs first. A stale map without an entry for the
    /// exchange excludes nothing.
    pub async fn filter_pairs(
        &self,
        requested: &PairGraph<BaseIndexed>,
        exchange: &ExchangeId,
        cached: Option<&str>,
    ) -> Result<PairGraph<BaseIndexed>, SdkError> {
        let stale_map = match cached {
            Some(blob) => decode_blacklist(blob)?,
            None => self.full_exchange_blacklist(exchange).await?,
        };

        let none = PairGraph::new();
        let stale = stale_map.get(exchange).unwrap_or(&none);
        Ok(requested.difference(stale))
    }

    /// Filter a requested pair set, consulting the persisted blacklist first.
    ///
    /// The single entry point for quote-serving callers: store hit → filter
    /// against the persisted blob; store miss → reconcile, then filter.
    pub async fn filter_requested(
        &self,
        requested: &PairGraph<BaseIndexed>,
        exchange: &ExchangeId,
    ) -> Result<PairGraph<BaseIndexed>, SdkError> {
        let cached = self.client.store.get(exchange).await?;
        self.filter_pairs(requested, exchange, cached.as_deref()).await
    }
}
