//! Prices sub-client — concurrent full-price fan-out.

use crate::client::CryptoCompareClient;
use crate::domain::pairs::{BaseIndexed, PairGraph};
use crate::domain::prices::convert;
use crate::domain::prices::{ExchangePrices, PricedGraph};
use crate::error::{DataError, SdkError};
use crate::shared::{ExchangeId, Symbol};
use futures_util::future::try_join_all;
use std::collections::BTreeSet;

/// Sub-client for price snapshot operations.
pub struct Prices<'a> {
    pub(crate) client: &'a CryptoCompareClient,
}

impl<'a> Prices<'a> {
    /// Fetch full price records for every edge of a base-indexed pair graph
    /// on one exchange.
    ///
    /// One upstream request per base symbol, issued concurrently; any single
    /// failure fails the whole operation. An upstream error envelope for one
    /// base means the exchange has no data for those pairs and contributes an
    /// empty group.
    pub async fn for_pairs(
        &self,
        pairs: &PairGraph<BaseIndexed>,
        exchange: &ExchangeId,
    ) -> Result<ExchangePrices, SdkError> {
        let fetches = pairs
            .iter()
            .map(|(base, quotes)| self.fetch_group(base, quotes, exchange));
        let groups = try_join_all(fetches).await?;

        let mut merged = PricedGraph::new();
        for group in groups {
            merged.merge(group);
        }

        let mut prices = ExchangePrices::new();
        prices.insert(exchange.clone(), merged);
        Ok(prices)
    }

    async fn fetch_group(
        &self,
        base: &Symbol,
        quotes: &BTreeSet<Symbol>,
        exchange: &ExchangeId,
    ) -> Result<PricedGraph, SdkError> {
        if quotes.is_empty() {
            return Ok(PricedGraph::new());
        }

        let tsyms = quotes
            .iter()
            .map(|quote| quote.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let resp = self
            .client
            .http
            .price_multi_full(base.as_str(), &tsyms, exchange.as_str())
            .await?;

        match resp.raw {
            Some(raw) => Ok(convert::priced_graph(raw)?),
            None if resp.response.as_deref() == Some("Error") => {
                tracing::warn!(
                    base = %base,
                    exchange = %exchange,
                    message = resp.message.as_deref().unwrap_or_default(),
                    "Upstream has no price data for pair group"
                );
                Ok(PricedGraph::new())
            }
            None => Err(SdkError::Data(DataError::BadEnvelope {
                message: "price response carries neither RAW data nor an error status".to_string(),
            })),
        }
    }
}
