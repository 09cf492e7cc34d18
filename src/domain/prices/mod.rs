//! Price record domain — full per-pair price snapshots.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{ExchangeId, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full price snapshot for one (base, quote) pair on one exchange.
///
/// Staleness detection consumes only `last_update`; every other field passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Unix timestamp (seconds) of the last trade on this pair.
    pub last_update: i64,
    pub price: f64,
    pub last_volume: f64,
    pub last_volume_to: f64,
    pub volume24_hour: f64,
    pub volume24_hour_to: f64,
    pub open24_hour: f64,
    pub high24_hour: f64,
    pub low24_hour: f64,
    pub change24_hour: f64,
    pub change_pct24_hour: f64,
    pub market: Option<String>,
    pub last_market: Option<String>,
}

// ─── PricedGraph ─────────────────────────────────────────────────────────────

/// A base-indexed pair graph whose edges carry full price records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricedGraph {
    records: BTreeMap<Symbol, BTreeMap<Symbol, PriceRecord>>,
}

impl PricedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, base: Symbol, quote: Symbol, record: PriceRecord) {
        self.records.entry(base).or_default().insert(quote, record);
    }

    pub fn get(&self, base: &Symbol, quote: &Symbol) -> Option<&PriceRecord> {
        self.records.get(base).and_then(|quotes| quotes.get(quote))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BTreeMap<Symbol, PriceRecord>)> {
        self.records.iter()
    }

    /// Number of bases, not edges.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fold another graph's records into this one. Colliding edges take the
    /// incoming record.
    pub fn merge(&mut self, other: PricedGraph) {
        for (base, quotes) in other.records {
            self.records.entry(base).or_default().extend(quotes);
        }
    }
}

// ─── ExchangePrices ──────────────────────────────────────────────────────────

/// Per-exchange priced graphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangePrices {
    exchanges: BTreeMap<ExchangeId, PricedGraph>,
}

impl ExchangePrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, exchange: ExchangeId, prices: PricedGraph) {
        self.exchanges.insert(exchange, prices);
    }

    pub fn get(&self, exchange: &ExchangeId) -> Option<&PricedGraph> {
        self.exchanges.get(exchange)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExchangeId, &PricedGraph)> {
        self.exchanges.iter()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
