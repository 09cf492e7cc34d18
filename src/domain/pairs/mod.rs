//! Pair universe domain — direction-typed pair graphs and reversal.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{ExchangeId, Symbol};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;

// ─── Indexing direction ──────────────────────────────────────────────────────

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::BaseIndexed {}
    impl Sealed for super::QuoteIndexed {}
}

/// Marker trait recording which side of a pair a graph is keyed by.
///
/// Mixing directions at a call site is a type error: `difference` only
/// accepts two graphs of the same direction, and `reverse` flips the
/// direction in the return type.
pub trait Indexing: sealed::Sealed + Copy + std::fmt::Debug {
    /// The direction produced by one reversal.
    type Opposite: Indexing<Opposite = Self>;
}

/// Keys are base symbols, values are quote symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseIndexed;

/// Keys are quote symbols, values are base symbols — the direction the
/// upstream pair universe arrives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteIndexed;

impl Indexing for BaseIndexed {
    type Opposite = QuoteIndexed;
}

impl Indexing for QuoteIndexed {
    type Opposite = BaseIndexed;
}

// ─── PairGraph ───────────────────────────────────────────────────────────────

/// A bipartite mapping from one side of a trading pair to the set of symbols
/// on the other side.
///
/// Value sets are deduplicated structurally and iteration order is
/// deterministic. Empty value sets are representable; [`difference`]
/// retains keys whose set empties out, while [`reverse`] drops them (an
/// empty entry carries no edges to flip).
///
/// [`difference`]: Self::difference
/// [`reverse`]: Self::reverse
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairGraph<D: Indexing> {
    edges: BTreeMap<Symbol, BTreeSet<Symbol>>,
    _direction: PhantomData<D>,
}

impl<D: Indexing> PairGraph<D> {
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
            _direction: PhantomData,
        }
    }

    /// Add one (key → value) edge. Duplicate values per key collapse.
    pub fn insert(&mut self, key: Symbol, value: Symbol) {
        self.edges.entry(key).or_default().insert(value);
    }

    /// Add a key with no values.
    pub fn insert_empty(&mut self, key: Symbol) {
        self.edges.entry(key).or_default();
    }

    pub fn get(&self, key: &Symbol) -> Option<&BTreeSet<Symbol>> {
        self.edges.get(key)
    }

    pub fn contains(&self, key: &Symbol, value: &Symbol) -> bool {
        self.edges.get(key).is_some_and(|values| values.contains(value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Symbol> {
        self.edges.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BTreeSet<Symbol>)> {
        self.edges.iter()
    }

    /// Number of keys, not edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(|values| values.len()).sum()
    }

    /// Flip every edge, producing a graph keyed by the opposite side.
    ///
    /// The result may have a different key set than the input. Reversal is
    /// its own inverse for graphs without empty entries.
    pub fn reverse(self) -> PairGraph<D::Opposite> {
        let mut reversed = PairGraph::new();
        for (key, values) in self.edges {
            for value in values {
                reversed.insert(value, key.clone());
            }
        }
        reversed
    }

    /// Per-key structural set difference.
    ///
    /// Every key of `self` survives; a key whose value set empties out is
    /// retained as an empty entry, which downstream callers must tolerate.
    pub fn difference(&self, exclude: &PairGraph<D>) -> PairGraph<D> {
        let mut filtered = PairGraph::new();
        for (key, values) in &self.edges {
            let excluded = exclude.edges.get(key);
            let kept = values
                .iter()
                .filter(|value| !excluded.is_some_and(|ex| ex.contains(*value)))
                .cloned()
                .collect();
            filtered.edges.insert(key.clone(), kept);
        }
        filtered
    }
}

impl<D: Indexing> Serialize for PairGraph<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.edges.serialize(serializer)
    }
}

impl<'de, D: Indexing> Deserialize<'de> for PairGraph<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let edges = BTreeMap::deserialize(deserializer)?;
        Ok(Self {
            edges,
            _direction: PhantomData,
        })
    }
}

// ─── ExchangeGraphs ──────────────────────────────────────────────────────────

/// Per-exchange pair graphs.
///
/// Keys compare case-insensitively while their verbatim spelling is kept for
/// serialization, so a graph stored under `"Kraken"` is found with
/// `"kraken"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExchangeGraphs<D: Indexing> {
    exchanges: BTreeMap<ExchangeId, PairGraph<D>>,
}

impl<D: Indexing> ExchangeGraphs<D> {
    pub fn new() -> Self {
        Self {
            exchanges: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, exchange: ExchangeId, graph: PairGraph<D>) {
        self.exchanges.insert(exchange, graph);
    }

    pub fn get(&self, exchange: &ExchangeId) -> Option<&PairGraph<D>> {
        self.exchanges.get(exchange)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ExchangeId, &PairGraph<D>)> {
        self.exchanges.iter()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Reverse every exchange's graph. Exchange keys are preserved verbatim.
    pub fn reverse_all(self) -> ExchangeGraphs<D::Opposite> {
        let mut reversed = ExchangeGraphs::new();
        for (exchange, graph) in self.exchanges {
            reversed.insert(exchange, graph.reverse());
        }
        reversed
    }
}

impl<D: Indexing> Serialize for ExchangeGraphs<D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.exchanges.serialize(serializer)
    }
}

impl<'de, D: Indexing> Deserialize<'de> for ExchangeGraphs<D> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let exchanges = BTreeMap::deserialize(deserializer)?;
        Ok(Self { exchanges })
    }
}
