//! Stale-pair detection over fetched price sets.

use crate::domain::pairs::{BaseIndexed, ExchangeGraphs, PairGraph};
use crate::domain::prices::ExchangePrices;

/// Collect the pairs whose last update sits at or beyond the staleness
/// cutoff.
///
/// A pair is stale iff `last_update <= now_epoch - threshold_secs`. Every
/// exchange present in `prices` appears in the output, with an empty graph
/// when none of its pairs are stale, so the key set is stable regardless of
/// what was found.
pub fn find_stale(
    prices: &ExchangePrices,
    now_epoch: i64,
    threshold_secs: i64,
) -> ExchangeGraphs<BaseIndexed> {
    let cutoff = now_epoch - threshold_secs;
    let mut stale = ExchangeGraphs::new();

    for (exchange, graph) in prices.iter() {
        let mut stale_graph = PairGraph::new();
        for (base, quotes) in graph.iter() {
            for (quote, record) in quotes {
                if record.last_update <= cutoff {
                    stale_graph.insert(base.clone(), quote.clone());
                }
            }
        }
        stale.insert(exchange.clone(), stale_graph);
    }

    stale
}
