//! Conversion: AllExchangesResponse → ExchangeGraphs (quote-indexed).

use super::wire::AllExchangesResponse;
use super::{ExchangeGraphs, PairGraph, QuoteIndexed};
use crate::shared::{ExchangeId, Symbol};

impl From<AllExchangesResponse> for ExchangeGraphs<QuoteIndexed> {
    fn from(source: AllExchangesResponse) -> Self {
        let mut graphs = ExchangeGraphs::new();
        for (exchange, pairs) in source.0 {
            let mut graph = PairGraph::new();
            for (quote, bases) in pairs {
                let quote = Symbol::from(quote);
                for base in bases {
                    graph.insert(quote.clone(), Symbol::from(base));
                }
            }
            graphs.insert(ExchangeId::from(exchange), graph);
        }
        graphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe_json() -> &'static str {
        r#"{
            "Kraken": {"USD": ["BTC", "ETH"], "EUR": ["BTC"]},
            "Bitfinex": {"usd": ["btc"]}
        }"#
    }

    #[test]
    fn test_universe_converts_quote_indexed() {
        let resp: AllExchangesResponse = serde_json::from_str(universe_json()).unwrap();
        let universe: ExchangeGraphs<QuoteIndexed> = resp.into();

        let kraken = universe.get(&ExchangeId::from("Kraken")).unwrap();
        assert!(kraken.contains(&Symbol::from("USD"), &Symbol::from("BTC")));
        assert!(kraken.contains(&Symbol::from("USD"), &Symbol::from("ETH")));
        assert!(kraken.contains(&Symbol::from("EUR"), &Symbol::from("BTC")));
    }

    #[test]
    fn test_universe_normalizes_symbol_case() {
        let resp: AllExchangesResponse = serde_json::from_str(universe_json()).unwrap();
        let universe: ExchangeGraphs<QuoteIndexed> = resp.into();

        let bitfinex = universe.get(&ExchangeId::from("Bitfinex")).unwrap();
        assert!(bitfinex.contains(&Symbol::from("USD"), &Symbol::from("BTC")));
    }

    #[test]
    fn test_universe_reversed_is_base_indexed() {
        let resp: AllExchangesResponse = serde_json::from_str(universe_json()).unwrap();
        let universe: ExchangeGraphs<QuoteIndexed> = resp.into();
        let by_base = universe.reverse_all();

        let kraken = by_base.get(&ExchangeId::from("kraken")).unwrap();
        assert!(kraken.contains(&Symbol::from("BTC"), &Symbol::from("USD")));
        assert!(kraken.contains(&Symbol::from("BTC"), &Symbol::from("EUR")));
        assert!(kraken.contains(&Symbol::from("ETH"), &Symbol::from("USD")));
    }
}
