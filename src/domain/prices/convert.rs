//! Conversion: RawPairPrice → PriceRecord (boundary validation).

use super::wire::RawPairPrice;
use super::{PriceRecord, PricedGraph};
use crate::error::DataError;
use crate::shared::Symbol;
use std::collections::BTreeMap;

impl TryFrom<(&Symbol, &Symbol, RawPairPrice)> for PriceRecord {
    type Error = DataError;

    fn try_from((base, quote, raw): (&Symbol, &Symbol, RawPairPrice)) -> Result<Self, Self::Error> {
        let last_update = raw.last_update.ok_or_else(|| DataError::MissingLastUpdate {
            base: base.to_string(),
            quote: quote.to_string(),
        })?;

        Ok(PriceRecord {
            last_update,
            price: raw.price,
            last_volume: raw.last_volume,
            last_volume_to: raw.last_volume_to,
            volume24_hour: raw.volume24_hour,
            volume24_hour_to: raw.volume24_hour_to,
            open24_hour: raw.open24_hour,
            high24_hour: raw.high24_hour,
            low24_hour: raw.low24_hour,
            change24_hour: raw.change24_hour,
            change_pct24_hour: raw.change_pct24_hour,
            market: raw.market,
            last_market: raw.last_market,
        })
    }
}

/// Validate and type a whole `RAW` payload into a priced graph.
pub(crate) fn priced_graph(
    raw: BTreeMap<String, BTreeMap<String, RawPairPrice>>,
) -> Result<PricedGraph, DataError> {
    let mut graph = PricedGraph::new();
    for (base, quotes) in raw {
        let base = Symbol::from(base);
        for (quote, record) in quotes {
            let quote = Symbol::from(quote);
            let record = PriceRecord::try_from((&base, &quote, record))?;
            graph.insert(base.clone(), quote, record);
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_raw_price(last_update: Option<i64>) -> RawPairPrice {
        RawPairPrice {
            last_update,
            price: 1082.13,
            last_volume: 2.3,
            last_volume_to: 2496.5,
            volume24_hour: 72040.6,
            volume24_hour_to: 75043516.0,
            open24_hour: 1020.95,
            high24_hour: 1097.54,
            low24_hour: 980.0,
            change24_hour: 61.18,
            change_pct24_hour: 5.99,
            market: Some("Kraken".to_string()),
            last_market: None,
        }
    }

    #[test]
    fn test_record_converts_with_last_update() {
        let base = Symbol::from("BTC");
        let quote = Symbol::from("USD");
        let record =
            PriceRecord::try_from((&base, &quote, minimal_raw_price(Some(1483529467)))).unwrap();
        assert_eq!(record.last_update, 1483529467);
        assert_eq!(record.price, 1082.13);
        assert_eq!(record.market.as_deref(), Some("Kraken"));
    }

    #[test]
    fn test_record_missing_last_update_fails() {
        let base = Symbol::from("BTC");
        let quote = Symbol::from("USD");
        let err = PriceRecord::try_from((&base, &quote, minimal_raw_price(None))).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingLastUpdate { ref base, ref quote } if base == "BTC" && quote == "USD"
        ));
    }

    #[test]
    fn test_priced_graph_types_whole_payload() {
        let mut quotes = BTreeMap::new();
        quotes.insert("usd".to_string(), minimal_raw_price(Some(100)));
        let mut raw = BTreeMap::new();
        raw.insert("btc".to_string(), quotes);

        let graph = priced_graph(raw).unwrap();
        let record = graph.get(&Symbol::from("BTC"), &Symbol::from("USD")).unwrap();
        assert_eq!(record.last_update, 100);
    }

    #[test]
    fn test_priced_graph_fails_on_first_malformed_record() {
        let mut quotes = BTreeMap::new();
        quotes.insert("USD".to_string(), minimal_raw_price(None));
        let mut raw = BTreeMap::new();
        raw.insert("BTC".to_string(), quotes);

        assert!(priced_graph(raw).is_err());
    }
}
