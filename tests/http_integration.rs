//! Integration tests against the live min-API.
//!
//! All tests are `#[ignore]` because they require network access. The
//! reconciliation test fans out one price request per base symbol listed on
//! the target exchange, so run it with an API key to stay inside rate limits.
//!
//! Set `CRYPTOCOMPARE_API_KEY` (directly or via `.env`) to authenticate.
//!
//! Run with:
//! ```bash
//! cargo test --test http_integration -- --ignored
//! ```

use cryptocompare_sdk::prelude::*;

const TEST_EXCHANGE: &str = "Kraken";

fn live_client() -> CryptoCompareClient {
    dotenvy::dotenv().ok();

    let mut builder = CryptoCompareClient::builder().app_name("cryptocompare-sdk-tests");
    if let Ok(key) = std::env::var("CRYPTOCOMPARE_API_KEY") {
        builder = builder.api_key(&key);
    }
    builder.build().expect("live client should build")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_pair_universe_is_non_empty() {
    let client = live_client();
    let universe = client.pairs().all().await.expect("universe fetch");

    assert!(!universe.is_empty());
    let kraken = universe
        .get(&ExchangeId::from(TEST_EXCHANGE))
        .expect("a major exchange should be listed");
    assert!(!kraken.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_fresh_pair_survives_filtering() {
    let client = live_client();

    let mut requested = PairGraph::new();
    requested.insert(Symbol::from("BTC"), Symbol::from("USD"));

    let tradable = client
        .blacklist()
        .filter_requested(&requested, &ExchangeId::from(TEST_EXCHANGE))
        .await
        .expect("filtering should succeed");

    // BTC/USD trades continuously; it must never be blacklisted.
    assert!(tradable.contains(&Symbol::from("BTC"), &Symbol::from("USD")));
}

#[tokio::test]
#[ignore]
async fn test_day_chart_is_downsampled_and_ordered() {
    let client = live_client();

    let chart = client
        .history()
        .chart(&Symbol::from("BTC"), &Symbol::from("USD"), HistoryPeriod::Day)
        .await
        .expect("chart fetch");

    assert!(!chart.is_empty());
    // 24 hourly samples into 12 columns: at most 13 survive the stride.
    assert!(chart.len() <= 13, "got {} points", chart.len());
    assert!(chart.windows(2).all(|w| w[0].time < w[1].time));
    assert!(chart.iter().all(|p| p.price.is_finite()));
}

#[tokio::test]
#[ignore]
async fn test_chart_for_unknown_symbol_is_a_data_error() {
    let client = live_client();

    let result = client
        .history()
        .chart(
            &Symbol::from("ZZZZZZZZ"),
            &Symbol::from("USD"),
            HistoryPeriod::Week,
        )
        .await;

    assert!(matches!(result, Err(SdkError::Data(DataError::BadEnvelope { .. }))));
}
