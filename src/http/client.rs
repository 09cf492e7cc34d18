//! Low-level HTTP client — `CryptoCompareHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the Layer 4 boundary). Internal to the SDK — Layer 4 wraps this.

use crate::domain::history::wire::HistoryResponse;
use crate::domain::pairs::wire::AllExchangesResponse;
use crate::domain::prices::wire::MultiPriceResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::{ALL_EXCHANGES_PATH, PRICE_MULTI_FULL_PATH};
use crate::shared::HistoryFunction;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing;

/// Low-level HTTP client for the CryptoCompare min-API.
pub struct CryptoCompareHttp {
    base_url: String,
    client: Client,
    /// API key sent as an `authorization` header. NEVER exposed publicly.
    api_key: Option<String>,
    /// Application name the upstream asks callers to identify with.
    app_name: Option<String>,
}

impl CryptoCompareHttp {
    pub fn new(base_url: &str, api_key: Option<String>, app_name: Option<String>) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            api_key,
            app_name,
        }
    }

    // ── Pairs ────────────────────────────────────────────────────────────

    /// The full pair universe: every exchange with its listed trading pairs,
    /// quote-indexed as the upstream serves them.
    pub async fn all_exchanges(&self) -> Result<AllExchangesResponse, HttpError> {
        let url = format!("{}/{}", self.base_url, ALL_EXCHANGES_PATH);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// Full price records for `fsyms` × `tsyms` on one exchange. Both symbol
    /// arguments are comma-joined lists.
    pub async fn price_multi_full(
        &self,
        fsyms: &str,
        tsyms: &str,
        exchange: &str,
    ) -> Result<MultiPriceResponse, HttpError> {
        let url = format!(
            "{}/{}?fsyms={}&tsyms={}&e={}",
            self.base_url,
            PRICE_MULTI_FULL_PATH,
            urlencoding::encode(fsyms),
            urlencoding::encode(tsyms),
            urlencoding::encode(exchange)
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── History ──────────────────────────────────────────────────────────

    /// OHLC history for one pair at the given granularity, `limit` candles
    /// back from now.
    pub async fn history(
        &self,
        function: HistoryFunction,
        fsym: &str,
        tsym: &str,
        limit: u32,
    ) -> Result<HistoryResponse, HttpError> {
        let url = format!(
            "{}/{}?fsym={}&tsym={}&limit={}",
            self.base_url,
            function.as_str(),
            urlencoding::encode(fsym),
            urlencoding::encode(tsym),
            limit
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        self.request_with_retry(url, retry).await
    }

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                let delay = Duration::from_millis(*ms);
                                futures_timer::Delay::new(delay).await;
                            }
                            true
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let url = match &self.app_name {
            Some(name) => {
                let sep = if url.contains('?') { '&' } else { '?' };
                format!("{}{}extraParams={}", url, sep, urlencoding::encode(name))
            }
            None => url.to_string(),
        };

        let mut req = self.client.get(&url);
        if let Some(key) = &self.api_key {
            req = req.header("authorization", format!("Apikey {}", key));
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for CryptoCompareHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            api_key: self.api_key.clone(),
            app_name: self.app_name.clone(),
        }
    }
}
