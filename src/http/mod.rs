//! HTTP client layer — `CryptoCompareHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::CryptoCompareHttp;
pub use retry::{RetryConfig, RetryPolicy};
