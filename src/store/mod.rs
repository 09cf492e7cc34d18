//! Blacklist persistence — the store trait and reference implementation.

pub mod memory;

pub use memory::MemoryBlacklistStore;

use crate::error::StoreError;
use crate::shared::ExchangeId;
use async_trait::async_trait;

/// Persistence collaborator for serialized blacklists, keyed by exchange.
///
/// The blob is opaque to the store. Entries are overwritten, never deleted;
/// a missing entry means staleness gets recomputed, not that the exchange is
/// clean.
#[async_trait]
pub trait BlacklistStore: Send + Sync {
    /// The most recently persisted blob for the exchange, if any.
    async fn get(&self, exchange: &ExchangeId) -> Result<Option<String>, StoreError>;

    /// Persist or overwrite the exchange's blob.
    async fn put(&self, exchange: &ExchangeId, blob: String) -> Result<(), StoreError>;
}
