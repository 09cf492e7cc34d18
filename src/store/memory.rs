//! In-memory blacklist store.

use super::BlacklistStore;
use crate::error::StoreError;
use crate::shared::ExchangeId;
use async_lock::RwLock;
use async_trait::async_trait;
use std::collections::HashMap;

/// `BlacklistStore` backed by a process-local map.
///
/// The default store for clients built without one, and the store embedders
/// without a database can start from.
#[derive(Debug, Default)]
pub struct MemoryBlacklistStore {
    entries: RwLock<HashMap<ExchangeId, String>>,
}

impl MemoryBlacklistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlacklistStore for MemoryBlacklistStore {
    async fn get(&self, exchange: &ExchangeId) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(exchange).cloned())
    }

    async fn put(&self, exchange: &ExchangeId, blob: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(exchange.clone(), blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_entry_is_none() {
        let store = MemoryBlacklistStore::new();
        let got = store.get(&ExchangeId::from("Kraken")).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryBlacklistStore::new();
        let exchange = ExchangeId::from("Kraken");
        store.put(&exchange, "{}".to_string()).await.unwrap();
        assert_eq!(store.get(&exchange).await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryBlacklistStore::new();
        let exchange = ExchangeId::from("Kraken");
        store.put(&exchange, "old".to_string()).await.unwrap();
        store.put(&exchange, "new".to_string()).await.unwrap();
        assert_eq!(store.get(&exchange).await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_keys_compare_case_insensitively() {
        let store = MemoryBlacklistStore::new();
        store
            .put(&ExchangeId::from("Kraken"), "blob".to_string())
            .await
            .unwrap();
        let got = store.get(&ExchangeId::from("kraken")).await.unwrap();
        assert_eq!(got.as_deref(), Some("blob"));
    }
}
