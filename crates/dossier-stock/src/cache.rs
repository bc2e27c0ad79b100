//! Response caching to keep repeated dossier runs inside API quotas.

use cached::{Cached, TimedCache};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Identifies one upstream request: which symbol, which endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey {
    pub symbol: String,
    pub endpoint: String,
}

impl CacheKey {
    pub fn new(symbol: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Thread-safe TTL cache over raw JSON responses.
pub struct ResponseCache {
    cache: Arc<RwLock<TimedCache<CacheKey, serde_json::Value>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<serde_json::Value> {
        let mut cache = self.cache.write().await;
        cache.cache_get(key).cloned()
    }

    pub async fn insert(&self, key: CacheKey, value: serde_json::Value) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(key, value);
    }

    /// Returns the cached value for `key`, or runs `fetcher` and caches
    /// its result.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: CacheKey,
        fetcher: F,
    ) -> Result<serde_json::Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<serde_json::Value, E>>,
    {
        if let Some(value) = self.get(&key).await {
            tracing::debug!("Cache hit for key: {:?}", key);
            return Ok(value);
        }

        tracing::debug!("Cache miss for key: {:?}", key);

        let value = fetcher().await?;
        self.insert(key, value.clone()).await;

        Ok(value)
    }

    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for ResponseCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

/// Two cache tiers: quotes move, annual statements barely do.
pub struct CacheManager {
    pub quote: ResponseCache,
    pub fundamental: ResponseCache,
}

impl CacheManager {
    pub fn new(quote_ttl: Duration, fundamental_ttl: Duration) -> Self {
        Self {
            quote: ResponseCache::new(quote_ttl),
            fundamental: ResponseCache::new(fundamental_ttl),
        }
    }

    pub async fn clear_all(&self) {
        self.quote.clear().await;
        self.fundamental.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let key = CacheKey::new("AAPL", "overview");
        let value = serde_json::json!({"Name": "Apple Inc"});

        cache.insert(key.clone(), value.clone()).await;

        assert_eq!(cache.get(&key).await, Some(value));
    }

    #[tokio::test]
    async fn test_get_or_fetch_skips_fetcher_on_hit() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        let key = CacheKey::new("AAPL", "overview");
        let value = serde_json::json!({"Name": "Apple Inc"});

        let mut call_count = 0;
        let result = cache
            .get_or_fetch(key.clone(), || {
                call_count += 1;
                async { Ok::<_, String>(value.clone()) }
            })
            .await
            .unwrap();
        assert_eq!(result, value);
        assert_eq!(call_count, 1);

        let result = cache
            .get_or_fetch(key.clone(), || async {
                call_count += 1;
                Ok::<_, String>(value.clone())
            })
            .await
            .unwrap();
        assert_eq!(result, value);
        assert_eq!(call_count, 1);
    }

    #[tokio::test]
    async fn test_keys_distinguish_endpoints() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache
            .insert(CacheKey::new("AAPL", "overview"), serde_json::json!(1))
            .await;

        assert!(cache.get(&CacheKey::new("AAPL", "income_statement")).await.is_none());
        assert!(cache.get(&CacheKey::new("MSFT", "overview")).await.is_none());
    }

    #[tokio::test]
    async fn test_manager_clear_all() {
        let manager = CacheManager::new(Duration::from_secs(60), Duration::from_secs(3600));

        let key = CacheKey::new("AAPL", "overview");
        manager.quote.insert(key.clone(), serde_json::json!(1)).await;
        manager.fundamental.insert(key, serde_json::json!(2)).await;

        manager.clear_all().await;

        assert!(manager.quote.is_empty().await);
        assert!(manager.fundamental.is_empty().await);
    }
}
