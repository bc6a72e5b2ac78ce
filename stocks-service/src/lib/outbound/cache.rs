use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::de::IgnoredAny;

use crate::quotes::errors::QuoteError;
use crate::quotes::models::Quote;
use crate::quotes::ports::QuoteGateway;

/// Default time-to-live for cached quotes, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 10;

/// Minimal key/value surface the quote cache needs from its backing store.
///
/// Implemented by the Redis connection manager; tests substitute their own.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, QuoteError>;

    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<(), QuoteError>;
}

#[async_trait]
impl CacheStore for ConnectionManager {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, QuoteError> {
        let mut connection = self.clone();
        AsyncCommands::get(&mut connection, key)
            .await
            .map_err(|e| QuoteError::Cache(e.to_string()))
    }

    async fn set_ex(&self, key: &str, value: Vec<u8>, ttl_secs: u64) -> Result<(), QuoteError> {
        let mut connection = self.clone();
        AsyncCommands::set_ex(&mut connection, key, value, ttl_secs)
            .await
            .map_err(|e| QuoteError::Cache(e.to_string()))
    }
}

/// Read-through cache in front of a quote gateway.
///
/// A cache failure is never a request failure: on any store error the call
/// degrades to a direct upstream fetch with a warning. Eviction is left to
/// the store via the per-key TTL. Cached entries are the verbatim upstream
/// bytes, never a re-serialization.
pub struct CachedQuoteGateway<G, S = ConnectionManager>
where
    G: QuoteGateway,
    S: CacheStore,
{
    inner: G,
    store: S,
    ttl_secs: u64,
}

impl<G, S> CachedQuoteGateway<G, S>
where
    G: QuoteGateway,
    S: CacheStore,
{
    pub fn new(inner: G, store: S) -> Self {
        Self {
            inner,
            store,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }

    pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    fn cache_key(symbol: &str) -> String {
        format!("quote:{}", symbol)
    }
}

#[async_trait]
impl<G, S> QuoteGateway for CachedQuoteGateway<G, S>
where
    G: QuoteGateway,
    S: CacheStore,
{
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let key = Self::cache_key(symbol);

        match self.store.get(&key).await {
            Ok(Some(cached)) => {
                if serde_json::from_slice::<IgnoredAny>(&cached).is_ok() {
                    tracing::debug!(symbol, "Quote served from cache");
                    return Ok(Quote::new(symbol, cached));
                }
                // Unreadable entry, treat as a miss and overwrite below
                tracing::warn!(symbol, "Discarding corrupt cache entry");
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(symbol, error = %e, "Quote cache read failed");
            }
        }

        let quote = self.inner.fetch_quote(symbol).await?;

        if let Err(e) = self
            .store
            .set_ex(&key, quote.body.clone(), self.ttl_secs)
            .await
        {
            tracing::warn!(symbol, error = %e, "Quote cache write failed");
        }

        Ok(quote)
    }
}
