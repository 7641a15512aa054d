use crate::flags::cache::{Clock, FlagCache};
use crate::flags::provider::FlagProvider;
use crate::flags::{default_value, VISITOR_ID};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Decides whether optional content renders, per named flag.
///
/// Wraps the remote provider with a TTL cache and a guaranteed fallback:
/// this service always answers, and a broken provider degrades to the
/// hardcoded defaults rather than an error.
pub struct FlagService {
    provider: Box<dyn FlagProvider>,
    clock: Box<dyn Clock>,
    cache: RwLock<FlagCache>,
}

impl FlagService {
    pub fn new(provider: Box<dyn FlagProvider>, clock: Box<dyn Clock>, ttl: Duration) -> Self {
        Self {
            provider,
            clock,
            cache: RwLock::new(FlagCache::new(ttl)),
        }
    }

    pub async fn evaluate_flag(&self, key: &str) -> bool {
        // cache hit: answer without touching the provider
        {
            let cache = self.cache.read().await;
            if let Some(value) = cache.get(key, self.clock.now()) {
                debug!("flag {key}: {value} (cached)");
                return value;
            }
        }

        // cache miss: ask the provider. concurrent misses on the same key
        // may each land here; the insert is an idempotent overwrite, so the
        // last writer wins and nobody has to coordinate
        match self.provider.evaluate(key, VISITOR_ID).await {
            Ok(value) => {
                let mut cache = self.cache.write().await;
                cache.insert(key, value, self.clock.now());
                debug!("flag {key}: {value}");
                value
            }
            Err(e) => {
                let fallback = default_value(key);
                warn!("Flag provider failed for {key}: {e:#}. Serving default {fallback}.");

                // the fallback is cached under the same TTL, so a broken
                // provider isn't retried until the window lapses
                let mut cache = self.cache.write().await;
                cache.insert(key, fallback, self.clock.now());
                fallback
            }
        }
    }

    // debugging surface: everything currently live in the cache
    pub async fn cached_flags(&self) -> HashMap<String, bool> {
        self.cache.read().await.snapshot(self.clock.now())
    }

    // test isolation utility
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }
}
