//! TTL memoization for slow-changing facet collections.
//!
//! One mutable slot per facet kind, replaced wholesale on refresh. The
//! read-write lock makes the overwrite an atomic value replacement;
//! concurrent forced refreshes may both scrape and the last writer wins,
//! which at worst costs a redundant upstream fetch.

use std::future::Future;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Default freshness window for cached facets.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A single-slot cache for one facet collection.
pub struct FacetCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(T, Instant)>>,
}

impl<T: Clone> FacetCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    /// Return the cached value when fresh, else run `scrape` and cache its
    /// result. The boolean reports whether the value came from the cache.
    ///
    /// An empty scrape result is cached like any other value; there is no
    /// negative caching.
    pub async fn get<F, Fut>(&self, force_refresh: bool, scrape: F) -> (T, bool)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if !force_refresh {
            let slot = self.slot.read().await;
            if let Some((value, captured_at)) = slot.as_ref() {
                if captured_at.elapsed() < self.ttl {
                    return (value.clone(), true);
                }
            }
        }

        let value = scrape().await;
        *self.slot.write().await = Some((value.clone(), Instant::now()));
        (value, false)
    }
}

impl<T: Clone> Default for FacetCache<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
