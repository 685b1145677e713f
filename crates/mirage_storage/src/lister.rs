//! Full-bucket key enumeration and its TTL cache.

use crate::BucketListing;
use mirage_cache::{Clock, SnapshotCache, SystemClock};
use mirage_error::{MirageResult, StorageError, StorageErrorKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Source of every displayable key in the bucket.
///
/// Keys come back in upstream listing order, which for S3 is lexicographic.
/// The feed shuffle depends on that order, so implementations must keep it
/// stable between calls.
#[async_trait::async_trait]
pub trait KeyLister: Send + Sync {
    /// All non-empty object keys.
    async fn list_keys(&self) -> MirageResult<Arc<Vec<String>>>;
}

/// Walks every listing page and drops zero-byte placeholder objects.
pub struct BucketKeyLister<B> {
    listing: B,
    timeout: Duration,
}

impl<B: BucketListing> BucketKeyLister<B> {
    /// Create a lister that gives up after `timeout` for the whole walk.
    pub fn new(listing: B, timeout: Duration) -> Self {
        Self { listing, timeout }
    }

    async fn walk(&self) -> MirageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut token: Option<String> = None;
        let mut pages: u64 = 0;

        loop {
            let page = self.listing.list_page(token.take()).await?;
            pages += 1;
            keys.extend(
                page.objects
                    .into_iter()
                    .filter(|object| object.size > 0)
                    .map(|object| object.key),
            );

            if !page.is_truncated {
                break;
            }
            match page.next_continuation_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        info!(keys = keys.len(), pages, "Listed bucket");
        Ok(keys)
    }
}

#[async_trait::async_trait]
impl<B: BucketListing> KeyLister for BucketKeyLister<B> {
    #[instrument(skip(self), fields(timeout = ?self.timeout))]
    async fn list_keys(&self) -> MirageResult<Arc<Vec<String>>> {
        let keys = tokio::time::timeout(self.timeout, self.walk())
            .await
            .map_err(|_| StorageError::new(StorageErrorKind::Timeout(self.timeout.as_secs())))??;
        Ok(Arc::new(keys))
    }
}

/// Serves one listing snapshot for a fixed TTL before asking upstream again.
///
/// Concurrent callers that all find the snapshot expired may each refresh;
/// whichever finishes last replaces the snapshot.
pub struct CachedKeyLister<L, C = SystemClock> {
    inner: L,
    cache: SnapshotCache<Arc<Vec<String>>, C>,
}

impl<L: KeyLister> CachedKeyLister<L, SystemClock> {
    /// Cache `inner` for `ttl` using the system clock.
    pub fn new(inner: L, ttl: Duration) -> Self {
        Self::with_clock(inner, ttl, SystemClock)
    }
}

impl<L: KeyLister, C: Clock> CachedKeyLister<L, C> {
    /// Cache `inner` for `ttl` using `clock`.
    pub fn with_clock(inner: L, ttl: Duration, clock: C) -> Self {
        Self {
            inner,
            cache: SnapshotCache::with_ttl(ttl, clock),
        }
    }

    /// Time until the current snapshot expires, if one is held.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.cache.time_remaining()
    }
}

#[async_trait::async_trait]
impl<L: KeyLister, C: Clock> KeyLister for CachedKeyLister<L, C> {
    async fn list_keys(&self) -> MirageResult<Arc<Vec<String>>> {
        if let Some(keys) = self.cache.get() {
            debug!(keys = keys.len(), "Serving cached key listing");
            return Ok(keys);
        }
        let keys = self.inner.list_keys().await?;
        self.cache.store(Arc::clone(&keys));
        Ok(keys)
    }
}

#[async_trait::async_trait]
impl<T: KeyLister + ?Sized> KeyLister for Arc<T> {
    async fn list_keys(&self) -> MirageResult<Arc<Vec<String>>> {
        (**self).list_keys().await
    }
}
