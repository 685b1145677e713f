//! Shared handler state.

use crate::MirageConfig;
use mirage_core::FeedConfig;
use mirage_error::MirageResult;
use mirage_storage::{
    BucketKeyLister, CachedKeyLister, HttpObjectFetcher, KeyLister, ObjectFetcher, S3Bucket,
};
use std::sync::Arc;
use std::time::Duration;

/// Collaborators every request handler needs.
#[derive(Clone)]
pub struct AppState {
    keys: Arc<dyn KeyLister>,
    objects: Arc<dyn ObjectFetcher>,
    feed: FeedConfig,
}

impl AppState {
    /// Assemble state from explicit collaborators.
    pub fn new(
        keys: Arc<dyn KeyLister>,
        objects: Arc<dyn ObjectFetcher>,
        feed: FeedConfig,
    ) -> Self {
        Self {
            keys,
            objects,
            feed,
        }
    }

    /// Wire the production collaborators: a cached S3 lister and an HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if bucket credentials are missing or the HTTP client
    /// cannot be built.
    pub fn from_config(config: &MirageConfig) -> MirageResult<Self> {
        let bucket = S3Bucket::from_config(config.bucket())?;
        let lister = CachedKeyLister::new(
            BucketKeyLister::new(bucket, config.bucket().timeout()),
            Duration::from_secs(*config.feed().key_cache_ttl_secs()),
        );
        let fetcher = HttpObjectFetcher::from_config(config.bucket())?;
        Ok(Self::new(
            Arc::new(lister),
            Arc::new(fetcher),
            config.feed().clone(),
        ))
    }

    /// Key source.
    pub fn keys(&self) -> &Arc<dyn KeyLister> {
        &self.keys
    }

    /// Object source.
    pub fn objects(&self) -> &Arc<dyn ObjectFetcher> {
        &self.objects
    }

    /// Feed settings.
    pub fn feed(&self) -> &FeedConfig {
        &self.feed
    }
}
