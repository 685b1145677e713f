//! Snapshot caching with TTL support.
//!
//! This crate caches one expensive value (such as a full bucket listing) for a
//! fixed time window. Time comes from an injected [`Clock`] so expiry can be
//! driven deterministically in tests.

#![warn(missing_docs)]

mod cache;
mod clock;

pub use cache::{CacheEntry, SnapshotCache, SnapshotCacheConfig, SnapshotCacheConfigBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
