//! Single-slot snapshot cache.

use crate::{Clock, SystemClock};
use derive_getters::Getters;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Cached value with the instant it was stored.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry<T> {
    value: T,
    created_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    /// Whether this entry is no longer fresh at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    /// Time left before expiry at `now`.
    pub fn time_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.ttl
            .checked_sub(now.saturating_duration_since(self.created_at))
            .filter(|remaining| !remaining.is_zero())
    }
}

/// Configuration for a snapshot cache.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct SnapshotCacheConfig {
    /// How long a stored value stays fresh (milliseconds); zero disables caching
    #[serde(default = "default_ttl_millis")]
    ttl_millis: u64,
}

fn default_ttl_millis() -> u64 {
    60_000
}

impl Default for SnapshotCacheConfig {
    fn default() -> Self {
        Self {
            ttl_millis: default_ttl_millis(),
        }
    }
}

impl SnapshotCacheConfig {
    /// TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_millis)
    }
}

/// Cache holding one value for a fixed TTL.
///
/// Entries are only ever invalidated by time. Reads share a lock; when two
/// callers race to refresh an expired entry, the last [`store`](Self::store)
/// wins.
///
/// # Example
///
/// ```
/// use mirage_cache::{ManualClock, SnapshotCache, SnapshotCacheConfig};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let cache = SnapshotCache::with_clock(SnapshotCacheConfig::default(), clock.clone());
///
/// cache.store(vec!["a.jpg".to_string()]);
/// assert!(cache.get().is_some());
///
/// clock.advance(Duration::from_secs(60));
/// assert!(cache.get().is_none());
/// ```
pub struct SnapshotCache<T, C = SystemClock> {
    ttl: Duration,
    clock: C,
    slot: RwLock<Option<CacheEntry<T>>>,
}

impl<T: Clone> SnapshotCache<T, SystemClock> {
    /// Create a cache driven by the system clock.
    pub fn new(config: SnapshotCacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<T: Clone, C: Clock> SnapshotCache<T, C> {
    /// Create a cache driven by `clock`.
    pub fn with_clock(config: SnapshotCacheConfig, clock: C) -> Self {
        Self::with_ttl(config.ttl(), clock)
    }

    /// Create a cache with an exact `ttl`, driven by `clock`.
    ///
    /// A zero `ttl` stores nothing.
    pub fn with_ttl(ttl: Duration, clock: C) -> Self {
        tracing::debug!(?ttl, "Creating new SnapshotCache");
        Self {
            ttl,
            clock,
            slot: RwLock::new(None),
        }
    }

    /// Configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value, if one is stored and still fresh.
    pub fn get(&self) -> Option<T> {
        let now = self.clock.now();
        let slot = self.slot.read();
        let entry = slot.as_ref()?;
        if entry.is_expired_at(now) {
            tracing::debug!("Snapshot expired");
            return None;
        }
        tracing::trace!(time_remaining = ?entry.time_remaining_at(now), "Snapshot hit");
        Some(entry.value.clone())
    }

    /// Replace the cached value; its TTL starts now.
    pub fn store(&self, value: T) {
        if self.ttl.is_zero() {
            tracing::debug!("Zero TTL, skipping store");
            return;
        }
        let entry = CacheEntry {
            value,
            created_at: self.clock.now(),
            ttl: self.ttl,
        };
        *self.slot.write() = Some(entry);
        tracing::debug!(ttl = ?self.ttl, "Stored snapshot");
    }

    /// Time left before the current value expires.
    pub fn time_remaining(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.slot
            .read()
            .as_ref()
            .and_then(|entry| entry.time_remaining_at(now))
    }

    /// Whether a fresh value is stored.
    pub fn is_fresh(&self) -> bool {
        self.time_remaining().is_some()
    }
}
