use mirage_cache::{
    Clock, ManualClock, SnapshotCache, SnapshotCacheConfig, SnapshotCacheConfigBuilder,
};
use std::sync::Arc;
use std::time::Duration;

fn cache_with(ttl_secs: u64) -> (SnapshotCache<Vec<String>, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = SnapshotCacheConfig::default().with_ttl_millis(ttl_secs * 1000);
    (SnapshotCache::with_clock(config, clock.clone()), clock)
}

#[test]
fn empty_cache_misses() {
    let (cache, _clock) = cache_with(60);
    assert!(cache.get().is_none());
    assert!(!cache.is_fresh());
    assert!(cache.time_remaining().is_none());
}

#[test]
fn value_is_served_until_ttl_elapses() {
    let (cache, clock) = cache_with(60);
    cache.store(vec!["a.jpg".to_string()]);

    clock.advance(Duration::from_secs(59));
    assert_eq!(cache.get(), Some(vec!["a.jpg".to_string()]));
    assert_eq!(cache.time_remaining(), Some(Duration::from_secs(1)));

    clock.advance(Duration::from_secs(1));
    assert!(cache.get().is_none());
    assert!(!cache.is_fresh());
}

#[test]
fn store_restarts_the_window() {
    let (cache, clock) = cache_with(10);
    cache.store(vec!["old.jpg".to_string()]);
    clock.advance(Duration::from_secs(8));
    cache.store(vec!["new.jpg".to_string()]);
    clock.advance(Duration::from_secs(8));

    assert_eq!(cache.get(), Some(vec!["new.jpg".to_string()]));
}

#[test]
fn zero_ttl_never_hits() {
    let clock = ManualClock::new();
    let config = SnapshotCacheConfigBuilder::default()
        .ttl_millis(0)
        .build()
        .expect("build cache config");
    let cache: SnapshotCache<u32, _> = SnapshotCache::with_clock(config, clock);
    cache.store(7);
    assert!(cache.get().is_none());
    assert!(!cache.is_fresh());
}

#[test]
fn sub_second_ttl_is_kept_exactly() {
    let clock = ManualClock::new();
    let cache = SnapshotCache::with_ttl(Duration::from_millis(1500), clock.clone());
    cache.store("listing");

    clock.advance(Duration::from_millis(1200));
    assert_eq!(cache.get(), Some("listing"));
    assert_eq!(cache.time_remaining(), Some(Duration::from_millis(300)));

    clock.advance(Duration::from_millis(300));
    assert!(cache.get().is_none());
}

#[test]
fn clones_of_manual_clock_share_time() {
    let clock = ManualClock::new();
    let other = clock.clone();
    let before = other.now();
    clock.advance(Duration::from_millis(250));
    assert_eq!(other.now() - before, Duration::from_millis(250));
}

#[test]
fn concurrent_stores_leave_one_winner() {
    let (cache, _clock) = cache_with(60);
    let cache = Arc::new(cache);
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || cache.store(vec![format!("{i}.jpg")]))
        })
        .collect();
    for handle in handles {
        handle.join().expect("join writer");
    }

    let value = cache.get().expect("cached value");
    assert_eq!(value.len(), 1);
}

#[test]
fn config_defaults() {
    let config = SnapshotCacheConfig::default();
    assert_eq!(*config.ttl_millis(), 60_000);
    assert_eq!(config.ttl(), Duration::from_secs(60));
}
