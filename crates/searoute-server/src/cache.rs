//! Age rules and bounds for the forecast cache.
//!
//! Entries younger than the TTL are served directly. Entries up to
//! [`STALE_FACTOR`] TTLs old are kept only as a fallback for failed fetches,
//! and anything older is evicted.

use dashmap::DashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// How many TTLs a forecast is retained for stale fallback.
pub const STALE_FACTOR: u32 = 2;

pub trait CacheEntry {
    fn fetched_at(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    Stale,
    Expired,
}

pub fn freshness(age: Duration, ttl: Duration) -> Freshness {
    if age <= ttl {
        Freshness::Fresh
    } else if age <= ttl.saturating_mul(STALE_FACTOR) {
        Freshness::Stale
    } else {
        Freshness::Expired
    }
}

/// Evict expired forecasts, then the oldest ones until at most
/// `max_entries` remain.
pub fn prune_cache<K, V>(cache: &DashMap<K, V>, max_entries: usize, ttl: Duration)
where
    K: Clone + Eq + Hash,
    V: CacheEntry,
{
    let now = Instant::now();
    let mut live: Vec<(K, Instant)> = Vec::with_capacity(cache.len());
    cache.retain(|key, entry| {
        let fetched_at = entry.fetched_at();
        let keep = freshness(now.saturating_duration_since(fetched_at), ttl) != Freshness::Expired;
        if keep {
            live.push((key.clone(), fetched_at));
        }
        keep
    });

    let excess = live.len().saturating_sub(max_entries);
    if excess == 0 {
        return;
    }
    live.sort_by_key(|(_, fetched_at)| *fetched_at);
    for (key, _) in live.into_iter().take(excess) {
        cache.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(900);

    struct Forecast(Instant);

    impl CacheEntry for Forecast {
        fn fetched_at(&self) -> Instant {
            self.0
        }
    }

    #[test]
    fn freshness_windows() {
        assert_eq!(freshness(Duration::from_secs(60), TTL), Freshness::Fresh);
        assert_eq!(freshness(TTL, TTL), Freshness::Fresh);
        assert_eq!(freshness(Duration::from_secs(1200), TTL), Freshness::Stale);
        assert_eq!(freshness(Duration::from_secs(1801), TTL), Freshness::Expired);
    }

    #[test]
    fn capacity_evicts_oldest_forecasts() {
        let cache = DashMap::new();
        let base = Instant::now();
        for hour in 0..5u64 {
            cache.insert(format!("10.00:60.00:{hour}"), Forecast(base + Duration::from_millis(hour)));
        }

        prune_cache(&cache, 3, TTL);
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key("10.00:60.00:0"));
        assert!(!cache.contains_key("10.00:60.00:1"));
        assert!(cache.contains_key("10.00:60.00:4"));
    }

    #[test]
    fn stale_forecasts_survive_until_expired() {
        let ttl = Duration::from_secs(10);
        let cache = DashMap::new();
        let now = Instant::now();
        cache.insert("stale", Forecast(now - Duration::from_secs(15)));
        cache.insert("expired", Forecast(now - Duration::from_secs(25)));
        cache.insert("fresh", Forecast(now));

        prune_cache(&cache, 10, ttl);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains_key("stale"));
        assert!(!cache.contains_key("expired"));
    }
}
