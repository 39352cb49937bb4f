// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded TTL cache with an injected clock.
//!
//! Owned by the orchestrator, never a module-level singleton: the clock is a
//! trait so tests drive expiry manually, and capacity is bounded so session
//! state can never grow without limit.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of monotonic time. Injected so expiry is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A manually advanced clock for tests.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Advance the clock by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut offset = self.offset.lock().expect("clock lock poisoned");
        *offset += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + *self.offset.lock().expect("clock lock poisoned")
    }
}

/// A bounded map whose entries expire after a fixed TTL.
///
/// When full, inserting a new key evicts the oldest-inserted entry. Reads
/// of expired entries remove them.
pub struct TtlCache<K, V> {
    capacity: usize,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: HashMap<K, (V, Instant)>,
}

impl<K: Eq + Hash + Clone, V: Clone> TtlCache<K, V> {
    /// Create a cache with the given bounds. `capacity` must be non-zero
    /// (enforced by config validation upstream).
    pub fn new(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            capacity,
            ttl,
            clock,
            entries: HashMap::with_capacity(capacity.min(64)),
        }
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: K, value: V) {
        let now = self.clock.now();
        self.entries
            .retain(|_, (_, inserted)| now.duration_since(*inserted) < self.ttl);

        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            // Evict the oldest-inserted entry to stay within bounds.
            if let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, (_, inserted))| *inserted)
                .map(|(k, _)| k.clone())
            {
                self.entries.remove(&oldest);
            }
        }
        self.entries.insert(key, (value, now));
    }

    /// Look up a value; expired entries are removed and return `None`.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some((value, inserted)) if now.duration_since(*inserted) < self.ttl => {
                Some(value.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Remove a key outright.
    pub fn remove(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Number of live entries (including not-yet-collected expired ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_with_manual_clock(
        capacity: usize,
        ttl_secs: u64,
    ) -> (TtlCache<String, u32>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::new(
            capacity,
            Duration::from_secs(ttl_secs),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        (cache, clock)
    }

    #[test]
    fn get_returns_inserted_value() {
        let (mut cache, _clock) = cache_with_manual_clock(4, 60);
        cache.insert("a".into(), 1);
        assert_eq!(cache.get(&"a".into()), Some(1));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let (mut cache, clock) = cache_with_manual_clock(4, 60);
        cache.insert("a".into(), 1);
        clock.advance(Duration::from_secs(59));
        assert_eq!(cache.get(&"a".into()), Some(1));
        clock.advance(Duration::from_secs(2));
        assert_eq!(cache.get(&"a".into()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_evicts_oldest_inserted() {
        let (mut cache, clock) = cache_with_manual_clock(2, 600);
        cache.insert("a".into(), 1);
        clock.advance(Duration::from_secs(1));
        cache.insert("b".into(), 2);
        clock.advance(Duration::from_secs(1));
        cache.insert("c".into(), 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".into()), None);
        assert_eq!(cache.get(&"b".into()), Some(2));
        assert_eq!(cache.get(&"c".into()), Some(3));
    }

    #[test]
    fn reinserting_existing_key_does_not_evict() {
        let (mut cache, _clock) = cache_with_manual_clock(2, 600);
        cache.insert("a".into(), 1);
        cache.insert("b".into(), 2);
        cache.insert("a".into(), 10);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".into()), Some(10));
        assert_eq!(cache.get(&"b".into()), Some(2));
    }

    #[test]
    fn expired_entries_are_purged_on_insert() {
        let (mut cache, clock) = cache_with_manual_clock(8, 10);
        cache.insert("a".into(), 1);
        cache.insert("b".into(), 2);
        clock.advance(Duration::from_secs(11));
        cache.insert("c".into(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn remove_discards_entry() {
        let (mut cache, _clock) = cache_with_manual_clock(4, 60);
        cache.insert("a".into(), 1);
        cache.remove(&"a".into());
        assert_eq!(cache.get(&"a".into()), None);
    }
}
