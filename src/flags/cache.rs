use std::collections::HashMap;
use std::time::{Duration, Instant};

// injected into the flag service so tests can drive expiry deterministically
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[derive(Clone, Copy)]
struct CachedFlag {
    value: bool,
    stored_at: Instant,
}

/// Bounded-staleness store for evaluated flags, keyed by flag name.
///
/// Expiry is checked on read: an entry older than the TTL is treated as
/// absent and will be overwritten by the next evaluation. Writes are plain
/// last-writer-wins overwrites of independent keys.
pub struct FlagCache {
    entries: HashMap<String, CachedFlag>,
    ttl: Duration,
}

impl FlagCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str, now: Instant) -> Option<bool> {
        let entry = self.entries.get(key)?;
        if now.duration_since(entry.stored_at) < self.ttl {
            Some(entry.value)
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: &str, value: bool, now: Instant) {
        self.entries
            .insert(key.to_string(), CachedFlag { value, stored_at: now });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // live values only; expired entries are left out
    pub fn snapshot(&self, now: Instant) -> HashMap<String, bool> {
        self.entries
            .iter()
            .filter(|(_, entry)| now.duration_since(entry.stored_at) < self.ttl)
            .map(|(key, entry)| (key.clone(), entry.value))
            .collect()
    }
}
