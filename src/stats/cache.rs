//! Bounded memoization cache
//!
//! Keeps hot results without letting repeated varied queries grow memory
//! without bound. Once the capacity is reached, inserts of new keys are
//! refused; callers never depend on an insert landing.

use ahash::AHashMap;
use std::hash::Hash;

/// Capacity-bounded memoization map
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    entries: AHashMap<K, V>,
    capacity: usize,
}

impl<K: Eq + Hash, V: Copy> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: AHashMap::new(),
            capacity,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).copied()
    }

    /// Store a value unless the capacity bound has been reached.
    /// Overwriting a key that is already present is always allowed.
    /// Returns whether the value was stored.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            tracing::trace!(
                "bounded cache at capacity ({} entries), refusing insert",
                self.capacity
            );
            return false;
        }

        self.entries.insert(key, value);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
