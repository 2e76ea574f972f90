//! Lock-guarded counter table.
//!
//! One mutex per table: operations on the same table are linearizable,
//! operations on different tables run in parallel. `reset_all` zeroes every
//! entry under a single critical section; `copy_into` is a best-effort
//! point-in-time copy, not snapshot isolation.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Concurrency-safe mapping from a small key to a signed 64-bit counter.
///
/// Entries are created implicitly on first write. A poisoned lock is
/// absorbed rather than propagated: counters must never panic or fail in
/// the message hot path.
#[derive(Debug)]
pub struct CounterMap<K> {
    inner: Mutex<HashMap<K, i64>>,
}

impl<K> Default for CounterMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> CounterMap<K> {
    /// New empty table.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    fn table(&self) -> MutexGuard<'_, HashMap<K, i64>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Copy + Eq + Hash> CounterMap<K> {
    /// Atomically add 1 to the value at `key`, creating it at 0 first if
    /// absent (fresh key reads back as 1).
    pub fn inc(&self, key: K) {
        *self.table().entry(key).or_insert(0) += 1;
    }

    /// Atomically subtract 1 from the value at `key`, creating it at 0 first
    /// if absent (fresh key reads back as -1). Negative values are valid
    /// observable state, not an error.
    pub fn dec(&self, key: K) {
        *self.table().entry(key).or_insert(0) -= 1;
    }

    /// Atomically overwrite the value at `key`, creating the entry if absent.
    pub fn set(&self, key: K, value: i64) {
        self.table().insert(key, value);
    }

    /// Current value for `key`, or 0 if the key has never been written.
    pub fn get(&self, key: K) -> i64 {
        self.table().get(&key).copied().unwrap_or(0)
    }

    /// Keys currently present, as a snapshot at call time. No ordering
    /// guarantee; consistent only for the duration of this call, not atomic
    /// with any subsequent `get`.
    pub fn keys(&self) -> Vec<K> {
        self.table().keys().copied().collect()
    }

    /// Copy every key/value pair present at iteration time into `dst`.
    /// Individual key copies interleave with concurrent writers on either
    /// table.
    pub fn copy_into(&self, dst: &CounterMap<K>) {
        for key in self.keys() {
            dst.set(key, self.get(key));
        }
    }

    /// Set every existing key's value to 0 under one critical section.
    /// Keys are retained, not removed.
    pub fn reset_all(&self) {
        let mut table = self.table();
        for value in table.values_mut() {
            *value = 0;
        }
    }
}
