//! Memoization for existence checks.
//!
//! One cache lives for one verification run and is owned by the
//! [`CheckSession`](crate::session::CheckSession). Entries are never
//! invalidated: the checks are read-only, so an answer stays valid for the
//! whole run.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

/// Keyed `bool` cache that runs each probe at most once per key.
#[derive(Debug)]
pub struct ExistenceCache<K> {
    entries: Mutex<HashMap<K, bool>>,
}

impl<K> Default for ExistenceCache<K> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash + Clone> ExistenceCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached answer for `key`, or run `probe` and remember it.
    ///
    /// The lock is held while probing so concurrent callers with the same key
    /// never issue a second probe. Errors are returned and not cached.
    pub fn get_or_probe<E>(
        &self,
        key: &K,
        probe: impl FnOnce() -> Result<bool, E>,
    ) -> Result<bool, E> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(&hit) = entries.get(key) {
            tracing::debug!("existence cache hit");
            return Ok(hit);
        }

        let answer = probe()?;
        entries.insert(key.clone(), answer);
        Ok(answer)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &K) -> Option<bool> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
