//! In-process expiring key-value store.
//!
//! This is the development/test backend: a `HashMap` behind a mutex, with
//! a deadline per entry. It implements the same contract a remote store
//! would — absent-vs-error, TTL refresh on every write, atomic
//! compare-and-swap — so code exercised against it behaves identically
//! against a real backend.
//!
//! Expiry is lazy: nothing sweeps the map in the background. An entry
//! past its deadline is evicted the next time any operation touches its
//! key, which is indistinguishable from eager expiry to callers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::{SessionStore, StoreError};

/// One stored value and the instant it stops existing.
#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn new(value: &[u8], ttl: Duration) -> Self {
        Self {
            value: value.to_vec(),
            expires_at: Instant::now() + ttl,
        }
    }

    /// An entry written with a zero TTL is expired immediately.
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// An in-process [`SessionStore`] backed by a shared map.
///
/// Cloning a `MemoryStore` clones the *handle*, not the data — all clones
/// see the same entries. This mirrors how a real backend client works:
/// one connection created at startup, handles passed around by value.
///
/// ## Example
///
/// ```rust
/// use std::time::Duration;
/// use nameplate_store::{MemoryStore, SessionStore};
///
/// # async fn demo() {
/// let store = MemoryStore::new();
/// store.set("k", b"v", Duration::from_secs(60)).await.unwrap();
/// assert_eq!(store.get("k").await.unwrap(), Some(b"v".to_vec()));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live entries, evicting expired ones first.
    ///
    /// Mostly useful in tests.
    pub async fn len(&self) -> usize {
        let mut entries = self.entries.lock().await;
        entries.retain(|_, e| !e.is_expired());
        entries.len()
    }

    /// Returns `true` if the store holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                tracing::trace!(key, "evicted expired entry");
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(
        &self,
        key: &str,
        value: &[u8],
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), Entry::new(value, ttl));
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    async fn compare_and_swap(
        &self,
        key: &str,
        expected: &[u8],
        new: &[u8],
        ttl: Duration,
    ) -> Result<bool, StoreError> {
        // One lock acquisition covers the compare and the swap, so two
        // concurrent calls serialize: at most one observes `expected`.
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Ok(false)
            }
            Some(entry) if entry.value == expected => {
                entries.insert(key.to_string(), Entry::new(new, ttl));
                Ok(true)
            }
            Some(_) | None => Ok(false),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
