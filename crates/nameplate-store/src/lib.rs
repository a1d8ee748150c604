//! Store abstraction layer for Nameplate.
//!
//! Provides the [`SessionStore`] trait that abstracts over expiring
//! key-value backends (Redis, Memcached, an in-process map). The
//! repository above this layer only ever sees bytes under keys with a
//! time-to-live; it never learns which backend is in play.
//!
//! # Feature Flags
//!
//! - `memory` (default) — in-process [`MemoryStore`] for tests and
//!   development
//!
//! # Handle lifecycle
//!
//! A store handle is created once at process startup and injected into
//! the repository at construction — it is shared across every request,
//! never a global reached for implicitly. Implementations are expected
//! to be cheaply cloneable handles over a shared connection or map.

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "memory")]
mod memory;

pub use error::StoreError;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;

use std::time::Duration;

/// An expiring key-value backend.
///
/// ## Trait bounds
///
/// - `Send + Sync` → the handle is shared across async tasks (Tokio may
///   poll store calls from any thread in its pool).
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the process.
///
/// ## Semantics every implementation must honor
///
/// - An absent key is `Ok(None)` from [`get`](Self::get), never an error.
///   Errors mean the backend itself failed (connection refused, timeout),
///   not that the data wasn't there.
/// - Every write — [`set`](Self::set) and a successful
///   [`compare_and_swap`](Self::compare_and_swap) — resets the key's TTL
///   to the full window passed in.
/// - A key whose TTL has elapsed behaves exactly like one that never
///   existed.
pub trait SessionStore: Send + Sync + 'static {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key does not exist (or has expired).
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Writes `value` under `key` with the given time-to-live,
    /// unconditionally overwriting any existing value.
    async fn set(
        &self,
        key: &str,
        value: &[u8],
        ttl: Duration,
    ) -> Result<(), StoreError>;

    /// Returns `true` if a live (non-expired) value exists under `key`.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Atomically replaces the value under `key` with `new` — refreshing
    /// the TTL — but only if the current value is byte-equal to
    /// `expected`.
    ///
    /// Returns `Ok(false)` when the current value differs or the key is
    /// absent; the store is left untouched in that case. This is the
    /// primitive that makes read-check-write sequences race-free: two
    /// concurrent swaps from the same `expected` can't both win.
    async fn compare_and_swap(
        &self,
        key: &str,
        expected: &[u8],
        new: &[u8],
        ttl: Duration,
    ) -> Result<bool, StoreError>;
}
