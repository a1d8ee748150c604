//! The session repository: typed access to sessions in the store.
//!
//! The repository is the only code that knows how a session is laid out
//! in the key-value backend:
//!
//! - key = the session id, verbatim
//! - value = the encoded two-field record `{playerName, isLoggedIn}` —
//!   the id itself is never written into the value
//! - every write carries the full TTL window from [`SessionConfig`]
//!
//! Everything above (the service) deals in [`NameSession`] values;
//! everything below (the store) deals in bytes. The repository converts
//! between the two and owns the TTL policy.

use nameplate_protocol::{Codec, NameSession, ProtocolError, SessionId, SessionRecord};
use nameplate_store::{SessionStore, StoreError};

use crate::SessionConfig;

/// Reads and writes sessions against an injected store handle.
///
/// The store handle is created once at process startup and passed in
/// here — the repository never reaches for a global. Generic over the
/// store and codec so tests can substitute either.
pub struct SessionRepository<S: SessionStore, C: Codec> {
    store: S,
    codec: C,
    config: SessionConfig,
}

impl<S: SessionStore, C: Codec> SessionRepository<S, C> {
    /// Creates a repository over the given store handle and codec.
    pub fn new(store: S, codec: C, config: SessionConfig) -> Self {
        Self {
            store,
            codec,
            config,
        }
    }

    /// The TTL policy this repository writes with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Reads the session stored under `session_id`.
    ///
    /// Returns `Ok(None)` when no session exists — an absent key is a
    /// normal outcome, not an error. On a hit, decodes the stored record
    /// and reattaches the id from the lookup key.
    ///
    /// # Errors
    /// - [`StoreError::Backend`] — the store itself failed
    /// - [`StoreError::Corrupt`] — the value exists but won't decode, or
    ///   decodes with an empty `playerName` (which no valid write ever
    ///   produces)
    pub async fn get(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<NameSession>, StoreError> {
        let Some(bytes) = self.store.get(session_id.as_str()).await? else {
            return Ok(None);
        };

        let record: SessionRecord =
            self.codec.decode(&bytes).map_err(corrupt)?;
        if record.player_name.is_empty() {
            return Err(corrupt(ProtocolError::InvalidRecord(
                "stored record has empty playerName".to_string(),
            )));
        }

        Ok(Some(record.into_session(session_id.clone())))
    }

    /// Writes the session under its id, unconditionally overwriting any
    /// existing value and resetting the TTL to the full window.
    pub async fn set(&self, session: &NameSession) -> Result<(), StoreError> {
        let bytes = self.codec.encode(&session.record()).map_err(corrupt)?;
        self.store
            .set(
                session.session_id.as_str(),
                &bytes,
                self.config.session_ttl,
            )
            .await
    }

    /// Atomically promotes a logged-out session to logged in.
    ///
    /// Rebuilds the logged-out encoding of `session` and compare-and-swaps
    /// it for the logged-in encoding, refreshing the TTL. Returns
    /// `Ok(false)` when the stored value no longer matches — a concurrent
    /// login got there first, or the session expired between the caller's
    /// read and this write. The store is untouched in that case.
    ///
    /// `session` is the record as the caller read it, with
    /// `is_logged_in == false`.
    pub async fn mark_logged_in(
        &self,
        session: &NameSession,
    ) -> Result<bool, StoreError> {
        let expected = self
            .codec
            .encode(&SessionRecord {
                player_name: session.player_name.clone(),
                is_logged_in: false,
            })
            .map_err(corrupt)?;
        let new = self
            .codec
            .encode(&SessionRecord {
                player_name: session.player_name.clone(),
                is_logged_in: true,
            })
            .map_err(corrupt)?;

        self.store
            .compare_and_swap(
                session.session_id.as_str(),
                &expected,
                &new,
                self.config.session_ttl,
            )
            .await
    }
}

/// Maps a codec failure onto the store taxonomy: a value we can't make
/// sense of is a corrupt record, not a raw parse exception for callers
/// to untangle.
fn corrupt(err: ProtocolError) -> StoreError {
    StoreError::Corrupt(err.to_string())
}

// =========================================================================
// Tests
// =========================================================================
