//! The session service: the three operations and the rules they enforce.
//!
//! Per session id there are exactly three states, and two legal
//! transitions:
//!
//! ```text
//! NonExistent ──create()──→ Created(loggedOut) ──login()──→ LoggedIn
//! ```
//!
//! `checkout()` observes without mutating. Nothing transitions backwards;
//! the only exit is TTL expiry in the store, which returns an id to
//! `NonExistent` without the service's involvement.
//!
//! # Validation before side effects
//!
//! Every operation checks its argument for emptiness *before* touching
//! the store. A request rejected with `InvalidArgument` has performed
//! zero store accesses — the integration suite pins this down with a
//! counting store.

use nameplate_protocol::{Checkout, Codec, NameSession, SessionId};
use nameplate_store::SessionStore;

use crate::{SessionError, SessionIdProvider, SessionRepository};

/// Issues, looks up, and promotes name sessions.
///
/// Generic over the store, the id provider, and the codec — all three
/// are injected, so tests can swap any of them (deterministic ids,
/// failing store) without touching service code.
pub struct NameSessionService<S: SessionStore, I: SessionIdProvider, C: Codec> {
    repository: SessionRepository<S, C>,
    ids: I,
}

impl<S, I, C> NameSessionService<S, I, C>
where
    S: SessionStore,
    I: SessionIdProvider,
    C: Codec,
{
    /// Creates a service over the given repository and id provider.
    pub fn new(repository: SessionRepository<S, C>, ids: I) -> Self {
        Self { repository, ids }
    }

    /// Issues a new session for `player_name`.
    ///
    /// Generates a fresh id, persists `{player_name, logged out}` with
    /// the full TTL window, and returns the complete record. No
    /// uniqueness check against the store is performed — the id space
    /// makes collisions implausible.
    ///
    /// Transition: `NonExistent → Created(loggedOut)`.
    ///
    /// # Errors
    /// - [`SessionError::InvalidArgument`] — `player_name` is empty
    ///   (checked before any store access)
    /// - [`SessionError::Store`] — the write failed
    pub async fn create(
        &self,
        player_name: &str,
    ) -> Result<NameSession, SessionError> {
        if player_name.is_empty() {
            return Err(SessionError::InvalidArgument("playerName"));
        }

        let session = NameSession::new(self.ids.fresh(), player_name);
        self.repository.set(&session).await?;

        tracing::info!(
            session_id = %session.session_id,
            player_name,
            "session created"
        );
        Ok(session)
    }

    /// Looks up the current state of a session. Never mutates anything.
    ///
    /// An id with no session behind it — never created, or expired — is
    /// a normal [`Unavailable`](nameplate_protocol::CheckoutCode)
    /// result with an empty name, not an error.
    ///
    /// # Errors
    /// - [`SessionError::InvalidArgument`] — `session_id` is empty
    ///   (checked before any store access)
    /// - [`SessionError::Store`] — the read failed
    pub async fn checkout(
        &self,
        session_id: &str,
    ) -> Result<Checkout, SessionError> {
        if session_id.is_empty() {
            return Err(SessionError::InvalidArgument("sessionID"));
        }
        let id = SessionId::new(session_id);

        match self.repository.get(&id).await? {
            Some(session) => Ok(Checkout::of(session)),
            None => Ok(Checkout::unavailable(id)),
        }
    }

    /// Promotes a session from logged out to logged in, exactly once.
    ///
    /// The promotion is an atomic conditional write: the repository
    /// swaps the logged-out record for the logged-in one only if the
    /// store still holds what we read. Two concurrent logins on the same
    /// id can both read `logged out`, but at most one swap wins; the
    /// loser reports [`Conflict`](SessionError::Conflict) just as if it
    /// had arrived late.
    ///
    /// A successful login rewrites the record and therefore resets the
    /// TTL to the full window. A failed attempt only reads.
    ///
    /// Transition: `Created(loggedOut) → LoggedIn`.
    ///
    /// # Errors
    /// - [`SessionError::InvalidArgument`] — `session_id` is empty
    ///   (checked before any store access)
    /// - [`SessionError::NotFound`] — no session under this id
    /// - [`SessionError::Conflict`] — already logged in (or a concurrent
    ///   login won the race); nothing was written
    /// - [`SessionError::Store`] — the read or write failed
    pub async fn login(&self, session_id: &str) -> Result<(), SessionError> {
        if session_id.is_empty() {
            return Err(SessionError::InvalidArgument("sessionID"));
        }
        let id = SessionId::new(session_id);

        let session = self
            .repository
            .get(&id)
            .await?
            .ok_or_else(|| SessionError::NotFound(id.clone()))?;

        if session.is_logged_in {
            return Err(SessionError::Conflict(id));
        }

        if !self.repository.mark_logged_in(&session).await? {
            // The stored value moved between our read and our write — a
            // concurrent login won, or the session just expired. Either
            // way the promotion did not happen here.
            return Err(SessionError::Conflict(id));
        }

        tracing::info!(session_id = %id, "session logged in");
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================
