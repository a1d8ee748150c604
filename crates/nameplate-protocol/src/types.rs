//! Core types for Nameplate's session data.
//!
//! This module defines every shape the system agrees on: the session
//! entity handed to callers, the two-field record that actually lands in
//! the store, and the result of a checkout lookup.
//!
//! The split between [`NameSession`] and [`SessionRecord`] is deliberate:
//! the record is what gets serialized under the store key, and it never
//! embeds the session id — the key already carries it. The repository
//! reattaches the id when it reads the record back.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// SessionId
// ---------------------------------------------------------------------------

/// An opaque, globally-unique session identifier.
///
/// This is a "newtype wrapper" around `String`. Why bother?
///
/// 1. **Type safety**: a function taking `SessionId` can't be handed a
///    player name by accident, even though both are strings underneath.
/// 2. **Intent**: the id is opaque — nothing in the system inspects its
///    contents. Wrapping it makes that explicit.
///
/// The `#[serde(transparent)]` attribute tells serde to serialize this as
/// just the inner string, not as `{ "0": "..." }`.
///
/// A `SessionId` doubles as the store key: the session with id `S` lives
/// at key `S` in the backing key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a `SessionId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice (the store key).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the underlying `String`.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns `true` if the id is the empty string.
    ///
    /// An empty id is never valid — the service rejects it before any
    /// store access — but the type itself doesn't forbid constructing
    /// one, so callers coming from query parameters can check here.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// NameSession
// ---------------------------------------------------------------------------

/// A name session: the binding between a session id and a player-supplied
/// display name, with a one-way login flag.
///
/// This is the full entity as callers see it. Two of the three fields are
/// immutable after creation; only `is_logged_in` ever changes, and only
/// in one direction:
///
/// ```text
/// create() → { id, name, is_logged_in: false } → login() → is_logged_in: true
/// ```
///
/// `#[serde(rename_all = "camelCase")]` makes the JSON field names match
/// the wire convention (`sessionId`, `playerName`, `isLoggedIn`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSession {
    /// The opaque id, assigned at creation. Also the store key.
    pub session_id: SessionId,

    /// The display name the player supplied. Non-empty by construction —
    /// the service validates before a session is ever built.
    pub player_name: String,

    /// Whether the player has logged in. Starts `false`, flips to `true`
    /// at most once, never reverts.
    pub is_logged_in: bool,
}

impl NameSession {
    /// Builds a fresh, logged-out session.
    pub fn new(session_id: SessionId, player_name: impl Into<String>) -> Self {
        Self {
            session_id,
            player_name: player_name.into(),
            is_logged_in: false,
        }
    }

    /// Projects the persisted record — everything except the id.
    pub fn record(&self) -> SessionRecord {
        SessionRecord {
            player_name: self.player_name.clone(),
            is_logged_in: self.is_logged_in,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionRecord
// ---------------------------------------------------------------------------

/// The persisted projection of a session: exactly what lands in the store.
///
/// Serialized layout (JSON):
///
/// ```text
/// { "playerName": <string>, "isLoggedIn": <bool> }
/// ```
///
/// Note what's *missing*: the session id. The store key carries it, so
/// writing it into the value would be redundant — and worse, it could
/// drift from the key. The repository reattaches the id on read via
/// [`into_session`](Self::into_session).
///
/// Field order is fixed by this struct definition, which makes the
/// encoding deterministic. The login path relies on that: it reconstructs
/// the logged-out encoding byte-for-byte as the "expected" side of a
/// compare-and-swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// The player's display name.
    pub player_name: String,

    /// The one-way login flag.
    pub is_logged_in: bool,
}

impl SessionRecord {
    /// Reattaches the store key, producing the full session entity.
    pub fn into_session(self, session_id: SessionId) -> NameSession {
        NameSession {
            session_id,
            player_name: self.player_name,
            is_logged_in: self.is_logged_in,
        }
    }
}

// ---------------------------------------------------------------------------
// Checkout
// ---------------------------------------------------------------------------

/// The observable state of a session at checkout time.
///
/// Serialized in snake_case (`"logged_out"`, `"logged_in"`,
/// `"unavailable"`) to match the wire convention for status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutCode {
    /// The session exists and the player has not logged in yet.
    LoggedOut,

    /// The session exists and the player has logged in.
    LoggedIn,

    /// No session exists under this id — never created, or the TTL
    /// elapsed and the store evicted it. This is a normal outcome of a
    /// lookup, not an error.
    Unavailable,
}

impl fmt::Display for CheckoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CheckoutCode::LoggedOut => "logged_out",
            CheckoutCode::LoggedIn => "logged_in",
            CheckoutCode::Unavailable => "unavailable",
        };
        write!(f, "{s}")
    }
}

/// The result of a checkout: a read-only snapshot of a session's state.
///
/// For an [`Unavailable`](CheckoutCode::Unavailable) session the
/// `player_name` is empty — there is no stored name to report — but the
/// `session_id` still echoes what the caller asked about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    /// The id the lookup was performed with.
    pub session_id: SessionId,

    /// The stored display name, or `""` when the session is unavailable.
    pub player_name: String,

    /// The session's observable state.
    pub code: CheckoutCode,
}

impl Checkout {
    /// Builds the checkout result for a session that was found.
    pub fn of(session: NameSession) -> Self {
        let code = if session.is_logged_in {
            CheckoutCode::LoggedIn
        } else {
            CheckoutCode::LoggedOut
        };
        Self {
            session_id: session.session_id,
            player_name: session.player_name,
            code,
        }
    }

    /// Builds the checkout result for an id with no session behind it.
    pub fn unavailable(session_id: SessionId) -> Self {
        Self {
            session_id,
            player_name: String::new(),
            code: CheckoutCode::Unavailable,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
