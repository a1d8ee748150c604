//! Error types for the session layer.

use nameplate_protocol::SessionId;
use nameplate_store::StoreError;

/// Errors that can occur during session operations.
///
/// The four kinds stay externally distinguishable — the handler layer
/// maps each to its own status code, so collapsing any two here would
/// lose information callers depend on.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A required field was missing or empty. Detected before any store
    /// access, so a request failing this way has no side effects at all.
    /// The payload names the offending field (`"playerName"`,
    /// `"sessionID"`).
    #[error("{0} is required")]
    InvalidArgument(&'static str),

    /// Login targeted a session that doesn't exist — never created, or
    /// already evicted by TTL expiry.
    #[error("session not found: {0}")]
    NotFound(SessionId),

    /// Login targeted a session that is already logged in. The flag is
    /// one-way, so there is nothing left to do and nothing was written.
    #[error("session {0} is already logged in")]
    Conflict(SessionId),

    /// The store failed underneath us. Never retried at this layer —
    /// retry policy belongs to the store adapter or the handler above.
    #[error(transparent)]
    Store(#[from] StoreError),
}
