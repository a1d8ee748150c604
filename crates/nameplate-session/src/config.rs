//! Session configuration.

use std::time::Duration;

/// Configuration for session lifetime behavior.
///
/// `#[derive(Clone)]` is needed because the config is shared — the
/// repository stores one copy, and callers may keep another for
/// reporting.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a session lives in the store after each write.
    ///
    /// Every write — creation and a successful login — resets the window
    /// to this full duration, so an active session keeps sliding forward.
    /// A failed login only reads and does not extend the window.
    ///
    /// Default: 7 days.
    pub session_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            // 60 * 60 * 24 * 7 — one week, the window the fleet has
            // always written. Stored sessions outlive deploys, so
            // shortening this only affects records written afterwards.
            session_ttl: Duration::from_secs(604_800),
        }
    }
}
