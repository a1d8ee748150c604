//! Session identifier generation.
//!
//! Nameplate doesn't mandate an id scheme — it defines the
//! [`SessionIdProvider`] trait: a single method that produces a fresh
//! opaque token. The service calls it once per `create` and never
//! inspects the result.
//!
//! # Why a trait?
//!
//! The provider is an injectable capability, which lets us:
//! - Use cryptographically random ids in production
//! - Use fixed, predictable ids in tests (no store involved)
//!
//! All without changing any service code.

use nameplate_protocol::SessionId;
use rand::Rng;

/// Produces fresh, globally-unique opaque session ids.
///
/// ## Trait bounds
///
/// - `Send + Sync` → the provider is shared across async tasks.
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the service.
///
/// ## Uniqueness
///
/// Implementations must draw from an id space large enough that two
/// calls never collide in practice. The service relies on this: it does
/// NOT check the store for an existing key before writing, so a real
/// collision would silently overwrite another player's session.
pub trait SessionIdProvider: Send + Sync + 'static {
    /// Returns a fresh id, distinct from every id returned before.
    fn fresh(&self) -> SessionId;
}

/// The default provider: 128 random bits as a 32-character hex string.
///
/// 2^128 possible ids makes an accidental collision (and a guessed id)
/// computationally implausible, which is the property the no-uniqueness-
/// check design leans on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdProvider;

impl SessionIdProvider for RandomIdProvider {
    fn fresh(&self) -> SessionId {
        let mut rng = rand::rng();
        // 16 random bytes, each formatted as two lowercase hex digits.
        let bytes: [u8; 16] = rng.random();
        SessionId::new(
            bytes
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect::<String>(),
        )
    }
}
