//! `ServiceBuilder`: wiring a session service at process startup.

use nameplate_protocol::JsonCodec;
use nameplate_session::{
    NameSessionService, RandomIdProvider, SessionConfig, SessionIdProvider,
    SessionRepository,
};
use nameplate_store::SessionStore;

/// Builder for configuring and constructing a [`NameSessionService`].
///
/// The store handle is the one required ingredient: it is created by the
/// process entry point (which owns connect/close) and injected here, so
/// the service never reaches for a global client. Everything else has a
/// default — random 128-bit ids, the JSON record codec, and the 7-day
/// TTL window.
///
/// # Example
///
/// ```rust
/// use nameplate::prelude::*;
///
/// let service = ServiceBuilder::new(MemoryStore::new())
///     .session_config(SessionConfig::default())
///     .build();
/// # let _ = service;
/// ```
pub struct ServiceBuilder<S: SessionStore> {
    store: S,
    config: SessionConfig,
}

impl<S: SessionStore> ServiceBuilder<S> {
    /// Creates a builder over the given store handle.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: SessionConfig::default(),
        }
    }

    /// Sets the session configuration (TTL policy).
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the service with the default id provider and codec.
    pub fn build(self) -> NameSessionService<S, RandomIdProvider, JsonCodec> {
        self.build_with_ids(RandomIdProvider)
    }

    /// Builds the service with a custom id provider.
    ///
    /// Tests use this to substitute deterministic ids without touching
    /// the store.
    pub fn build_with_ids<I: SessionIdProvider>(
        self,
        ids: I,
    ) -> NameSessionService<S, I, JsonCodec> {
        tracing::debug!(
            ttl_secs = self.config.session_ttl.as_secs(),
            "session service configured"
        );
        NameSessionService::new(
            SessionRepository::new(self.store, JsonCodec, self.config),
            ids,
        )
    }
}
