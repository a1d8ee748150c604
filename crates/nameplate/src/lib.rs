//! # Nameplate
//!
//! Ephemeral player name sessions over an expiring key-value store.
//!
//! A name session binds an opaque session id to a player-supplied display
//! name, with a one-way login flag. Sessions live for a fixed window (7
//! days by default), sliding forward on every write, and vanish when the
//! store evicts them — there is no explicit delete.
//!
//! This meta-crate ties the layers together: it re-exports the protocol
//! types, the store seam, and the session service, and provides
//! [`ServiceBuilder`] for wiring them up at process startup.
//!
//! ## Quick Start
//!
//! ```rust
//! use nameplate::prelude::*;
//!
//! # async fn demo() -> Result<(), NameplateError> {
//! // The store handle is created once and injected; in production this
//! // would be a real backend client instead of MemoryStore.
//! let service = ServiceBuilder::new(MemoryStore::new()).build();
//!
//! let session = service.create("cat").await?;
//! let checkout = service.checkout(session.session_id.as_str()).await?;
//! assert_eq!(checkout.code, CheckoutCode::LoggedOut);
//!
//! service.login(session.session_id.as_str()).await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;

pub use builder::ServiceBuilder;
pub use error::NameplateError;

/// One-stop imports for consumers of the crate.
pub mod prelude {
    pub use crate::{NameplateError, ServiceBuilder};
    pub use nameplate_protocol::{
        Checkout, CheckoutCode, Codec, JsonCodec, NameSession, SessionId,
        SessionRecord,
    };
    pub use nameplate_store::{MemoryStore, SessionStore, StoreError};
    pub use nameplate_session::{
        NameSessionService, RandomIdProvider, SessionConfig, SessionError,
        SessionIdProvider, SessionRepository,
    };
}
