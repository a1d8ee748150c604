//! Name-session management for Nameplate.
//!
//! This crate owns the session lifecycle:
//!
//! 1. **Issuing** — binding a fresh opaque id to a player's display name
//!    ([`NameSessionService::create`])
//! 2. **Looking up** — reading a session's current login state without
//!    touching it ([`NameSessionService::checkout`])
//! 3. **Promoting** — flipping the one-way login flag, exactly once
//!    ([`NameSessionService::login`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Handler layer (above)  ← maps HTTP requests onto service calls; not here
//!     ↕
//! Session layer (this crate)  ← state machine, validation, TTL policy
//!     ↕
//! Store layer (below)  ← expiring key-value backend behind SessionStore
//! ```
//!
//! The service enforces a three-state machine per session id:
//!
//! ```text
//! NonExistent ──create()──→ Created(loggedOut) ──login()──→ LoggedIn
//!      ↑                           │                            │
//!      └────────(TTL expiry)───────┴────────────────────────────┘
//! ```
//!
//! There is no delete operation — TTL expiry in the store is the only
//! way a session returns to `NonExistent`.

mod config;
mod error;
mod id;
mod repository;
mod service;

pub use config::SessionConfig;
pub use error::SessionError;
pub use id::{RandomIdProvider, SessionIdProvider};
pub use repository::SessionRepository;
pub use service::NameSessionService;
