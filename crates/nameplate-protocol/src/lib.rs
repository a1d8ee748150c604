//! Shared types and record layout for Nameplate.
//!
//! This crate defines the data that the rest of the stack agrees on:
//!
//! - **Types** ([`NameSession`], [`SessionRecord`], [`Checkout`], etc.) —
//!   the session entity, its persisted projection, and the checkout result.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how the persisted record
//!   is converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between the store (raw bytes under a key) and
//! the session layer (repository + service). It doesn't know about TTLs
//! or state transitions — it only knows the shapes and how to serialize
//! them.
//!
//! ```text
//! Store (bytes) → Protocol (SessionRecord) → Session (state machine)
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{Checkout, CheckoutCode, NameSession, SessionId, SessionRecord};
