//! Unified error type for Nameplate.

use nameplate_protocol::ProtocolError;
use nameplate_session::SessionError;
use nameplate_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `nameplate` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum NameplateError {
    /// A protocol-level error (encode, decode, invalid record).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A store-level error (backend failure, corrupt record).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A session-level error (validation, not found, conflict).
    #[error(transparent)]
    Session(#[from] SessionError),
}
