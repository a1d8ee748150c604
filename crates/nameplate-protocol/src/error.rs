//! Error types for the protocol layer.
//!
//! Each crate in Nameplate defines its own error enum. This keeps errors
//! specific and meaningful — when you see a `ProtocolError`, you know the
//! problem is in serialization/deserialization, not in the store or the
//! state machine.

/// Errors that can occur in the protocol layer.
///
/// `#[derive(thiserror::Error)]` auto-generates the `std::error::Error`
/// trait implementation. The `#[error("...")]` attributes define the
/// human-readable message for each variant.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed (turning a record into bytes).
    ///
    /// The inner `serde_json::Error` is the original error from
    /// serde_json. We wrap it so callers deal with `ProtocolError`
    /// uniformly, regardless of which codec produced the error.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning stored bytes back into a record).
    ///
    /// Common causes: a truncated value, a value written by something
    /// other than this system, or a field with the wrong type.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// The record decoded cleanly but violates a structural rule —
    /// e.g., an empty `playerName`, which no valid write ever produces.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
