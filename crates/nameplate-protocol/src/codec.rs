//! Codec trait and implementations for the persisted session record.
//!
//! A "codec" (coder/decoder) converts between Rust types and raw bytes.
//! The repository doesn't care HOW records are serialized — it just needs
//! something that implements the [`Codec`] trait. This is the "strategy
//! pattern": we define an interface, and swap implementations.
//!
//! Currently we provide [`JsonCodec`], which produces the store layout
//! `{"playerName": ..., "isLoggedIn": ...}`. A binary codec could be added
//! later without changing any other code — though it would need a
//! migration story for records already sitting in the store.

use serde::{de::DeserializeOwned, Serialize};

use crate::ProtocolError;

/// A codec that can encode Rust types to bytes and decode bytes back.
///
/// ## Trait bounds explained
///
/// - `Send + Sync` → safe to share between threads (Tokio may run our
///   code on any thread in its thread pool).
/// - `'static` → the codec doesn't borrow temporary data; it's stored in
///   long-lived service state.
///
/// ## Determinism
///
/// Implementations must be deterministic: encoding the same value twice
/// yields the same bytes. The login path depends on this — it rebuilds
/// the logged-out encoding as the "expected" side of a compare-and-swap
/// against the store.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed,
    /// incomplete, or don't match the expected type.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] that uses JSON (via `serde_json`).
///
/// JSON is what the store layout has always been, and it keeps stored
/// values human-readable: you can inspect a session straight out of the
/// backing store when debugging. `serde_json` preserves struct field
/// order, so the encoding is deterministic as the [`Codec`] contract
/// requires.
///
/// This is behind the `json` feature flag (enabled by default).
///
/// ## Example
///
/// ```rust
/// use nameplate_protocol::{Codec, JsonCodec, SessionRecord};
///
/// let codec = JsonCodec;
///
/// let record = SessionRecord {
///     player_name: "cat".to_string(),
///     is_logged_in: false,
/// };
///
/// let bytes = codec.encode(&record).unwrap();
/// assert_eq!(bytes, br#"{"playerName":"cat","isLoggedIn":false}"#);
///
/// let decoded: SessionRecord = codec.decode(&bytes).unwrap();
/// assert_eq!(record, decoded);
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::SessionRecord;

    #[test]
    fn test_encode_record_produces_store_layout() {
        let codec = JsonCodec;
        let record = SessionRecord {
            player_name: "cat".to_string(),
            is_logged_in: true,
        };

        let bytes = codec.encode(&record).unwrap();

        assert_eq!(bytes, br#"{"playerName":"cat","isLoggedIn":true}"#);
    }

    #[test]
    fn test_encode_is_deterministic() {
        // Same value, same bytes — the login compare-and-swap relies on it.
        let codec = JsonCodec;
        let record = SessionRecord {
            player_name: "cat".to_string(),
            is_logged_in: false,
        };

        assert_eq!(
            codec.encode(&record).unwrap(),
            codec.encode(&record).unwrap()
        );
    }

    #[test]
    fn test_decode_malformed_bytes_returns_decode_error() {
        let codec = JsonCodec;

        let result: Result<SessionRecord, _> = codec.decode(b"not json at all");

        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }

    #[test]
    fn test_decode_wrong_shape_returns_decode_error() {
        // Valid JSON, but missing the required fields.
        let codec = JsonCodec;

        let result: Result<SessionRecord, _> =
            codec.decode(br#"{"something":"else"}"#);

        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let codec = JsonCodec;
        let record = SessionRecord {
            player_name: "ねこ".to_string(),
            is_logged_in: false,
        };

        let decoded: SessionRecord =
            codec.decode(&codec.encode(&record).unwrap()).unwrap();

        assert_eq!(decoded, record);
    }
}
