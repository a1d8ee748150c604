//! Error types for the store layer.

/// Errors that can occur when talking to the key-value backend.
///
/// Note what is *not* here: "key not found". An absent key is a normal
/// `Ok(None)` result, not an error — conflating the two is how lookups
/// end up retried against a perfectly healthy backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or failed mid-operation
    /// (connection refused, timeout, protocol error on the wire).
    #[error("store backend failure: {0}")]
    Backend(String),

    /// A stored value could not be interpreted: it failed to decode, or
    /// decoded into something that violates a record invariant. The key
    /// exists but its contents are unusable.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}
