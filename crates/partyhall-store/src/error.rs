//! Error types for the store layer.

/// Errors that can occur talking to the key-value store.
///
/// Store failures are transient infrastructure problems, not domain
/// outcomes — callers propagate them upward unchanged. Retry and
/// backoff policy belongs to the store client, not to the layers
/// built on this trait.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the operation failed
    /// mid-flight.
    #[error("key-value store unavailable: {0}")]
    Unavailable(String),
}
