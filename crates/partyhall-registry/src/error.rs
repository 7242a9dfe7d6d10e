//! Error types for the registry layer.

use partyhall_store::StoreError;
use partyhall_types::PlayerId;

/// Errors that can occur during player registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No record exists for the given player. An expected outcome
    /// for idempotent client retries, not an exceptional one —
    /// `delete` reports it as `false` instead of raising this.
    #[error("player {0} not found")]
    NotFound(PlayerId),

    /// The underlying key-value store failed. Transient; propagated
    /// without local retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}
