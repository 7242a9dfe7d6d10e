//! The [`KeyValueStore`] trait — the storage seam.
//!
//! Partyhall doesn't pick your store for you. Deployments bind this
//! trait to their client of choice (Redis, Valkey, a managed cache);
//! tests and development use [`MemoryStore`](crate::MemoryStore).
//!
//! The contract mirrors the hash commands of Redis-style stores, with
//! one deliberate restriction: [`hash_set`](KeyValueStore::hash_set)
//! takes *all* fields for a write in a single call. A record is only
//! ever written as one atomic operation, so a concurrent reader can
//! never observe half a record.

use std::collections::HashMap;
use std::future::Future;

use crate::StoreError;

/// A string-keyed store of hashes (field → value maps).
///
/// # Trait bounds
///
/// - `Send + Sync` — the store handle is shared across async tasks.
/// - `'static` — it doesn't borrow temporary data; it lives as long
///   as the service.
///
/// Implementations are expected to execute each method as a single
/// atomic operation against the backing store. Cross-key or
/// cross-call atomicity is *not* provided and the layers above do
/// not assume it.
pub trait KeyValueStore: Send + Sync + 'static {
    /// Sets the given fields on the hash at `key` in one atomic
    /// operation, creating the hash if it doesn't exist. Fields not
    /// named are left untouched.
    fn hash_set(
        &self,
        key: &str,
        fields: &[(&str, String)],
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns every field of the hash at `key`. A missing key
    /// yields an empty map — callers treat "absent" and "exists but
    /// empty" identically.
    fn hash_get_all(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<HashMap<String, String>, StoreError>> + Send;

    /// Returns `true` if `key` exists.
    fn exists(&self, key: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Deletes `key`, returning how many keys were removed (0 or 1).
    fn delete(&self, key: &str) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Lists keys matching `pattern`. Only the trailing-`*` prefix
    /// form (e.g. `players:*`) and exact keys are required; that is
    /// all the registry scans use.
    fn list_keys(
        &self,
        pattern: &str,
    ) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;
}
