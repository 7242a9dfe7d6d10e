//! Key-value store abstraction for Partyhall.
//!
//! The backend keeps player and room records in a string-keyed
//! hash-map store (one hash per record). This crate defines the
//! [`KeyValueStore`] trait — the seam between the registry layers and
//! whatever store a deployment actually runs — plus [`MemoryStore`],
//! an in-process implementation used by tests and development
//! servers.
//!
//! The trait is deliberately small: per-key hash writes and reads,
//! existence checks, deletes, and key enumeration. Everything the
//! layers above need reduces to these five operations, each of which
//! the backing store can execute atomically.

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
