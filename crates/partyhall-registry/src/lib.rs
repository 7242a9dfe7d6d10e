//! Player registry and room membership view for Partyhall.
//!
//! Players live in the key-value store as one hash per player under
//! `players:<id>`. This crate owns that layout end to end:
//!
//! - [`PlayerRecord`] — the typed record and its string-field codec
//! - [`PlayerField`] — the closed set of fields an update may touch
//! - [`PlayerRegistry`] — create/read/update/delete/list operations
//! - [`MembershipView`] — "who is in room R", derived by filtering
//!   the registry
//!
//! # Consistency
//!
//! Every multi-field write (create, update) is issued as a single
//! store call, so a concurrent reader sees either the whole record or
//! none of it. Scans are eventually-consistent snapshots — good
//! enough for lobby display, not a linearizable authorization source.

mod error;
mod membership;
mod record;
mod registry;

pub use error::RegistryError;
pub use membership::MembershipView;
pub use record::{PlayerField, PlayerRecord};
pub use registry::{PLAYER_KEY_PREFIX, PlayerRegistry, player_key};
