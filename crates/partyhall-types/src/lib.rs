//! Shared types for the Partyhall backend.
//!
//! This crate defines the vocabulary every other layer speaks:
//!
//! - **Identity** ([`PlayerId`], [`RoomId`]) — opaque string ids that
//!   double as store keys and wire values.
//! - **Game modes** ([`GameMode`]) — the lobby's selectable modes and
//!   their canonical string forms.
//!
//! It has no knowledge of storage or room rules — those live in the
//! layers above.

mod ids;
mod mode;

pub use ids::{PlayerId, RoomId};
pub use mode::{GameMode, ParseGameModeError};
