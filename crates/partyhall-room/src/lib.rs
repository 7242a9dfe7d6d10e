//! Room control logic for Partyhall lobbies.
//!
//! A room is a lobby grouping up to a configured capacity of players
//! who share a game mode and exactly one host. This crate owns the
//! host-gated transitions available while the room sits in the lobby:
//!
//! - [`RoomControl::change_game_mode`] — host picks a mode
//! - [`RoomControl::transfer_host`] — host hands off to a member
//! - [`RoomControl::start_game`] — host starts the round
//! - [`RoomControl::leave_room`] — any member leaves; the host role
//!   never dangles
//!
//! # Key types
//!
//! - [`RoomControl`] — the operations, over a registry + room store
//! - [`RoomState`] — the room's `(host, mode)` record
//! - [`RoomStateStore`] / [`KvRoomStore`] — where that record lives
//! - [`RoomConfig`] — capacity and FAKER-mode thresholds
//! - [`RoleSplit`] — faker/keeper counts derived from member count

mod config;
mod control;
mod error;
mod roles;
mod state;

pub use config::RoomConfig;
pub use control::{GameStart, LeaveOutcome, RoomControl};
pub use error::RoomError;
pub use roles::RoleSplit;
pub use state::{KvRoomStore, ROOM_KEY_PREFIX, RoomState, RoomStateStore, room_key};
