//! Error types for the room control layer.

use partyhall_registry::RegistryError;
use partyhall_store::StoreError;
use partyhall_types::{PlayerId, RoomId};

/// Errors that can occur during room control operations.
///
/// Authorization and validation failures are reported before any
/// mutation is attempted — fail closed, no partial application.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room does not exist.
    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    /// The acting player is not the room's host. Only the host may
    /// change the mode, transfer host, or start the game.
    #[error("player {0} is not the host of room {1}")]
    Unauthorized(PlayerId, RoomId),

    /// Host transfer targeting the current host themselves.
    #[error("cannot transfer host to yourself")]
    SelfTransfer,

    /// Host transfer targeting a player who is not a member of the
    /// room.
    #[error("player {0} is not a member of room {1}")]
    TargetNotMember(PlayerId, RoomId),

    /// The selected game mode needs more members than the room has.
    #[error("game mode requires at least {required} members, room has {actual}")]
    InsufficientPlayers { required: usize, actual: usize },

    /// The acting player's record does not place them in this room.
    #[error("player {0} is not in room {1}")]
    NotInRoom(PlayerId, RoomId),

    /// A registry operation failed underneath.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The underlying key-value store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
