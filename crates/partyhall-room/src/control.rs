//! Host-gated room operations.

use partyhall_registry::{PlayerRegistry, RegistryError};
use partyhall_store::KeyValueStore;
use partyhall_types::{GameMode, PlayerId, RoomId};

use crate::{RoleSplit, RoomConfig, RoomError, RoomState, RoomStateStore};

/// The result of a successful [`RoomControl::start_game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStart {
    /// The room as it was when the round started.
    pub room: RoomState,
    /// Members counted at start time.
    pub member_count: usize,
    /// Faker/keeper assignment counts; `None` for modes without
    /// role assignment.
    pub role_split: Option<RoleSplit>,
    /// `true` when the member count is below the configured
    /// recommended FAKER size — the round starts anyway, the UI
    /// shows a warning.
    pub below_recommended: bool,
}

/// The result of a successful [`RoomControl::leave_room`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// A non-host member left; the room is unchanged.
    Left,
    /// The host left and the host role passed to a remaining member.
    HostPassedTo(PlayerId),
    /// The last member left and the room record was removed.
    Dissolved,
}

/// Authorization and mutation rules for a room in the lobby.
///
/// Every mutating operation re-reads the authoritative [`RoomState`]
/// at entry — the host check never trusts a value cached from an
/// earlier request, which keeps the window between "is host" and
/// "apply" down to one store round-trip. Authorization and validation
/// failures abort before anything is written.
pub struct RoomControl<S, R> {
    registry: PlayerRegistry<S>,
    rooms: R,
    config: RoomConfig,
}

impl<S: KeyValueStore, R: RoomStateStore> RoomControl<S, R> {
    /// Creates the control layer over a player registry and a room
    /// state store.
    pub fn new(registry: PlayerRegistry<S>, rooms: R, config: RoomConfig) -> Self {
        Self {
            registry,
            rooms,
            config,
        }
    }

    /// The player registry this control layer operates on.
    pub fn registry(&self) -> &PlayerRegistry<S> {
        &self.registry
    }

    /// The injected configuration.
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    /// Changes the room's game mode. Host only.
    ///
    /// Selecting the mode the room already has is an idempotent
    /// no-op — nothing is written, the current state is returned.
    pub async fn change_game_mode(
        &self,
        acting: &PlayerId,
        room_id: &RoomId,
        mode: GameMode,
    ) -> Result<RoomState, RoomError> {
        let mut room = self.load_room(room_id).await?;
        self.ensure_host(&room, acting)?;

        if room.game_mode == mode {
            return Ok(room);
        }

        room.game_mode = mode;
        self.rooms.save(&room).await?;
        tracing::info!(%room_id, %mode, "game mode changed");
        Ok(room)
    }

    /// Transfers the host role to another member of the room. Host
    /// only.
    ///
    /// The target must be someone else and must currently be a member
    /// of this room — a spectator placeholder or a player from
    /// another room is rejected before anything changes.
    pub async fn transfer_host(
        &self,
        acting: &PlayerId,
        room_id: &RoomId,
        target: &PlayerId,
    ) -> Result<RoomState, RoomError> {
        let mut room = self.load_room(room_id).await?;
        self.ensure_host(&room, acting)?;

        if target == acting {
            return Err(RoomError::SelfTransfer);
        }
        if !self.registry.membership().contains(room_id, target).await? {
            return Err(RoomError::TargetNotMember(target.clone(), room_id.clone()));
        }

        room.host_player_id = target.clone();
        self.rooms.save(&room).await?;
        tracing::info!(%room_id, new_host = %target, "host transferred");
        Ok(room)
    }

    /// Starts the round. Host only.
    ///
    /// FAKER mode enforces the configured minimum member count and
    /// reports (without enforcing) the recommended one. Round
    /// lifecycle beyond this summary belongs to the game layer.
    pub async fn start_game(
        &self,
        acting: &PlayerId,
        room_id: &RoomId,
    ) -> Result<GameStart, RoomError> {
        let room = self.load_room(room_id).await?;
        self.ensure_host(&room, acting)?;

        let member_count = self.registry.membership().member_count(room_id).await?;

        let (role_split, below_recommended) = match room.game_mode {
            GameMode::Faker => {
                if member_count < self.config.faker_min_members {
                    return Err(RoomError::InsufficientPlayers {
                        required: self.config.faker_min_members,
                        actual: member_count,
                    });
                }
                (
                    Some(RoleSplit::for_members(member_count)),
                    member_count < self.config.faker_recommended_members,
                )
            }
            GameMode::Basic => (None, false),
        };

        tracing::info!(%room_id, mode = %room.game_mode, member_count, "game started");
        Ok(GameStart {
            room,
            member_count,
            role_split,
            below_recommended,
        })
    }

    /// Removes the acting player from the room.
    ///
    /// The player's record is deleted entirely — no field reset, no
    /// soft delete. If the leaving player held the host role, it is
    /// reassigned so the room is never left with a dangling host:
    /// the first remaining member in scan order is promoted, or the
    /// room record is removed when nobody remains.
    pub async fn leave_room(
        &self,
        acting: &PlayerId,
        room_id: &RoomId,
    ) -> Result<LeaveOutcome, RoomError> {
        let room = self.load_room(room_id).await?;

        let record = match self.registry.get_by_id(acting).await {
            Ok(record) => record,
            Err(RegistryError::NotFound(_)) => {
                return Err(RoomError::NotInRoom(acting.clone(), room_id.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        if record.room_id.as_ref() != Some(room_id) {
            return Err(RoomError::NotInRoom(acting.clone(), room_id.clone()));
        }

        self.registry.delete(acting).await?;
        tracing::info!(%room_id, player_id = %acting, "player left room");

        if room.host_player_id != *acting {
            return Ok(LeaveOutcome::Left);
        }

        // The host is gone — promote or dissolve.
        let members = self.registry.membership().members_of(room_id).await?;
        match members.first() {
            Some(next) => {
                let mut room = room;
                room.host_player_id = next.id.clone();
                self.rooms.save(&room).await?;
                tracing::info!(%room_id, new_host = %next.id, "host left, promoted next member");
                Ok(LeaveOutcome::HostPassedTo(next.id.clone()))
            }
            None => {
                self.rooms.remove(room_id).await?;
                tracing::info!(%room_id, "last member left, room dissolved");
                Ok(LeaveOutcome::Dissolved)
            }
        }
    }

    /// Re-reads the room record, translating absence into
    /// [`RoomError::RoomNotFound`].
    async fn load_room(&self, room_id: &RoomId) -> Result<RoomState, RoomError> {
        self.rooms
            .load(room_id)
            .await?
            .ok_or_else(|| RoomError::RoomNotFound(room_id.clone()))
    }

    /// Host gate: every mutating operation calls this against the
    /// freshly loaded room before touching anything.
    fn ensure_host(&self, room: &RoomState, acting: &PlayerId) -> Result<(), RoomError> {
        if room.host_player_id != *acting {
            return Err(RoomError::Unauthorized(acting.clone(), room.id.clone()));
        }
        Ok(())
    }
}
