//! Room state and where it lives.
//!
//! The control layer doesn't own room lifecycle — rooms are created
//! by the join flow and this crate only reads and rewrites their
//! `(host, mode)` record. [`RoomStateStore`] is that seam;
//! [`KvRoomStore`] binds it to the same key-value store that holds
//! player records, one hash per room under `rooms:<id>`.

use std::future::Future;

use serde::{Deserialize, Serialize};

use partyhall_store::{KeyValueStore, StoreError};
use partyhall_types::{GameMode, PlayerId, RoomId};

/// Key prefix for room hashes in the store.
pub const ROOM_KEY_PREFIX: &str = "rooms:";

/// Returns the store key for a room.
pub fn room_key(id: &RoomId) -> String {
    format!("{ROOM_KEY_PREFIX}{id}")
}

/// Field names of the `rooms:<id>` hash.
mod fields {
    pub const ID: &str = "id";
    pub const HOST_PLAYER_ID: &str = "host_player_id";
    pub const GAME_MODE: &str = "game_mode";
}

/// The authoritative `(host, mode)` record of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    /// The room's unique id.
    pub id: RoomId,
    /// The single player authorized to mutate room state.
    pub host_player_id: PlayerId,
    /// The currently selected game mode.
    pub game_mode: GameMode,
}

/// Reads and writes [`RoomState`] records.
///
/// Same seam style as the store trait: implementations must make
/// `save` a single atomic write, and every control operation re-reads
/// through `load` immediately before mutating so the host check never
/// runs against a cached value.
pub trait RoomStateStore: Send + Sync + 'static {
    /// Loads a room, or `None` if it doesn't exist.
    fn load(
        &self,
        room_id: &RoomId,
    ) -> impl Future<Output = Result<Option<RoomState>, StoreError>> + Send;

    /// Persists the full room record in one atomic write.
    fn save(&self, room: &RoomState) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Removes the room record; `false` if it was already gone.
    fn remove(&self, room_id: &RoomId) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// [`RoomStateStore`] over a [`KeyValueStore`], one hash per room.
///
/// An unknown `game_mode` string in the store decodes to the default
/// mode rather than failing the read — a schemaless store can always
/// hold stray values and the room has to stay operable.
#[derive(Debug, Clone)]
pub struct KvRoomStore<S> {
    store: S,
}

impl<S: KeyValueStore> KvRoomStore<S> {
    /// Creates a room store backed by the given key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> RoomStateStore for KvRoomStore<S> {
    async fn load(&self, room_id: &RoomId) -> Result<Option<RoomState>, StoreError> {
        let map = self.store.hash_get_all(&room_key(room_id)).await?;
        if map.is_empty() {
            return Ok(None);
        }
        Ok(Some(RoomState {
            id: room_id.clone(),
            host_player_id: map
                .get(fields::HOST_PLAYER_ID)
                .map(|v| PlayerId::from(v.as_str()))
                .unwrap_or_else(|| PlayerId::from("")),
            game_mode: map
                .get(fields::GAME_MODE)
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }))
    }

    async fn save(&self, room: &RoomState) -> Result<(), StoreError> {
        self.store
            .hash_set(
                &room_key(&room.id),
                &[
                    (fields::ID, room.id.as_str().to_owned()),
                    (
                        fields::HOST_PLAYER_ID,
                        room.host_player_id.as_str().to_owned(),
                    ),
                    (fields::GAME_MODE, room.game_mode.as_str().to_owned()),
                ],
            )
            .await
    }

    async fn remove(&self, room_id: &RoomId) -> Result<bool, StoreError> {
        Ok(self.store.delete(&room_key(room_id)).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partyhall_store::MemoryStore;

    fn room(id: &str, host: &str, mode: GameMode) -> RoomState {
        RoomState {
            id: RoomId::from(id),
            host_player_id: PlayerId::from(host),
            game_mode: mode,
        }
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let rooms = KvRoomStore::new(MemoryStore::new());
        let state = room("R1", "p1", GameMode::Faker);

        rooms.save(&state).await.unwrap();
        let loaded = rooms.load(&RoomId::from("R1")).await.unwrap();

        assert_eq!(loaded, Some(state));
    }

    #[tokio::test]
    async fn test_load_missing_room_is_none() {
        let rooms = KvRoomStore::new(MemoryStore::new());
        assert_eq!(rooms.load(&RoomId::from("R9")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_unknown_mode_falls_back_to_default() {
        let store = MemoryStore::new();
        store
            .hash_set(
                "rooms:R1",
                &[
                    ("id", "R1".into()),
                    ("host_player_id", "p1".into()),
                    ("game_mode", "DANCE".into()),
                ],
            )
            .await
            .unwrap();

        let rooms = KvRoomStore::new(store);
        let loaded = rooms.load(&RoomId::from("R1")).await.unwrap().unwrap();

        assert_eq!(loaded.game_mode, GameMode::Basic);
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let rooms = KvRoomStore::new(MemoryStore::new());
        rooms
            .save(&room("R1", "p1", GameMode::Basic))
            .await
            .unwrap();

        assert!(rooms.remove(&RoomId::from("R1")).await.unwrap());
        assert!(!rooms.remove(&RoomId::from("R1")).await.unwrap());
        assert_eq!(rooms.load(&RoomId::from("R1")).await.unwrap(), None);
    }
}
