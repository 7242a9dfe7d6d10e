//! The player registry: CRUD and queries over player records.

use partyhall_store::KeyValueStore;
use partyhall_types::{PlayerId, RoomId};

use crate::{MembershipView, PlayerField, PlayerRecord, RegistryError};

/// Key prefix for player hashes in the store.
pub const PLAYER_KEY_PREFIX: &str = "players:";

/// Returns the store key for a player.
pub fn player_key(id: &PlayerId) -> String {
    format!("{PLAYER_KEY_PREFIX}{id}")
}

/// CRUD and query operations over player records.
///
/// Generic over the [`KeyValueStore`] so production can bind a real
/// store client while tests use the in-memory one. The registry holds
/// no state of its own — every operation goes straight to the store,
/// so clones of the same store handle always agree.
pub struct PlayerRegistry<S> {
    store: S,
}

impl<S: KeyValueStore> PlayerRegistry<S> {
    /// Creates a registry backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the membership view derived from this registry.
    pub fn membership(&self) -> MembershipView<'_, S> {
        MembershipView::new(self)
    }

    /// Creates (or overwrites) a player record.
    ///
    /// All five fields are written in one atomic store call, so no
    /// concurrent reader can observe a partially-written record.
    /// `room_id` starts out unset; the join flow assigns it with
    /// [`update`](Self::update) afterwards.
    pub async fn create(
        &self,
        id: &PlayerId,
        name: &str,
        avatar_id: u32,
        is_member: bool,
    ) -> Result<PlayerRecord, RegistryError> {
        let record = PlayerRecord {
            id: id.clone(),
            name: name.to_owned(),
            avatar_id,
            is_member,
            room_id: None,
        };

        self.store
            .hash_set(&player_key(id), &record.to_fields())
            .await?;

        tracing::info!(player_id = %id, %is_member, "player record created");
        Ok(record)
    }

    /// Reads one player record.
    ///
    /// A key that is absent — or present but holds zero fields, the
    /// shadow of a racing delete — is [`RegistryError::NotFound`].
    pub async fn get_by_id(&self, id: &PlayerId) -> Result<PlayerRecord, RegistryError> {
        let map = self.store.hash_get_all(&player_key(id)).await?;
        if map.is_empty() {
            return Err(RegistryError::NotFound(id.clone()));
        }
        Ok(PlayerRecord::from_fields(id.clone(), &map))
    }

    /// Applies a partial update and returns the re-read record.
    ///
    /// Existence is checked before any mutation; updating a missing
    /// player is [`RegistryError::NotFound`] with no store write. All
    /// changed fields go out in a single atomic `hash_set`. The
    /// returned record is read back from the store afterwards, so the
    /// caller observes store-confirmed state rather than a locally
    /// computed value.
    pub async fn update(
        &self,
        id: &PlayerId,
        changes: &[PlayerField],
    ) -> Result<PlayerRecord, RegistryError> {
        let key = player_key(id);
        if !self.store.exists(&key).await? {
            return Err(RegistryError::NotFound(id.clone()));
        }

        if !changes.is_empty() {
            let fields: Vec<(&str, String)> =
                changes.iter().map(PlayerField::encode).collect();
            self.store.hash_set(&key, &fields).await?;
            tracing::info!(player_id = %id, changed = changes.len(), "player record updated");
        }

        self.get_by_id(id).await
    }

    /// Deletes a player record entirely.
    ///
    /// Returns whether a record existed and was removed. Deleting a
    /// missing player is `false`, not an error — clients retry leaves
    /// and disconnects freely.
    pub async fn delete(&self, id: &PlayerId) -> Result<bool, RegistryError> {
        let removed = self.store.delete(&player_key(id)).await? > 0;
        if removed {
            tracing::info!(player_id = %id, "player record deleted");
        }
        Ok(removed)
    }

    /// Lists every player in the store.
    ///
    /// Keys that resolve to an empty hash are skipped — that's a scan
    /// racing a concurrent delete, not an error. The result is a
    /// snapshot in the store's enumeration order; callers must not
    /// rely on the ordering for correctness.
    pub async fn list_all(&self) -> Result<Vec<PlayerRecord>, RegistryError> {
        let pattern = format!("{PLAYER_KEY_PREFIX}*");
        let keys = self.store.list_keys(&pattern).await?;

        let mut players = Vec::with_capacity(keys.len());
        for key in keys {
            let map = self.store.hash_get_all(&key).await?;
            if map.is_empty() {
                tracing::warn!(%key, "skipping empty player hash during scan");
                continue;
            }
            let key_id = PlayerId::from(key.strip_prefix(PLAYER_KEY_PREFIX).unwrap_or(&key));
            players.push(PlayerRecord::from_fields(key_id, &map));
        }
        Ok(players)
    }

    /// Lists the members of a room: players whose `room_id` matches
    /// and whose `is_member` flag is set.
    ///
    /// This is an O(total players) scan over [`list_all`](Self::list_all).
    /// Acceptable while the population is bounded by room capacity ×
    /// active rooms; a secondary room → members index is the upgrade
    /// path if that stops holding.
    pub async fn list_by_room(&self, room_id: &RoomId) -> Result<Vec<PlayerRecord>, RegistryError> {
        let players = self.list_all().await?;
        Ok(players
            .into_iter()
            .filter(|p| p.is_member && p.room_id.as_ref() == Some(room_id))
            .collect())
    }
}
