//! Room membership, derived from the player registry.
//!
//! A room's member set is not stored anywhere — it is always computed
//! as `{ p : p.room_id == room && p.is_member }`. A player parked in
//! a room with `is_member == false` (a spectator or pending-join
//! placeholder) never appears in membership results, counts, or
//! host-eligibility checks.

use partyhall_store::KeyValueStore;
use partyhall_types::{PlayerId, RoomId};

use crate::{PlayerRecord, PlayerRegistry, RegistryError};

/// A read-only view answering "who is in room R".
///
/// Borrowed from a [`PlayerRegistry`]; results are
/// eventually-consistent snapshots of the underlying scan. No
/// duplicate ids can appear — registry keys are unique by
/// construction. The view imposes no capacity limit; enforcing one
/// belongs to the join flow.
pub struct MembershipView<'a, S> {
    registry: &'a PlayerRegistry<S>,
}

impl<'a, S: KeyValueStore> MembershipView<'a, S> {
    pub(crate) fn new(registry: &'a PlayerRegistry<S>) -> Self {
        Self { registry }
    }

    /// Returns the room's members in the store's enumeration order.
    pub async fn members_of(&self, room_id: &RoomId) -> Result<Vec<PlayerRecord>, RegistryError> {
        self.registry.list_by_room(room_id).await
    }

    /// Returns how many members the room has.
    pub async fn member_count(&self, room_id: &RoomId) -> Result<usize, RegistryError> {
        Ok(self.members_of(room_id).await?.len())
    }

    /// Returns `true` if the player is currently a member of the room.
    pub async fn contains(
        &self,
        room_id: &RoomId,
        player_id: &PlayerId,
    ) -> Result<bool, RegistryError> {
        let members = self.members_of(room_id).await?;
        Ok(members.iter().any(|p| &p.id == player_id))
    }
}
