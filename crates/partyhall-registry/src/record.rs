//! The player record and its string-field codec.
//!
//! The store is schemaless — every field is a string. This module is
//! the one place that knows how a typed [`PlayerRecord`] maps onto
//! those strings, including the coercion rules:
//!
//! - booleans are written as `"1"`/`"0"`; read-back compares the
//!   stored string against `"1"` with strict equality, so a stray
//!   `"2"` decodes as `false` rather than truthy
//! - `avatar_id` round-trips as an integer string; absent, empty, or
//!   unparseable values decode to `0`
//! - `room_id` is written as the empty string for "no room"; absent
//!   and empty decode identically to `None`
//!
//! Partial records therefore always decode with defaults, never
//! error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use partyhall_types::{PlayerId, RoomId};

/// Field names of the `players:<id>` hash.
pub(crate) mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const AVATAR_ID: &str = "avatar_id";
    pub const IS_MEMBER: &str = "is_member";
    pub const ROOM_ID: &str = "room_id";
}

/// Canonical stored string for a true boolean field.
const MEMBER_TRUE: &str = "1";

/// A player as the registry sees it.
///
/// Created on room join, mutated by partial updates, removed whole on
/// leave or disconnect — there is no soft delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Opaque unique identifier; immutable once created.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Cosmetic avatar selector.
    pub avatar_id: u32,

    /// Distinguishes a fully-joined member from a placeholder entry
    /// (e.g. a spectator or pending join). Only members count toward
    /// room membership.
    pub is_member: bool,

    /// The room this player is in, if any. A lookup key, not an
    /// ownership relation.
    pub room_id: Option<RoomId>,
}

impl PlayerRecord {
    /// Encodes the record as the full field set for one atomic
    /// `hash_set` call.
    pub(crate) fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::ID, self.id.as_str().to_owned()),
            (fields::NAME, self.name.clone()),
            (fields::AVATAR_ID, self.avatar_id.to_string()),
            (fields::IS_MEMBER, encode_bool(self.is_member)),
            (fields::ROOM_ID, encode_room_id(self.room_id.as_ref())),
        ]
    }

    /// Decodes a record from the stored field map.
    ///
    /// `key_id` is the id derived from the store key; the stored `id`
    /// field wins when present and non-empty. Missing fields decode
    /// to their documented defaults.
    pub(crate) fn from_fields(key_id: PlayerId, map: &HashMap<String, String>) -> Self {
        let id = map
            .get(fields::ID)
            .filter(|v| !v.is_empty())
            .map(|v| PlayerId::from(v.as_str()))
            .unwrap_or(key_id);
        Self {
            id,
            name: map.get(fields::NAME).cloned().unwrap_or_default(),
            avatar_id: map
                .get(fields::AVATAR_ID)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            // Strict comparison against the canonical true-string;
            // anything else (including "2" or "true") is false.
            is_member: map
                .get(fields::IS_MEMBER)
                .is_some_and(|v| v == MEMBER_TRUE),
            room_id: map
                .get(fields::ROOM_ID)
                .filter(|v| !v.is_empty())
                .map(|v| RoomId::from(v.as_str())),
        }
    }
}

/// The closed set of fields an update may change.
///
/// This is deliberately an enum rather than a string-keyed map: an
/// update can only ever name these fields, so arbitrary key injection
/// into the hash is impossible by construction. The `id` field is not
/// here — ids are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerField {
    /// New display name.
    Name(String),

    /// New avatar selector.
    AvatarId(u32),

    /// Member/placeholder flag.
    IsMember(bool),

    /// Room assignment; `None` clears it (stored as empty string).
    RoomId(Option<RoomId>),
}

impl PlayerField {
    /// Encodes the change as a `(field, value)` pair for `hash_set`.
    pub(crate) fn encode(&self) -> (&'static str, String) {
        match self {
            Self::Name(name) => (fields::NAME, name.clone()),
            Self::AvatarId(avatar_id) => (fields::AVATAR_ID, avatar_id.to_string()),
            Self::IsMember(is_member) => (fields::IS_MEMBER, encode_bool(*is_member)),
            Self::RoomId(room_id) => (fields::ROOM_ID, encode_room_id(room_id.as_ref())),
        }
    }
}

fn encode_bool(value: bool) -> String {
    if value { "1".to_owned() } else { "0".to_owned() }
}

fn encode_room_id(room_id: Option<&RoomId>) -> String {
    room_id.map(|r| r.as_str().to_owned()).unwrap_or_default()
}
