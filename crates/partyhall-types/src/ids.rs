//! Identity newtypes.
//!
//! Player and room ids are opaque strings assigned by the
//! authentication and room-creation collaborators. Wrapping them in
//! newtypes keeps a `RoomId` from ever being passed where a
//! `PlayerId` is expected, even though both are strings underneath.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique, opaque identifier for a player.
///
/// Immutable once assigned; used verbatim as the suffix of the
/// player's store key and as the wire value in API payloads.
///
/// `#[serde(transparent)]` serializes the inner string directly, so a
/// `PlayerId("abc".into())` is just `"abc"` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A unique, opaque identifier for a room (lobby).
///
/// Same newtype pattern as [`PlayerId`]. Rooms group up to a
/// configured capacity of players sharing a game mode and host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_serializes_as_plain_string() {
        // `#[serde(transparent)]` means PlayerId("p1") → `"p1"`,
        // not `{"0":"p1"}`. Clients expect a plain string.
        let json = serde_json::to_string(&PlayerId::from("p1")).unwrap();
        assert_eq!(json, "\"p1\"");
    }

    #[test]
    fn test_player_id_deserializes_from_plain_string() {
        let pid: PlayerId = serde_json::from_str("\"p1\"").unwrap();
        assert_eq!(pid, PlayerId::from("p1"));
    }

    #[test]
    fn test_player_id_display_is_raw_string() {
        assert_eq!(PlayerId::from("abc-123").to_string(), "abc-123");
    }

    #[test]
    fn test_room_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&RoomId::from("R9")).unwrap();
        assert_eq!(json, "\"R9\"");
    }

    #[test]
    fn test_room_id_display_is_raw_string() {
        assert_eq!(RoomId::from("R9").to_string(), "R9");
    }
}
