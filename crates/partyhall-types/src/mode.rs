//! Game modes selectable in the lobby.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The game mode a room's host has selected.
///
/// The canonical string forms (`"BASIC"`, `"FAKER"`) are what the
/// HTTP API carries in `game_mode` and what the store persists, so
/// both serde and [`FromStr`]/[`Display`] use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// The default party mode, no role assignment.
    #[default]
    Basic,

    /// Hidden-role mode: members split into fakers and keepers
    /// derived from the member count.
    Faker,
}

impl GameMode {
    /// Returns the canonical string form used on the wire and in the
    /// store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Faker => "FAKER",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASIC" => Ok(Self::Basic),
            "FAKER" => Ok(Self::Faker),
            other => Err(ParseGameModeError(other.to_owned())),
        }
    }
}

/// The string was not a recognized game mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode: {0:?}")]
pub struct ParseGameModeError(pub String);
