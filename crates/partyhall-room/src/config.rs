//! Room configuration.

use serde::{Deserialize, Serialize};

/// Configuration for room control.
///
/// Injected into [`RoomControl`](crate::RoomControl) so deployments
/// can vary the values without touching the logic — nothing in this
/// crate reads a global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Maximum players a room holds. Enforcement lives in the
    /// join-flow collaborator; the value is carried here so it has a
    /// single configurable home.
    pub capacity: usize,

    /// Enforced minimum member count for starting a FAKER round.
    /// Below this, `start_game` fails.
    pub faker_min_members: usize,

    /// Recommended minimum for a balanced FAKER role split. Below
    /// this, `start_game` still succeeds but flags the result so the
    /// UI can warn.
    pub faker_recommended_members: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            capacity: 8,
            faker_min_members: 1,
            faker_recommended_members: 3,
        }
    }
}
