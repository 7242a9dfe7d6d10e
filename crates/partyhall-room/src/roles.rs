//! FAKER-mode role assignment.

use serde::{Deserialize, Serialize};

/// The faker/keeper split for a FAKER-mode round.
///
/// A pure function of the member count `n`:
/// `fakers = round(n / 3)`, `keepers = n - fakers`.
///
/// Rounding is half-away-from-zero (`f64::round`). For thirds the
/// fraction is never exactly .5, so the tie-break is unobservable,
/// but it is pinned here and by the tests below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSplit {
    /// Number of players assigned the faker role.
    pub fakers: usize,
    /// Number of players assigned the keeper role.
    pub keepers: usize,
}

impl RoleSplit {
    /// Computes the split for a room with `member_count` members.
    pub fn for_members(member_count: usize) -> Self {
        let fakers = (member_count as f64 / 3.0).round() as usize;
        Self {
            fakers,
            keepers: member_count - fakers,
        }
    }
}
