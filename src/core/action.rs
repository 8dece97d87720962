//! Action representation and history records.
//!
//! Every menu choice the player makes becomes an `Action`:
//! - "Attack" = source territory + target territory
//! - "Check mission" = no arguments
//! - "Exit" = no arguments
//!
//! Applied actions are kept as `ActionRecord`s for the end-of-game summary.

use serde::{Deserialize, Serialize};

use super::faction::Faction;
use super::territory::TerritoryId;

/// A complete player action.
///
/// ```
/// use territory_war::core::{Action, TerritoryId};
///
/// let attack = Action::attack(TerritoryId(0), TerritoryId(5));
/// assert!(attack.is_attack());
/// assert!(!Action::CheckMission.is_attack());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Attack `to` with the troops stationed in `from`.
    Attack { from: TerritoryId, to: TerritoryId },
    /// Evaluate the mission.
    CheckMission,
    /// Leave the game.
    Exit,
}

impl Action {
    #[must_use]
    pub const fn attack(from: TerritoryId, to: TerritoryId) -> Self {
        Action::Attack { from, to }
    }

    #[must_use]
    pub const fn is_attack(&self) -> bool {
        matches!(self, Action::Attack { .. })
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The faction that took this action.
    pub faction: Faction,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number across the whole game.
    pub sequence: u32,

    /// Did this action conquer a territory?
    pub conquest: bool,
}

impl ActionRecord {
    #[must_use]
    pub fn new(faction: Faction, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            faction,
            action,
            turn,
            sequence,
            conquest: false,
        }
    }

    /// Mark this record as a conquest.
    #[must_use]
    pub fn with_conquest(mut self, conquest: bool) -> Self {
        self.conquest = conquest;
        self
    }
}
