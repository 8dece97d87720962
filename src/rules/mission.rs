//! Missions: victory conditions evaluated against the territory store.
//!
//! Evaluation is a pure read of `GameState`; it never mutates anything.

use serde::{Deserialize, Serialize};

use crate::core::{Faction, FactionRoster, GameRng, GameState};

/// A victory condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mission {
    /// Remove every troop of an enemy faction from the map.
    EliminateFaction { faction: Faction },
    /// Own at least `count` territories.
    OwnTerritories { count: usize },
    /// Have at least `troops` troops in a single owned territory.
    HoldGarrison { troops: u32 },
}

impl Mission {
    /// Has `player` fulfilled this mission?
    #[must_use]
    pub fn is_complete(&self, state: &GameState, player: Faction) -> bool {
        match *self {
            Mission::EliminateFaction { faction } => state.total_troops(faction) == 0,
            Mission::OwnTerritories { count } => state.territories_owned(player) >= count,
            Mission::HoldGarrison { troops } => largest_garrison(state, player) >= troops,
        }
    }

    /// The enemy this mission targets, if any.
    #[must_use]
    pub fn target_faction(&self) -> Option<Faction> {
        match *self {
            Mission::EliminateFaction { faction } => Some(faction),
            _ => None,
        }
    }

    /// One-line description for the mission banner.
    #[must_use]
    pub fn describe(&self, roster: &FactionRoster) -> String {
        match *self {
            Mission::EliminateFaction { faction } => format!(
                "DESTROY the {} army: remove every {} troop from the map.",
                roster.label(faction),
                roster.label(faction)
            ),
            Mission::OwnTerritories { count } => {
                format!("CONQUER {} territories: own at least {} of them.", count, count)
            }
            Mission::HoldGarrison { troops } => format!(
                "FORTIFY: gather at least {} troops in a single territory.",
                troops
            ),
        }
    }

    /// Progress line shown under the mission banner.
    #[must_use]
    pub fn status(&self, state: &GameState, player: Faction, roster: &FactionRoster) -> String {
        match *self {
            Mission::EliminateFaction { faction } => format!(
                "{} troops remaining: {}",
                roster.label(faction),
                state.total_troops(faction)
            ),
            Mission::OwnTerritories { count } => {
                format!("Territories owned: {}/{}", state.territories_owned(player), count)
            }
            Mission::HoldGarrison { troops } => {
                format!("Largest garrison: {}/{}", largest_garrison(state, player), troops)
            }
        }
    }
}

/// Most troops `player` has in any single territory.
#[must_use]
pub fn largest_garrison(state: &GameState, player: Faction) -> u32 {
    state
        .owned_by(player)
        .map(|(_, t)| t.troops)
        .max()
        .unwrap_or(0)
}

/// Draw a mission index uniformly from `count` missions.
///
/// Uses a dedicated context stream so the draw does not shift the dice.
#[must_use]
pub fn draw_mission(rng: &GameRng, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(rng.for_context("mission").gen_range_usize(0..count))
}
