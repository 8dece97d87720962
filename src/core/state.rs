//! Game state: the territory store plus turn bookkeeping.
//!
//! ## GameState
//!
//! - Territory store (`Vec<Territory>`, exclusively owned, bounds-checked)
//! - Deterministic RNG
//! - Turn number and action history
//!
//! The two mutating operations (attack resolution and setup) borrow the
//! store mutably; everything else reads it.

use im::Vector;
use rustc_hash::FxHashMap;

use super::action::ActionRecord;
use super::faction::Faction;
use super::rng::GameRng;
use super::territory::{Territory, TerritoryId};

/// Full game state.
///
/// Cloning is cheap for the history (persistent vector), so a state can be
/// snapshotted before an attack and compared afterwards.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Territory store, in display order.
    territories: Vec<Territory>,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Turn number (starts at 1, advances after every menu choice).
    pub turn_number: u32,

    /// Next action sequence number.
    action_sequence: u32,

    /// Applied actions.
    history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state with the given territories and seed.
    #[must_use]
    pub fn new(territories: Vec<Territory>, seed: u64) -> Self {
        Self::with_rng(territories, GameRng::new(seed))
    }

    /// Create a state with the given territories and RNG.
    #[must_use]
    pub fn with_rng(territories: Vec<Territory>, rng: GameRng) -> Self {
        Self {
            territories,
            rng,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
        }
    }

    // === Territory Store ===

    /// Number of territories.
    #[must_use]
    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// All territories in display order.
    #[must_use]
    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// Iterate over (TerritoryId, &Territory) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId(i), t))
    }

    /// Get a territory, if the id is in range.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    /// Get a mutable territory, if the id is in range.
    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.index())
    }

    /// Borrow two distinct territories mutably at once.
    ///
    /// Returns `None` if either id is out of range or both ids are equal.
    pub fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let (a, b) = (first.index(), second.index());
        if a == b || a >= self.territories.len() || b >= self.territories.len() {
            return None;
        }

        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    // === Queries ===

    /// Iterate over territories owned by a faction.
    pub fn owned_by(&self, faction: Faction) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.iter().filter(move |(_, t)| t.owner == faction)
    }

    /// Number of territories owned by a faction.
    #[must_use]
    pub fn territories_owned(&self, faction: Faction) -> usize {
        self.owned_by(faction).count()
    }

    /// Total troops of a faction across the map.
    ///
    /// Summed as `u64`: individual garrisons may be anywhere in `u32` range.
    #[must_use]
    pub fn total_troops(&self, faction: Faction) -> u64 {
        self.owned_by(faction).map(|(_, t)| u64::from(t.troops)).sum()
    }

    /// Total troops per faction, for every faction that owns a territory.
    #[must_use]
    pub fn troops_by_faction(&self) -> FxHashMap<Faction, u64> {
        let mut totals = FxHashMap::default();
        for territory in &self.territories {
            *totals.entry(territory.owner).or_insert(0) += u64::from(territory.troops);
        }
        totals
    }

    // === Turn Advancement ===

    /// Advance to the next turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }
}
