//! Territory records and their identifiers.
//!
//! ## TerritoryId
//!
//! Index of a territory in the store. Ids come from user input, so they
//! are only trusted after a bounds check against the store (see
//! `GameState::get`).
//!
//! ## Territory
//!
//! A named map cell with an owning faction and a troop count. Troop counts
//! are unsigned and only ever reduced with saturating arithmetic, so they
//! can never go negative.

use serde::{Deserialize, Serialize};

use super::faction::Faction;

/// Index of a territory in the store.
///
/// ```
/// use territory_war::core::TerritoryId;
///
/// let id = TerritoryId::new(3);
/// assert_eq!(id.index(), 3);
/// assert_eq!(format!("{}", id), "#3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub usize);

impl TerritoryId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index into the store.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Iterate over all ids of a store with `count` territories.
    pub fn all(count: usize) -> impl Iterator<Item = TerritoryId> {
        (0..count).map(TerritoryId)
    }
}

impl From<usize> for TerritoryId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named map cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name, already truncated to the configured maximum.
    pub name: String,

    /// Current owner.
    pub owner: Faction,

    /// Troops stationed here.
    pub troops: u32,
}

impl Territory {
    /// Create a territory. The name is stored as given.
    pub fn new(name: impl Into<String>, owner: Faction, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner,
            troops,
        }
    }

    /// Create a territory, truncating the name to `max_name_len` characters.
    pub fn bounded(name: &str, owner: Faction, troops: u32, max_name_len: usize) -> Self {
        Self::new(truncate_name(name, max_name_len), owner, troops)
    }

    /// Remove up to `count` troops, never going below zero.
    ///
    /// Returns the number of troops actually removed.
    pub fn remove_troops(&mut self, count: u32) -> u32 {
        let removed = count.min(self.troops);
        self.troops -= removed;
        removed
    }

    /// Has this territory been emptied of troops?
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.troops == 0
    }
}

/// Truncate a name to at most `max_len` characters (not bytes).
#[must_use]
pub fn truncate_name(name: &str, max_len: usize) -> String {
    name.trim().chars().take(max_len).collect()
}
