//! Faction identity and per-faction display labels.
//!
//! ## Faction
//!
//! Who owns a territory: the neutral pool, the human player, or one of the
//! enemy colours. Factions are compared by value, never by name.
//!
//! ## FactionRoster
//!
//! Display labels per faction, configured as data. Lookup by label is used
//! when territories are registered interactively.

use serde::{Deserialize, Serialize};

/// Owner of a territory.
///
/// Enemy factions are numbered from 0; the number is an opaque id that
/// only needs to match between the roster, the territory table and the
/// missions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    /// Unclaimed territory.
    Neutral,
    /// The human player.
    Player,
    /// An enemy colour.
    Enemy(u8),
}

impl Faction {
    /// Is this the human player?
    #[must_use]
    pub const fn is_player(self) -> bool {
        matches!(self, Faction::Player)
    }

    /// Is this the neutral pool?
    #[must_use]
    pub const fn is_neutral(self) -> bool {
        matches!(self, Faction::Neutral)
    }

    /// Is this the enemy with the given id?
    #[must_use]
    pub fn is_enemy(self, id: u8) -> bool {
        self == Faction::Enemy(id)
    }

    /// Can the player attack territories owned by this faction?
    #[must_use]
    pub const fn is_hostile(self) -> bool {
        !self.is_player()
    }

    /// Enemy id, if this is an enemy faction.
    #[must_use]
    pub const fn enemy_id(self) -> Option<u8> {
        match self {
            Faction::Enemy(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Neutral => write!(f, "Neutral"),
            Faction::Player => write!(f, "Player"),
            Faction::Enemy(id) => write!(f, "Enemy {}", id),
        }
    }
}

/// A faction together with its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionEntry {
    pub faction: Faction,
    pub name: String,
}

impl FactionEntry {
    pub fn new(faction: Faction, name: impl Into<String>) -> Self {
        Self {
            faction,
            name: name.into(),
        }
    }
}

/// Display labels for every faction in play.
///
/// ## Example
///
/// ```
/// use territory_war::core::{Faction, FactionRoster};
///
/// let roster = FactionRoster::default();
/// assert_eq!(roster.label(Faction::Player), "You");
/// assert_eq!(roster.find("red"), Some(Faction::Enemy(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactionRoster {
    entries: Vec<FactionEntry>,
}

impl FactionRoster {
    /// Label shown for factions missing from the roster.
    pub const UNKNOWN_LABEL: &'static str = "?";

    /// Create a roster from explicit entries.
    #[must_use]
    pub fn new(entries: Vec<FactionEntry>) -> Self {
        Self { entries }
    }

    /// Does the roster have a label for this faction?
    #[must_use]
    pub fn contains(&self, faction: Faction) -> bool {
        self.entries.iter().any(|e| e.faction == faction)
    }

    /// Display label for a faction.
    #[must_use]
    pub fn label(&self, faction: Faction) -> &str {
        self.entries
            .iter()
            .find(|e| e.faction == faction)
            .map_or(Self::UNKNOWN_LABEL, |e| e.name.as_str())
    }

    /// Find a faction by its label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<Faction> {
        let label = label.trim();
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(label))
            .map(|e| e.faction)
    }

    /// Iterate over all factions in roster order.
    pub fn factions(&self) -> impl Iterator<Item = Faction> + '_ {
        self.entries.iter().map(|e| e.faction)
    }

    /// Iterate over all roster entries.
    pub fn iter(&self) -> impl Iterator<Item = &FactionEntry> {
        self.entries.iter()
    }

    /// Number of factions in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the roster empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FactionRoster {
    fn default() -> Self {
        Self::new(vec![
            FactionEntry::new(Faction::Neutral, "Neutral"),
            FactionEntry::new(Faction::Player, "You"),
            FactionEntry::new(Faction::Enemy(0), "Red"),
            FactionEntry::new(Faction::Enemy(1), "Green"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_capabilities() {
        assert!(Faction::Player.is_player());
        assert!(!Faction::Player.is_hostile());
        assert!(Faction::Neutral.is_neutral());
        assert!(Faction::Neutral.is_hostile());
        assert!(Faction::Enemy(1).is_enemy(1));
        assert!(!Faction::Enemy(1).is_enemy(0));
        assert!(!Faction::Player.is_enemy(0));
        assert_eq!(Faction::Enemy(3).enemy_id(), Some(3));
        assert_eq!(Faction::Neutral.enemy_id(), None);
    }

    #[test]
    fn test_faction_display() {
        assert_eq!(format!("{}", Faction::Enemy(2)), "Enemy 2");
        assert_eq!(format!("{}", Faction::Player), "Player");
    }

    #[test]
    fn test_roster_labels() {
        let roster = FactionRoster::default();

        assert_eq!(roster.len(), 4);
        assert_eq!(roster.label(Faction::Enemy(1)), "Green");
        assert_eq!(roster.label(Faction::Enemy(9)), FactionRoster::UNKNOWN_LABEL);
        assert!(roster.contains(Faction::Neutral));
        assert!(!roster.contains(Faction::Enemy(9)));
    }

    #[test]
    fn test_roster_find_ignores_case() {
        let roster = FactionRoster::default();

        assert_eq!(roster.find("  GREEN "), Some(Faction::Enemy(1)));
        assert_eq!(roster.find("you"), Some(Faction::Player));
        assert_eq!(roster.find("purple"), None);
    }

    #[test]
    fn test_faction_toml_form() {
        #[derive(Deserialize)]
        struct Wrapper {
            a: Faction,
            b: Faction,
        }

        let parsed: Wrapper = toml::from_str("a = \"neutral\"\nb = { enemy = 4 }").unwrap();
        assert_eq!(parsed.a, Faction::Neutral);
        assert_eq!(parsed.b, Faction::Enemy(4));
    }
}
