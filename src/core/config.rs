//! Game configuration.
//!
//! Games are configured at startup by providing:
//! - `FactionRoster`: which factions exist and how they are labelled
//! - `TerritoryConfig`: the initial territory table
//! - `Mission`: the set of missions one is drawn from
//! - `GameConfig`: combines all configuration
//!
//! Nothing about the map is hardcoded: the built-in table is just
//! `GameConfig::default()`, and any other table can be loaded from TOML.
//!
//! ## TOML format
//!
//! ```toml
//! max_name_len = 31
//!
//! factions = [
//!     { faction = "neutral", name = "Neutral" },
//!     { faction = "player", name = "You" },
//!     { faction = { enemy = 0 }, name = "Red" },
//! ]
//!
//! [[territories]]
//! name = "North Island"
//! owner = "player"
//! troops = 5
//!
//! [[territories]]
//! name = "Old Village"
//! owner = { enemy = 0 }
//! troops = 4
//!
//! [[missions]]
//! kind = "own_territories"
//! count = 2
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::faction::{Faction, FactionEntry, FactionRoster};
use crate::rules::Mission;

/// Default maximum territory name length, in characters.
pub const DEFAULT_MAX_NAME_LEN: usize = 31;

/// Initial state of a single territory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryConfig {
    pub name: String,
    pub owner: Faction,
    pub troops: u32,
}

impl TerritoryConfig {
    pub fn new(name: impl Into<String>, owner: Faction, troops: u32) -> Self {
        Self {
            name: name.into(),
            owner,
            troops,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum territory name length in characters. Longer names are truncated.
    pub max_name_len: usize,

    /// Faction labels.
    pub factions: FactionRoster,

    /// Initial territory table, in display order.
    pub territories: Vec<TerritoryConfig>,

    /// Missions the game draws from.
    pub missions: Vec<Mission>,
}

impl GameConfig {
    /// Create a configuration with the default roster and no territories
    /// or missions.
    pub fn empty() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            factions: FactionRoster::default(),
            territories: Vec::new(),
            missions: Vec::new(),
        }
    }

    /// Parse a configuration from TOML. Missing keys take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Replace the faction roster.
    #[must_use]
    pub fn with_factions(mut self, factions: FactionRoster) -> Self {
        self.factions = factions;
        self
    }

    /// Add a faction label.
    #[must_use]
    pub fn with_faction(mut self, faction: Faction, name: impl Into<String>) -> Self {
        let mut entries: Vec<_> = self.factions.iter().cloned().collect();
        entries.retain(|e| e.faction != faction);
        entries.push(FactionEntry::new(faction, name));
        self.factions = FactionRoster::new(entries);
        self
    }

    /// Add a territory.
    #[must_use]
    pub fn with_territory(mut self, name: impl Into<String>, owner: Faction, troops: u32) -> Self {
        self.territories.push(TerritoryConfig::new(name, owner, troops));
        self
    }

    /// Add a mission.
    #[must_use]
    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.missions.push(mission);
        self
    }

    /// Set the maximum name length.
    #[must_use]
    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    /// Number of territory slots.
    #[must_use]
    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    /// Get a mission by index.
    pub fn mission(&self, index: usize) -> Result<&Mission, ConfigError> {
        self.missions.get(index).ok_or(ConfigError::MissionOutOfRange {
            index,
            count: self.missions.len(),
        })
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.territories.is_empty() {
            return Err(ConfigError::NoTerritories);
        }
        if self.missions.is_empty() {
            return Err(ConfigError::NoMissions);
        }
        if !self.factions.contains(Faction::Player) {
            return Err(ConfigError::NoPlayerFaction);
        }

        for territory in &self.territories {
            if !self.factions.contains(territory.owner) {
                return Err(ConfigError::UnknownOwner {
                    territory: territory.name.clone(),
                    faction: territory.owner,
                });
            }
        }

        for (index, mission) in self.missions.iter().enumerate() {
            if let Some(target) = mission.target_faction() {
                if target.enemy_id().is_none() || !self.factions.contains(target) {
                    return Err(ConfigError::InvalidMissionTarget { index, faction: target });
                }
            }
        }

        Ok(())
    }
}

impl Default for GameConfig {
    /// The classic eight-territory table.
    fn default() -> Self {
        let red = Faction::Enemy(0);
        let green = Faction::Enemy(1);

        Self::empty()
            .with_territory("North Island", Faction::Player, 5)
            .with_territory("Old Village", red, 4)
            .with_territory("Plateau", red, 3)
            .with_territory("Grove", green, 3)
            .with_territory("Fortress", green, 2)
            .with_territory("Old Bridge", Faction::Neutral, 1)
            .with_territory("Desert", red, 4)
            .with_territory("Blue Valley", Faction::Player, 6)
            .with_mission(Mission::EliminateFaction { faction: red })
            .with_mission(Mission::OwnTerritories { count: 4 })
            .with_mission(Mission::HoldGarrison { troops: 10 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.territory_count(), 8);
        assert_eq!(config.missions.len(), 3);
        assert_eq!(config.max_name_len, DEFAULT_MAX_NAME_LEN);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::empty()
            .with_faction(Faction::Enemy(5), "Purple")
            .with_territory("A", Faction::Player, 3)
            .with_territory("B", Faction::Enemy(5), 1)
            .with_mission(Mission::OwnTerritories { count: 2 })
            .with_max_name_len(10);

        assert!(config.validate().is_ok());
        assert_eq!(config.factions.label(Faction::Enemy(5)), "Purple");
        assert_eq!(config.max_name_len, 10);
    }

    #[test]
    fn test_with_faction_replaces_label() {
        let config = GameConfig::empty().with_faction(Faction::Player, "Me");
        assert_eq!(config.factions.label(Faction::Player), "Me");
        assert_eq!(config.factions.len(), 4);
    }

    #[test]
    fn test_validate_rejects_empty_tables() {
        let no_territories = GameConfig::empty().with_mission(Mission::OwnTerritories { count: 1 });
        assert!(matches!(no_territories.validate(), Err(ConfigError::NoTerritories)));

        let no_missions = GameConfig::empty().with_territory("A", Faction::Player, 1);
        assert!(matches!(no_missions.validate(), Err(ConfigError::NoMissions)));
    }

    #[test]
    fn test_validate_rejects_unknown_owner() {
        let config = GameConfig::empty()
            .with_territory("A", Faction::Enemy(7), 1)
            .with_mission(Mission::OwnTerritories { count: 1 });

        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownOwner { faction: Faction::Enemy(7), .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_enemy_mission_target() {
        let config = GameConfig::empty()
            .with_territory("A", Faction::Player, 1)
            .with_mission(Mission::EliminateFaction { faction: Faction::Neutral });

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMissionTarget { index: 0, .. })
        ));
    }

    #[test]
    fn test_from_toml() {
        let source = r#"
            max_name_len = 12

            [[territories]]
            name = "Harbour"
            owner = "player"
            troops = 4

            [[territories]]
            name = "Keep"
            owner = { enemy = 1 }
            troops = 2

            [[missions]]
            kind = "eliminate_faction"
            faction = { enemy = 1 }

            [[missions]]
            kind = "hold_garrison"
            troops = 6
        "#;

        let config = GameConfig::from_toml_str(source).unwrap();

        assert_eq!(config.max_name_len, 12);
        assert_eq!(config.territories[1], TerritoryConfig::new("Keep", Faction::Enemy(1), 2));
        assert_eq!(config.missions[1], Mission::HoldGarrison { troops: 6 });
        // Roster falls back to the default labels
        assert_eq!(config.factions.label(Faction::Enemy(1)), "Green");
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(matches!(
            GameConfig::from_toml_str("territories = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_mission_out_of_range() {
        let config = GameConfig::default();
        assert!(config.mission(2).is_ok());
        assert!(matches!(
            config.mission(3),
            Err(ConfigError::MissionOutOfRange { index: 3, count: 3 })
        ));
    }
}
