//! Error types.
//!
//! - `ConfigError`: the game cannot be set up. Fatal.
//! - `AttackError`: an attack was rejected. Reported, play continues.
//! - `GameError`: everything a session can fail with.

use thiserror::Error;

use super::faction::Faction;
use super::territory::TerritoryId;

/// Setup failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("the territory table is empty")]
    NoTerritories,

    #[error("the mission set is empty")]
    NoMissions,

    #[error("the faction roster has no entry for the player")]
    NoPlayerFaction,

    #[error("territory '{territory}' is owned by {faction}, which is not in the faction roster")]
    UnknownOwner { territory: String, faction: Faction },

    #[error("mission {index} targets {faction}, which is not an enemy in the faction roster")]
    InvalidMissionTarget { index: usize, faction: Faction },

    #[error("mission index {index} is out of range ({count} missions configured)")]
    MissionOutOfRange { index: usize, count: usize },
}

/// Reasons an attack is rejected. State is never mutated when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    #[error("territory {0} does not exist")]
    OutOfRange(TerritoryId),

    #[error("a territory cannot attack itself")]
    SameTerritory,

    #[error("you do not control {0}")]
    NotOwned(String),

    #[error("{name} needs at least 2 troops to attack (it has {troops})")]
    NotEnoughTroops { name: String, troops: u32 },

    #[error("{0} already belongs to you")]
    FriendlyTarget(String),

    #[error("{0} has no troops left to defeat")]
    EmptyTarget(String),

    #[error("the attacker must roll {expected} dice, not {rolled}")]
    AttackerDice { expected: usize, rolled: usize },

    #[error("the defender must roll {expected} dice, not {rolled}")]
    DefenderDice { expected: usize, rolled: usize },

    #[error("a die cannot show {0}")]
    DieFace(u8),
}

/// Any failure surfaced by a game session.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("attack rejected: {0}")]
    Attack(#[from] AttackError),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_error_messages() {
        let err = AttackError::NotEnoughTroops {
            name: "Desert".to_string(),
            troops: 1,
        };
        assert_eq!(err.to_string(), "Desert needs at least 2 troops to attack (it has 1)");
        assert_eq!(
            AttackError::OutOfRange(TerritoryId(12)).to_string(),
            "territory #12 does not exist"
        );
    }

    #[test]
    fn test_game_error_wraps_attack() {
        let err: GameError = AttackError::SameTerritory.into();
        assert!(matches!(err, GameError::Attack(AttackError::SameTerritory)));
        assert_eq!(err.to_string(), "attack rejected: a territory cannot attack itself");
    }
}
