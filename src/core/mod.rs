//! Core game types: factions, territories, state, actions, RNG, configuration, errors.
//!
//! This module contains the building blocks every other module shares.
//! Games are configured via `GameConfig` rather than by modifying the core.

pub mod faction;
pub mod territory;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use faction::{Faction, FactionEntry, FactionRoster};
pub use territory::{truncate_name, Territory, TerritoryId};
pub use rng::{DiceRoll, GameRng, DIE_FACES};
pub use config::{GameConfig, TerritoryConfig, DEFAULT_MAX_NAME_LEN};
pub use action::{Action, ActionRecord};
pub use state::GameState;
pub use error::{AttackError, ConfigError, GameError, Result};
