//! # territory-war
//!
//! A turn-based territory conquest game for the console.
//!
//! ## Design Principles
//!
//! 1. **Data, not constants**: the territory table, faction labels and
//!    mission set come from `GameConfig` (built in, or loaded from TOML).
//!
//! 2. **Factions by value**: ownership is a `Faction` enum compared by
//!    value and passed explicitly; there is no global "player colour".
//!
//! 3. **Exclusive ownership**: `GameState` owns the territory store. Attack
//!    resolution is the only game rule that mutates it; mission checks only
//!    read it.
//!
//! ## Modules
//!
//! - `core`: factions, territories, state, actions, RNG, configuration, errors
//! - `rules`: attack resolution, missions, the `RulesEngine` trait
//! - `games`: the territory war game and its builder
//! - `console`: text rendering, input, registration, and the game loop

pub mod core;
pub mod rules;
pub mod games;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    Faction, FactionEntry, FactionRoster,
    Territory, TerritoryId,
    GameRng, DiceRoll,
    GameConfig, TerritoryConfig,
    Action, ActionRecord,
    GameState,
    AttackError, ConfigError, GameError,
};

pub use crate::rules::{
    RulesEngine, GameResult, ActionOutcome,
    BattleReport, Casualties, Mission,
    resolve_attack, validate_attack, validate_source,
};

pub use crate::games::war::{WarGame, WarGameBuilder};

pub use crate::console::{Console, NumberInput, Session, SessionOutcome};
