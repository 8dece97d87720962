//! Game rules: attack resolution, missions, and the rules engine trait.
//!
//! - `combat`: resolves one round of dice combat and conquest
//! - `mission`: victory conditions, evaluated without mutating state
//! - `engine`: the `RulesEngine` trait games implement
//!
//! The console never interprets combat or mission rules directly; it goes
//! through `RulesEngine`.

pub mod combat;
pub mod engine;
pub mod mission;

pub use combat::{resolve_attack, validate_attack, validate_source, BattleReport, Casualties};
pub use engine::{ActionOutcome, GameResult, RulesEngine};
pub use mission::{draw_mission, Mission};
