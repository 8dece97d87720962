//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which attacks are legal
//! - How actions modify state
//! - Win conditions

use crate::core::{Action, AttackError, Faction, GameConfig, GameState, TerritoryId};
use crate::rules::combat::BattleReport;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A faction fulfilled its mission.
    Victory(Faction),
    /// The mission is unmet and no legal attack remains.
    Stalemate,
}

impl GameResult {
    /// Check if a faction won.
    #[must_use]
    pub fn is_winner(&self, faction: Faction) -> bool {
        matches!(self, GameResult::Victory(f) if *f == faction)
    }
}

/// What applying an action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// An attack was resolved.
    Battle(BattleReport),
    /// The mission was evaluated. `result` is set when the game is over.
    MissionChecked {
        complete: bool,
        result: Option<GameResult>,
    },
    /// The player left.
    Exit,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_sources`: empty if the faction cannot attack at all
/// - `legal_targets`: called per source, like building an action
///   pointer by pointer
/// - `apply_action`: rejected actions must leave `state` untouched
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Territories `faction` can attack from.
    fn legal_sources(&self, state: &GameState, faction: Faction) -> Vec<TerritoryId>;

    /// Territories `faction` can attack from `from`.
    fn legal_targets(&self, state: &GameState, faction: Faction, from: TerritoryId) -> Vec<TerritoryId>;

    /// Apply an action to the game state.
    fn apply_action(
        &mut self,
        state: &mut GameState,
        faction: Faction,
        action: &Action,
    ) -> Result<ActionOutcome, AttackError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Enumerate every legal attack for a faction.
    fn legal_attacks(&self, state: &GameState, faction: Faction) -> Vec<Action> {
        let mut actions = Vec::new();

        for from in self.legal_sources(state, faction) {
            for to in self.legal_targets(state, faction, from) {
                actions.push(Action::attack(from, to));
            }
        }

        actions
    }

    /// Enumerate every legal action for a faction, menu actions included.
    fn legal_actions(&self, state: &GameState, faction: Faction) -> Vec<Action> {
        let mut actions = self.legal_attacks(state, faction);
        actions.push(Action::CheckMission);
        actions.push(Action::Exit);
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Victory(Faction::Player);
        assert!(result.is_winner(Faction::Player));
        assert!(!result.is_winner(Faction::Enemy(0)));

        assert!(!GameResult::Stalemate.is_winner(Faction::Player));
    }
}
