//! Territory war game implementation.

use tracing::info;

use crate::core::{
    Action, ActionRecord, AttackError, ConfigError, Faction, FactionRoster, GameConfig, GameRng,
    GameState, Territory, TerritoryId,
};
use crate::rules::combat::{self, MIN_ATTACK_TROOPS};
use crate::rules::{draw_mission, ActionOutcome, GameResult, Mission, RulesEngine};

/// A configured game with its mission drawn.
#[derive(Clone, Debug)]
pub struct WarGame {
    config: GameConfig,
    mission_index: usize,
}

/// Builder for creating a WarGame.
#[derive(Default)]
pub struct WarGameBuilder {
    config: GameConfig,
    seed: Option<u64>,
    mission: Option<usize>,
    territories: Option<Vec<Territory>>,
}

impl WarGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed. Without one the game is seeded from the OS.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Play a specific mission instead of drawing one.
    pub fn mission(mut self, index: usize) -> Self {
        self.mission = Some(index);
        self
    }

    /// Use these territories instead of the configured table.
    pub fn territories(mut self, territories: Vec<Territory>) -> Self {
        self.territories = Some(territories);
        self
    }

    /// Build the game and initial state.
    pub fn build(self) -> Result<(WarGame, GameState), ConfigError> {
        self.config.validate()?;

        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);

        let max_name_len = self.config.max_name_len;
        let territories = match self.territories {
            Some(territories) => territories,
            None => self
                .config
                .territories
                .iter()
                .map(|t| Territory::bounded(&t.name, t.owner, t.troops, max_name_len))
                .collect(),
        };
        if territories.is_empty() {
            return Err(ConfigError::NoTerritories);
        }

        let mission_index = match self.mission {
            Some(index) => {
                self.config.mission(index)?;
                index
            }
            None => draw_mission(&rng, self.config.missions.len()).ok_or(ConfigError::NoMissions)?,
        };

        info!(
            seed = rng.seed(),
            territories = territories.len(),
            mission = mission_index,
            "game set up"
        );

        let game = WarGame {
            config: self.config,
            mission_index,
        };
        let state = GameState::with_rng(territories, rng);

        Ok((game, state))
    }
}

impl WarGame {
    /// The human player's faction.
    #[must_use]
    pub fn player(&self) -> Faction {
        Faction::Player
    }

    /// The mission being played.
    #[must_use]
    pub fn mission(&self) -> &Mission {
        &self.config.missions[self.mission_index]
    }

    /// Index of the mission in the configured mission set.
    #[must_use]
    pub fn mission_index(&self) -> usize {
        self.mission_index
    }

    /// Faction labels.
    #[must_use]
    pub fn roster(&self) -> &FactionRoster {
        &self.config.factions
    }

    fn record(&self, state: &mut GameState, faction: Faction, action: Action, conquest: bool) {
        let seq = state.next_sequence();
        state.record_action(
            ActionRecord::new(faction, action, state.turn_number, seq).with_conquest(conquest),
        );
    }
}

impl RulesEngine for WarGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_sources(&self, state: &GameState, faction: Faction) -> Vec<TerritoryId> {
        state
            .owned_by(faction)
            .filter(|(_, t)| t.troops >= MIN_ATTACK_TROOPS)
            .map(|(id, _)| id)
            .filter(|&id| !self.legal_targets(state, faction, id).is_empty())
            .collect()
    }

    fn legal_targets(&self, state: &GameState, faction: Faction, from: TerritoryId) -> Vec<TerritoryId> {
        TerritoryId::all(state.territory_count())
            .filter(|&to| combat::validate_attack(state, faction, from, to).is_ok())
            .collect()
    }

    fn apply_action(
        &mut self,
        state: &mut GameState,
        faction: Faction,
        action: &Action,
    ) -> Result<ActionOutcome, AttackError> {
        let outcome = match *action {
            Action::Attack { from, to } => {
                let report = combat::resolve_attack(state, faction, from, to)?;
                self.record(state, faction, *action, report.conquered);
                ActionOutcome::Battle(report)
            }
            Action::CheckMission => {
                let complete = self.mission().is_complete(state, faction);
                let result = self.is_terminal(state);
                info!(complete, ?result, "mission checked");
                self.record(state, faction, *action, false);
                ActionOutcome::MissionChecked { complete, result }
            }
            Action::Exit => {
                self.record(state, faction, *action, false);
                return Ok(ActionOutcome::Exit);
            }
        };

        state.advance_turn();
        Ok(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        let player = self.player();

        if self.mission().is_complete(state, player) {
            Some(GameResult::Victory(player))
        } else if self.legal_sources(state, player).is_empty() {
            Some(GameResult::Stalemate)
        } else {
            None
        }
    }
}
