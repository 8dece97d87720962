//! The interactive game loop.
//!
//! Each iteration prints the map, the mission and the menu, reads a choice
//! and dispatches it through `RulesEngine`. The loop ends when the player
//! exits, input runs out, or a mission check ends the game.

use std::io::{BufRead, Write};

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use super::display::{render_battle, render_map, render_menu, render_mission, render_summary};
use super::input::{Console, NumberInput};
use crate::core::{Action, Faction, GameState, Result, TerritoryId};
use crate::games::war::WarGame;
use crate::rules::{validate_source, ActionOutcome, GameResult, RulesEngine};

/// Menu choice: start the attack phase.
pub const MENU_ATTACK: i64 = 1;
/// Menu choice: check the mission.
pub const MENU_CHECK_MISSION: i64 = 2;
/// Menu choice: leave.
pub const MENU_EXIT: i64 = 0;

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOutcome {
    /// `None` when the player left before the game was decided.
    pub result: Option<GameResult>,
    /// Turns played.
    pub turns: u32,
    /// Attacks resolved.
    pub attacks: usize,
    /// Territories conquered.
    pub conquests: usize,
    /// Troops left on the map per faction.
    pub troops: FxHashMap<Faction, u64>,
}

enum Flow {
    Continue,
    Stop(Option<GameResult>),
}

/// A game being played on a console.
pub struct Session<R, W> {
    game: WarGame,
    state: GameState,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: WarGame, state: GameState, console: Console<R, W>) -> Self {
        Self { game, state, console }
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &WarGame {
        &self.game
    }

    /// The console, with everything written so far.
    #[must_use]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Play until the game ends or the player leaves.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        info!(mission = ?self.game.mission(), "session started");

        let result = loop {
            self.show_board()?;

            let flow = match self.console.prompt_number("Choice: ")? {
                NumberInput::Eof => Flow::Stop(None),
                NumberInput::Value(MENU_ATTACK) => self.attack_phase()?,
                NumberInput::Value(MENU_CHECK_MISSION) => self.check_mission()?,
                NumberInput::Value(MENU_EXIT) => {
                    let player = self.game.player();
                    self.game.apply_action(&mut self.state, player, &Action::Exit)?;
                    Flow::Stop(None)
                }
                NumberInput::Value(_) | NumberInput::Invalid => {
                    self.console.println("Invalid option. Try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop(result) = flow {
                break result;
            }
        };

        let outcome = self.outcome(result);
        self.console.println("")?;
        self.console.print(&render_summary(&outcome, self.game.roster()))?;
        info!(?outcome, "session ended");

        Ok(outcome)
    }

    fn show_board(&mut self) -> Result<()> {
        let roster = self.game.roster();
        let board = format!(
            "\n=== MAP (turn {}) ===\n{}\n=== MISSION ===\n{}\n{}",
            self.state.turn_number,
            render_map(&self.state, roster),
            render_mission(self.game.mission(), &self.state, self.game.player(), roster),
            render_menu()
        );
        self.console.print(&board)?;
        Ok(())
    }

    fn attack_phase(&mut self) -> Result<Flow> {
        let player = self.game.player();

        self.console.println("\n-- ATTACK PHASE --")?;
        let from = match self
            .console
            .prompt_number("Index of the source territory (one of yours): ")?
        {
            NumberInput::Eof => return Ok(Flow::Stop(None)),
            input => input.as_index(),
        };
        let Some(from) = from.map(TerritoryId) else {
            self.console.println("Invalid source.")?;
            return Ok(Flow::Continue);
        };
        if let Err(err) = validate_source(&self.state, player, from) {
            warn!(%err, "attack source rejected");
            self.console.println(&format!("Attack cancelled: {}.", err))?;
            return Ok(Flow::Continue);
        }

        let to = match self.console.prompt_number("Index of the target territory: ")? {
            NumberInput::Eof => return Ok(Flow::Stop(None)),
            input => input.as_index(),
        };
        let Some(to) = to.map(TerritoryId) else {
            self.console.println("Invalid target.")?;
            return Ok(Flow::Continue);
        };

        match self
            .game
            .apply_action(&mut self.state, player, &Action::attack(from, to))
        {
            Ok(ActionOutcome::Battle(report)) => {
                self.console.println("")?;
                self.console.print(&render_battle(&report, self.game.roster()))?;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "attack rejected");
                self.console.println(&format!("Attack cancelled: {}.", err))?;
            }
        }

        Ok(Flow::Continue)
    }

    fn check_mission(&mut self) -> Result<Flow> {
        let player = self.game.player();
        let outcome = self
            .game
            .apply_action(&mut self.state, player, &Action::CheckMission)?;

        let ActionOutcome::MissionChecked { result, .. } = outcome else {
            return Ok(Flow::Continue);
        };

        match result {
            Some(result) => Ok(Flow::Stop(Some(result))),
            None => {
                self.console
                    .println("\nMission not accomplished yet. Keep trying!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn outcome(&self, result: Option<GameResult>) -> SessionOutcome {
        let history = self.state.history();
        SessionOutcome {
            result,
            turns: self.state.turn_number - 1,
            attacks: history.iter().filter(|r| r.action.is_attack()).count(),
            conquests: history.iter().filter(|r| r.conquest).count(),
            troops: self.state.troops_by_faction(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::games::war::WarGameBuilder;
    use crate::rules::Mission;
    use std::io::Cursor;

    fn session(config: GameConfig, input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let (game, state) = WarGameBuilder::new().config(config).seed(5).build().unwrap();
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        Session::new(game, state, console)
    }

    fn output(session: &Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(session.console().output()).into_owned()
    }

    #[test]
    fn test_exit_immediately() {
        let mut s = session(GameConfig::default(), "0\n");
        let outcome = s.run().unwrap();

        assert_eq!(outcome.result, None);
        assert_eq!(outcome.turns, 0);
        assert!(output(&s).contains("Leaving the game..."));
    }

    #[test]
    fn test_summary_reports_troops_left() {
        let mut s = session(GameConfig::default(), "0\n");
        let outcome = s.run().unwrap();

        assert_eq!(outcome.troops.get(&Faction::Player), Some(&11));
        assert_eq!(outcome.troops.get(&Faction::Enemy(0)), Some(&11));
        assert!(output(&s).contains("Troops left: Neutral 1 | You 11 | Red 11 | Green 5"));
    }

    #[test]
    fn test_eof_is_exit() {
        let mut s = session(GameConfig::default(), "");
        assert_eq!(s.run().unwrap().result, None);
    }

    #[test]
    fn test_invalid_option() {
        let mut s = session(GameConfig::default(), "9\nhello\n0\n");
        s.run().unwrap();

        assert_eq!(output(&s).matches("Invalid option. Try again.").count(), 2);
    }

    #[test]
    fn test_immediate_victory() {
        let config = GameConfig::empty()
            .with_territory("Harbour", Faction::Player, 3)
            .with_territory("Keep", Faction::Enemy(0), 1)
            .with_mission(Mission::HoldGarrison { troops: 3 });
        let mut s = session(config, "2\n");

        let outcome = s.run().unwrap();

        assert_eq!(outcome.result, Some(GameResult::Victory(Faction::Player)));
        assert!(output(&s).contains("won the game"));
    }

    #[test]
    fn test_mission_not_yet() {
        // None of the default missions is met by the starting table
        let mut s = session(GameConfig::default(), "2\n0\n");

        let outcome = s.run().unwrap();

        assert_eq!(outcome.result, None);
        assert_eq!(outcome.turns, 1);
        assert!(output(&s).contains("Mission not accomplished yet"));
    }

    #[test]
    fn test_rejected_source_is_reported() {
        // Territory 1 belongs to Red in the default table
        let mut s = session(GameConfig::default(), "1\n1\n0\n");
        let before = s.state().territories().to_vec();

        s.run().unwrap();

        assert!(output(&s).contains("Attack cancelled: you do not control Old Village."));
        assert_eq!(s.state().territories(), &before[..]);
    }

    #[test]
    fn test_bad_index_is_reported() {
        let mut s = session(GameConfig::default(), "1\n-2\n1\n0\nxyz\n0\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Invalid source."));
        assert!(out.contains("Invalid target."));
    }

    #[test]
    fn test_attack_prints_battle_log() {
        let config = GameConfig::empty()
            .with_territory("Harbour", Faction::Player, 6)
            .with_territory("Keep", Faction::Enemy(0), 1)
            .with_mission(Mission::OwnTerritories { count: 2 });
        let mut s = session(config, "1\n0\n1\n0\n");

        let outcome = s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("--- BATTLE: Harbour (You) attacks Keep (Red) ---"));
        assert_eq!(outcome.attacks, 1);
        assert_eq!(outcome.turns, 1);
        assert_eq!(
            outcome.conquests,
            usize::from(s.state().get(TerritoryId(1)).unwrap().owner == Faction::Player)
        );
    }
}
