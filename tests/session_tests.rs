//! Console session integration tests.
//!
//! Each test scripts the player's keystrokes and plays a whole game on
//! in-memory buffers, then checks the outcome and the printed transcript.

use std::io::Cursor;

use territory_war::console::{register_territories, Console, Session, SessionOutcome};
use territory_war::core::{Faction, GameConfig, Territory, TerritoryId};
use territory_war::games::war::WarGameBuilder;
use territory_war::rules::{GameResult, Mission};

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn play(config: GameConfig, seed: u64, input: &str) -> (SessionOutcome, TestSession) {
    let (game, state) = WarGameBuilder::new().config(config).seed(seed).build().unwrap();
    let mut session = Session::new(game, state, console(input));
    let outcome = session.run().unwrap();
    (outcome, session)
}

fn transcript(session: &TestSession) -> String {
    String::from_utf8_lossy(session.console().output()).into_owned()
}

/// Attack a lone defender until it falls, then claim the win.
#[test]
fn test_conquer_and_win() {
    let config = GameConfig::empty()
        .with_territory("Harbour", Faction::Player, 20)
        .with_territory("Keep", Faction::Enemy(0), 1)
        .with_mission(Mission::OwnTerritories { count: 2 });
    let input = format!("{}2\n", "1\n0\n1\n".repeat(15));

    let (outcome, session) = play(config, 11, &input);

    assert_eq!(outcome.result, Some(GameResult::Victory(Faction::Player)));
    assert_eq!(outcome.conquests, 1);
    assert!(outcome.attacks >= 1);

    let keep = session.state().get(TerritoryId(1)).unwrap();
    assert_eq!(keep.owner, Faction::Player);
    assert_eq!(keep.troops, 1);

    let out = transcript(&session);
    assert!(out.contains("Keep has been CONQUERED!"));
    assert!(out.contains("won the game"));
}

/// Attacks after the conquest are refused and reported.
#[test]
fn test_attack_own_territory_is_refused() {
    let config = GameConfig::empty()
        .with_territory("Harbour", Faction::Player, 5)
        .with_territory("Cove", Faction::Player, 2)
        .with_territory("Keep", Faction::Enemy(0), 3)
        .with_mission(Mission::OwnTerritories { count: 3 });

    let (outcome, session) = play(config, 4, "1\n0\n1\n0\n");

    assert_eq!(outcome.result, None);
    assert_eq!(outcome.attacks, 0);
    assert!(transcript(&session).contains("Attack cancelled: Cove already belongs to you."));
}

/// Checking the mission with nothing left to attack ends the game.
#[test]
fn test_stalemate_ends_session() {
    let config = GameConfig::empty()
        .with_territory("Harbour", Faction::Player, 1)
        .with_territory("Keep", Faction::Enemy(0), 4)
        .with_mission(Mission::EliminateFaction { faction: Faction::Enemy(0) });

    let (outcome, session) = play(config, 2, "2\n0\n");

    assert_eq!(outcome.result, Some(GameResult::Stalemate));
    assert_eq!(outcome.turns, 1);
    assert!(transcript(&session).contains("Game over."));
}

/// The map and mission banner are redrawn every round.
#[test]
fn test_board_shown_each_round() {
    let (_, session) = play(GameConfig::default(), 8, "5\n0\n");

    let out = transcript(&session);
    assert_eq!(out.matches("--- MAIN MENU ---").count(), 2);
    assert_eq!(out.matches("=== MISSION ===").count(), 2);
    assert!(out.contains("North Island"));
}

/// Registered territories replace the configured table for the whole game.
#[test]
fn test_registered_game() {
    let config = GameConfig::empty()
        .with_territory("Harbour", Faction::Player, 1)
        .with_territory("Keep", Faction::Enemy(0), 1)
        .with_mission(Mission::HoldGarrison { troops: 9 });
    let mut console = console("Lighthouse\nYou\n9\nMarsh\nRed\n2\n2\n");

    let territories = register_territories(&mut console, &config).unwrap();
    let (game, state) = WarGameBuilder::new()
        .config(config)
        .territories(territories)
        .seed(6)
        .build()
        .unwrap();
    let mut session = Session::new(game, state, console);

    let outcome = session.run().unwrap();

    assert_eq!(outcome.result, Some(GameResult::Victory(Faction::Player)));
    assert_eq!(
        session.state().territories(),
        &[
            Territory::new("Lighthouse", Faction::Player, 9),
            Territory::new("Marsh", Faction::Enemy(0), 2),
        ][..]
    );
}

/// The same seed and keystrokes replay the same game.
#[test]
fn test_seeded_sessions_replay() {
    let input = "1\n0\n1\n1\n7\n6\n2\n0\n";

    let (a, sa) = play(GameConfig::default(), 21, input);
    let (b, sb) = play(GameConfig::default(), 21, input);

    assert_eq!(a, b);
    assert_eq!(sa.state().territories(), sb.state().territories());
    assert_eq!(transcript(&sa), transcript(&sb));
}
