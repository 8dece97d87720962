//! Text rendering for the console. Every function here is pure formatting.

use std::fmt::Write as _;

use crate::core::{Faction, FactionRoster, GameState};
use crate::rules::{BattleReport, GameResult, Mission};

use super::session::SessionOutcome;

const IDX_HEADER: &str = "Idx";
const NAME_HEADER: &str = "Name";
const OWNER_HEADER: &str = "Owner";
const TROOPS_HEADER: &str = "Troops";

/// The territory table.
///
/// ```text
/// Idx | Name         | Owner   | Troops
/// ----+--------------+---------+-------
///   0 | North Island | You     | 5
/// ```
#[must_use]
pub fn render_map(state: &GameState, roster: &FactionRoster) -> String {
    let name_width = state
        .territories()
        .iter()
        .map(|t| t.name.chars().count())
        .chain(std::iter::once(NAME_HEADER.len()))
        .max()
        .unwrap_or(NAME_HEADER.len());
    let owner_width = state
        .territories()
        .iter()
        .map(|t| roster.label(t.owner).chars().count())
        .chain(std::iter::once(OWNER_HEADER.len()))
        .max()
        .unwrap_or(OWNER_HEADER.len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3} | {:<nw$} | {:<ow$} | {}",
        IDX_HEADER,
        NAME_HEADER,
        OWNER_HEADER,
        TROOPS_HEADER,
        nw = name_width,
        ow = owner_width
    );
    let _ = writeln!(
        out,
        "{}+{}+{}+{}",
        "-".repeat(4),
        "-".repeat(name_width + 2),
        "-".repeat(owner_width + 2),
        "-".repeat(TROOPS_HEADER.len() + 1)
    );

    for (id, territory) in state.iter() {
        let _ = writeln!(
            out,
            "{:>3} | {:<nw$} | {:<ow$} | {}",
            id.index(),
            territory.name,
            roster.label(territory.owner),
            territory.troops,
            nw = name_width,
            ow = owner_width
        );
    }

    out
}

/// The main menu.
#[must_use]
pub fn render_menu() -> String {
    [
        "--- MAIN MENU ---",
        "1 - Attack (start the attack phase)",
        "2 - Check mission / victory condition",
        "0 - Exit",
        "",
    ]
    .join("\n")
}

/// The mission banner with its progress line.
#[must_use]
pub fn render_mission(mission: &Mission, state: &GameState, player: Faction, roster: &FactionRoster) -> String {
    format!(
        "Mission: {}\n  {}\n",
        mission.describe(roster),
        mission.status(state, player, roster)
    )
}

/// The battle log for one round.
#[must_use]
pub fn render_battle(report: &BattleReport, roster: &FactionRoster) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "--- BATTLE: {} ({}) attacks {} ({}) ---",
        report.attacker_name,
        roster.label(report.attacker),
        report.defender_name,
        roster.label(report.defender)
    );
    let _ = writeln!(out, "Attacker rolls: {}", format_dice(&report.attacker_rolls));
    let _ = writeln!(out, "Defender rolls: {}", format_dice(&report.defender_rolls));
    let _ = writeln!(
        out,
        "Attacker loses {}, defender loses {}.",
        report.casualties.attacker, report.casualties.defender
    );

    if report.conquered {
        let _ = writeln!(out, "{} has been CONQUERED!", report.defender_name);
        if report.garrison > 0 {
            let _ = writeln!(
                out,
                "{} {} from {} into {}.",
                report.garrison,
                troop_noun(report.garrison),
                report.attacker_name,
                report.defender_name
            );
        } else {
            let _ = writeln!(out, "No troop can be spared; {} is left empty.", report.defender_name);
        }
    }

    let _ = writeln!(
        out,
        "{}: {} {} | {}: {} {}",
        report.attacker_name,
        report.attacker_troops,
        troop_noun(report.attacker_troops),
        report.defender_name,
        report.defender_troops,
        troop_noun(report.defender_troops)
    );

    out
}

/// End-of-game summary, with the troops each faction has left in roster order.
#[must_use]
pub fn render_summary(outcome: &SessionOutcome, roster: &FactionRoster) -> String {
    let headline = match outcome.result {
        Some(GameResult::Victory(_)) => "Congratulations! You completed your mission and won the game!",
        Some(GameResult::Stalemate) => "No attack is possible anymore and the mission is unmet. Game over.",
        None => "Leaving the game...",
    };

    let troops = roster
        .factions()
        .filter_map(|faction| {
            outcome
                .troops
                .get(&faction)
                .map(|count| format!("{} {}", roster.label(faction), count))
        })
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "{}\nTurns played: {} | attacks: {} | conquests: {}\nTroops left: {}\n",
        headline,
        outcome.turns,
        outcome.attacks,
        outcome.conquests,
        troops
    )
}

fn format_dice(dice: &[u8]) -> String {
    dice.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn troop_noun(count: u32) -> &'static str {
    if count == 1 {
        "troop"
    } else {
        "troops"
    }
}
