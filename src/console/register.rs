//! Interactive territory registration.
//!
//! Instead of the configured table, the player types in every territory:
//! a name, the label of the owning faction and a troop count. Input is
//! accepted as typed, with three fallbacks:
//! - names longer than the configured maximum are truncated, and a blank
//!   name keeps the configured one
//! - an unknown faction label makes the territory neutral
//! - a malformed or negative troop count becomes 0

use std::io::{self, BufRead, Write};

use tracing::warn;

use super::input::{Console, NumberInput};
use crate::core::{Faction, GameConfig, Result, Territory};

/// Prompt for every territory slot in `config`.
///
/// Running out of input halfway is an error: the table would be incomplete.
pub fn register_territories<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> Result<Vec<Territory>> {
    let labels: Vec<&str> = config.factions.iter().map(|e| e.name.as_str()).collect();

    console.println("")?;
    console.println("=== TERRITORY REGISTRATION ===")?;
    console.println(&format!("Factions: {}", labels.join(", ")))?;

    let mut territories = Vec::with_capacity(config.territory_count());

    for (index, slot) in config.territories.iter().enumerate() {
        console.println(&format!("\n--- Territory {} ---", index))?;

        let name = required_line(console, &format!("Name [{}]: ", slot.name))?;
        let name = if name.trim().is_empty() { slot.name.clone() } else { name };

        let label = required_line(console, "Faction: ")?;
        let owner = config.factions.find(&label).unwrap_or_else(|| {
            warn!(label = %label, "unknown faction label, territory registered as neutral");
            Faction::Neutral
        });

        let troops = match console.prompt_number("Troops: ")? {
            NumberInput::Value(n) => u32::try_from(n).unwrap_or(0),
            NumberInput::Invalid => 0,
            NumberInput::Eof => return Err(unexpected_eof().into()),
        };

        territories.push(Territory::bounded(&name, owner, troops, config.max_name_len));
    }

    Ok(territories)
}

fn required_line<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> Result<String> {
    console
        .prompt_line(prompt)?
        .ok_or_else(|| unexpected_eof().into())
}

fn unexpected_eof() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input ended during territory registration")
}
