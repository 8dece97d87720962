//! Attack resolution.
//!
//! One call resolves one round of combat between two territories:
//!
//! 1. The attacker rolls `min(troops - 1, 3)` dice, the defender
//!    `min(troops, 2)` dice (at least one).
//! 2. Both sides sort their dice highest first and compare pairwise. The
//!    higher die wins the pair, ties go to the defender. Each lost pair
//!    costs the loser one troop.
//! 3. A defender left with no troops is conquered: ownership passes to the
//!    attacker, and one troop moves in if the attacker can spare it
//!    (keeps at least one). Otherwise the conquered territory stays empty.
//!
//! Rejected attacks leave the state untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{AttackError, DiceRoll, Faction, GameState, Territory, TerritoryId, DIE_FACES};

/// Most dice an attacker may roll.
pub const MAX_ATTACK_DICE: u32 = 3;

/// Most dice a defender may roll.
pub const MAX_DEFENSE_DICE: u32 = 2;

/// Minimum troops a territory needs to launch an attack.
pub const MIN_ATTACK_TROOPS: u32 = 2;

/// Troops lost by each side in one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casualties {
    pub attacker: u32,
    pub defender: u32,
}

impl Casualties {
    /// Troops lost by both sides together.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.attacker + self.defender
    }
}

/// Everything that happened in one round, for the battle log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleReport {
    pub from: TerritoryId,
    pub to: TerritoryId,
    pub attacker_name: String,
    pub defender_name: String,
    pub attacker: Faction,
    /// Owner of the target before the battle.
    pub defender: Faction,
    pub attacker_rolls: DiceRoll,
    pub defender_rolls: DiceRoll,
    pub casualties: Casualties,
    /// Did the target change hands?
    pub conquered: bool,
    /// Troops moved into the conquered territory (0 or 1).
    pub garrison: u32,
    /// Attacker troops after the round.
    pub attacker_troops: u32,
    /// Target troops after the round.
    pub defender_troops: u32,
}

/// Dice the attacker rolls with `troops` stationed.
///
/// ```
/// use territory_war::rules::combat::attack_dice;
///
/// assert_eq!(attack_dice(1), 0);
/// assert_eq!(attack_dice(3), 2);
/// assert_eq!(attack_dice(10), 3);
/// ```
#[must_use]
pub fn attack_dice(troops: u32) -> usize {
    troops.saturating_sub(1).min(MAX_ATTACK_DICE) as usize
}

/// Dice the defender rolls with `troops` stationed (always at least one).
#[must_use]
pub fn defense_dice(troops: u32) -> usize {
    troops.clamp(1, MAX_DEFENSE_DICE) as usize
}

/// Compare two sets of dice.
///
/// Dice are sorted highest first and paired up; unpaired dice are ignored.
/// The defender wins ties.
///
/// ```
/// use territory_war::rules::combat::resolve_dice;
///
/// let c = resolve_dice(&[6, 1, 3], &[5, 3]);
/// assert_eq!((c.attacker, c.defender), (1, 1));
/// ```
#[must_use]
pub fn resolve_dice(attacker: &[u8], defender: &[u8]) -> Casualties {
    let attacker = sorted_desc(attacker);
    let defender = sorted_desc(defender);

    let mut casualties = Casualties::default();
    for (a, d) in attacker.iter().zip(defender.iter()) {
        if a > d {
            casualties.defender += 1;
        } else {
            casualties.attacker += 1;
        }
    }
    casualties
}

fn sorted_desc(dice: &[u8]) -> DiceRoll {
    let mut sorted: DiceRoll = dice.iter().copied().collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// Check whether `attacker` may launch an attack from `from` at all.
pub fn validate_source(
    state: &GameState,
    attacker: Faction,
    from: TerritoryId,
) -> Result<(), AttackError> {
    let source = state.get(from).ok_or(AttackError::OutOfRange(from))?;
    check_source(source, attacker)
}

/// Check whether `attacker` may attack `to` from `from`.
pub fn validate_attack(
    state: &GameState,
    attacker: Faction,
    from: TerritoryId,
    to: TerritoryId,
) -> Result<(), AttackError> {
    checked_dice(state, attacker, from, to).map(|_| ())
}

fn check_source(source: &Territory, attacker: Faction) -> Result<(), AttackError> {
    if source.owner != attacker {
        return Err(AttackError::NotOwned(source.name.clone()));
    }
    if source.troops < MIN_ATTACK_TROOPS {
        return Err(AttackError::NotEnoughTroops {
            name: source.name.clone(),
            troops: source.troops,
        });
    }
    Ok(())
}

/// Validate the attack and return the dice each side rolls.
fn checked_dice(
    state: &GameState,
    attacker: Faction,
    from: TerritoryId,
    to: TerritoryId,
) -> Result<(usize, usize), AttackError> {
    let source = state.get(from).ok_or(AttackError::OutOfRange(from))?;
    let target = state.get(to).ok_or(AttackError::OutOfRange(to))?;

    if from == to {
        return Err(AttackError::SameTerritory);
    }
    check_source(source, attacker)?;
    if target.owner == attacker {
        return Err(AttackError::FriendlyTarget(target.name.clone()));
    }
    if target.is_empty() {
        return Err(AttackError::EmptyTarget(target.name.clone()));
    }

    Ok((attack_dice(source.troops), defense_dice(target.troops)))
}

fn check_faces(rolls: &[u8]) -> Result<(), AttackError> {
    match rolls.iter().find(|face| !(1..=DIE_FACES).contains(*face)) {
        Some(&face) => Err(AttackError::DieFace(face)),
        None => Ok(()),
    }
}

/// Resolve one round of combat, rolling dice with the state's RNG.
pub fn resolve_attack(
    state: &mut GameState,
    attacker: Faction,
    from: TerritoryId,
    to: TerritoryId,
) -> Result<BattleReport, AttackError> {
    let (attack_count, defense_count) = checked_dice(state, attacker, from, to)?;

    let attacker_rolls = state.rng.roll_dice(attack_count);
    let defender_rolls = state.rng.roll_dice(defense_count);

    apply_rolls(state, attacker, from, to, attacker_rolls, defender_rolls)
}

/// Resolve one round of combat with the given dice.
///
/// The attack is validated exactly as in `resolve_attack`, and the rolls
/// must be what the two sides would have rolled: `attack_dice` and
/// `defense_dice` dice, each showing 1 to 6.
pub fn resolve_attack_with_rolls(
    state: &mut GameState,
    attacker: Faction,
    from: TerritoryId,
    to: TerritoryId,
    attacker_rolls: DiceRoll,
    defender_rolls: DiceRoll,
) -> Result<BattleReport, AttackError> {
    let (attack_count, defense_count) = checked_dice(state, attacker, from, to)?;

    if attacker_rolls.len() != attack_count {
        return Err(AttackError::AttackerDice {
            expected: attack_count,
            rolled: attacker_rolls.len(),
        });
    }
    if defender_rolls.len() != defense_count {
        return Err(AttackError::DefenderDice {
            expected: defense_count,
            rolled: defender_rolls.len(),
        });
    }
    check_faces(&attacker_rolls)?;
    check_faces(&defender_rolls)?;

    apply_rolls(state, attacker, from, to, attacker_rolls, defender_rolls)
}

fn apply_rolls(
    state: &mut GameState,
    attacker: Faction,
    from: TerritoryId,
    to: TerritoryId,
    attacker_rolls: DiceRoll,
    defender_rolls: DiceRoll,
) -> Result<BattleReport, AttackError> {
    let rolled = resolve_dice(&attacker_rolls, &defender_rolls);
    let (source, target) = state.pair_mut(from, to).ok_or(AttackError::SameTerritory)?;

    debug!(
        attacker = %source.name,
        defender = %target.name,
        ?attacker_rolls,
        ?defender_rolls,
        "dice rolled"
    );

    let defender = target.owner;
    let casualties = Casualties {
        attacker: source.remove_troops(rolled.attacker),
        defender: target.remove_troops(rolled.defender),
    };

    let conquered = target.is_empty();
    let mut garrison = 0;
    if conquered {
        target.owner = attacker;
        if source.troops >= MIN_ATTACK_TROOPS {
            source.troops -= 1;
            target.troops += 1;
            garrison = 1;
        }
        info!(
            territory = %target.name,
            from = %defender,
            to = %attacker,
            garrison,
            "territory conquered"
        );
    }

    debug!(
        attacker_losses = casualties.attacker,
        defender_losses = casualties.defender,
        "battle resolved"
    );

    Ok(BattleReport {
        from,
        to,
        attacker_name: source.name.clone(),
        defender_name: target.name.clone(),
        attacker,
        defender,
        attacker_rolls,
        defender_rolls,
        casualties,
        conquered,
        garrison,
        attacker_troops: source.troops,
        defender_troops: target.troops,
    })
}
