// src/combat/src/attack.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use character::{Character, Skill, Stat, capabilities};
use dice::{DiceRng, count_successes, pooled_roll};
use items::{Weapon, WeaponClass};

use crate::CombatError;
use crate::constants::{
    AIM_BONUS_DICE, CHARGE_BONUS_DICE, GUARD_TENACITY_MULTIPLIER, MAX_BONUS_DICE,
    RANDOM_CLASS_DICE,
};

/// The stat/skill pair governing an attack roll with a weapon of the given
/// class. `Random` has no fixed pair: it rolls two flat d10s instead.
pub fn attack_pool(class: WeaponClass) -> Option<(Stat, Skill)> {
    match class {
        WeaponClass::Ranged => Some((Stat::Dexterity, Skill::Aim)),
        WeaponClass::Wave => Some((Stat::Power, Skill::Force)),
        WeaponClass::Thrown => Some((Stat::Power, Skill::Aim)),
        WeaponClass::Melee => Some((Stat::Dexterity, Skill::Athletics)),
        WeaponClass::Blitz => Some((Stat::Dexterity, Skill::Force)),
        WeaponClass::Sneak => Some((Stat::Dexterity, Skill::Stealth)),
        WeaponClass::Grapple => Some((Stat::Power, Skill::Athletics)),
        WeaponClass::Spell => Some((Stat::Aura, Skill::Arcana)),
        WeaponClass::Will => Some((Stat::Aura, Skill::Presence)),
        WeaponClass::Gadget => Some((Stat::Cunning, Skill::Mechanics)),
        WeaponClass::Chip => Some((Stat::Cunning, Skill::Computer)),
        WeaponClass::Random => None,
    }
}

/// Which of the attacker's weapons an attack uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum WeaponSlot {
    Primary,
    Secondary,
    Index(usize),
}

/// Defense posture declared by the defender for the current round.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize,
)]
pub enum DefenseState {
    #[default]
    Normal,
    /// Sacrifice the round to defend: doubles Tenacity in the dodge pool,
    /// or blocks outright for holders of the Defender capability.
    FullGuard,
}

/// How an attack landed.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum AttackVerdict {
    /// Attacker out-rolled the defender by `net` successes.
    Hit { net: usize },
    /// Defender matched or beat the attacker's successes.
    Dodged,
    /// Full guard with the Defender capability: no roll, zero damage.
    Guarded,
}

/// Everything observable about one resolved attack, including the raw die
/// sequences and narrative log lines for the room.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker_dice: Vec<u8>,
    pub defender_dice: Vec<u8>,
    pub attacker_successes: usize,
    pub defender_successes: usize,
    pub verdict: AttackVerdict,
    pub logs: Vec<String>,
}

impl AttackOutcome {
    fn log(&mut self, message: String) {
        self.logs.push(message);
    }
}

/// Bank bonus dice for the attacker's next roll by spending this round aiming.
pub fn take_aim(attacker: &mut Character) -> u32 {
    let banked = (attacker.bonus_dice() + AIM_BONUS_DICE).min(MAX_BONUS_DICE);
    attacker.set_bonus_dice(banked);
    banked
}

/// Bank bonus dice for the attacker's next roll by spending this round charging.
pub fn charge_up(attacker: &mut Character) -> u32 {
    let banked = (attacker.bonus_dice() + CHARGE_BONUS_DICE).min(MAX_BONUS_DICE);
    attacker.set_bonus_dice(banked);
    banked
}

/// Resolve one attack: pick the stat/skill pair from the weapon's class,
/// roll and explode both pools, and compare success counts.
///
/// The attacker's banked aim/charge dice are consumed by the roll. Ties go
/// to the defender. All validation happens before any mutation.
pub fn resolve_attack(
    attacker: &mut Character,
    defender: &Character,
    slot: WeaponSlot,
    defense: DefenseState,
    rng: &mut DiceRng,
) -> Result<AttackOutcome, CombatError> {
    let weapon = select_weapon(attacker, slot).ok_or(CombatError::InvalidWeapon)?;
    let class = weapon.class;
    let weapon_name = weapon.name.clone();

    let mut outcome = AttackOutcome {
        attacker_dice: Vec::new(),
        defender_dice: Vec::new(),
        attacker_successes: 0,
        defender_successes: 0,
        verdict: AttackVerdict::Dodged,
        logs: Vec::new(),
    };

    // Full guard with the Defender capability blocks before any dice move.
    if defense == DefenseState::FullGuard && defender.has_capability(capabilities::DEFENDER) {
        outcome.verdict = AttackVerdict::Guarded;
        outcome.log(format!(
            "{} attacks {} with {}, but {} holds a full guard and takes no damage!",
            attacker.name, defender.name, weapon_name, defender.name,
        ));
        return Ok(outcome);
    }

    // Attacker pool: class table lookup, or two flat dice for Random.
    let (attack_stat, attack_skill) = match attack_pool(class) {
        Some((stat, skill)) => {
            let pool = attacker.stat(stat) + attacker.skill(skill);
            if pool == 0 {
                return Err(CombatError::NoDicePool(attacker.name.clone()));
            }
            (attacker.stat(stat), attacker.skill(skill))
        }
        None => (RANDOM_CLASS_DICE, 0),
    };

    // Banked aim/charge dice apply to this roll only.
    let bonus = attacker.take_bonus_dice();

    outcome.attacker_dice = pooled_roll(rng, attack_stat + bonus, attack_skill);
    outcome.attacker_successes = count_successes(&outcome.attacker_dice);

    // Dodge pool: Tenacity + Athletics, Tenacity doubled under full guard.
    let mut tenacity = defender.stat(Stat::Tenacity);
    if defense == DefenseState::FullGuard {
        tenacity *= GUARD_TENACITY_MULTIPLIER;
    }
    outcome.defender_dice = pooled_roll(rng, tenacity, defender.skill(Skill::Athletics));
    outcome.defender_successes = count_successes(&outcome.defender_dice);

    outcome.log(format!(
        "{} attacks {} with {}: rolls [{}] for {} successes.",
        attacker.name,
        defender.name,
        weapon_name,
        format_dice(&outcome.attacker_dice),
        outcome.attacker_successes,
    ));
    outcome.log(format!(
        "{} dodges{}: rolls [{}] for {} successes.",
        defender.name,
        if defense == DefenseState::FullGuard {
            " from a full guard"
        } else {
            ""
        },
        format_dice(&outcome.defender_dice),
        outcome.defender_successes,
    ));

    outcome.verdict = if outcome.attacker_successes > outcome.defender_successes {
        let net = outcome.attacker_successes - outcome.defender_successes;
        outcome.log(format!(
            "{}'s attack strikes home ({} net)!",
            attacker.name, net,
        ));
        AttackVerdict::Hit { net }
    } else {
        outcome.log(format!("{} slips aside!", defender.name));
        AttackVerdict::Dodged
    };

    Ok(outcome)
}

fn select_weapon(attacker: &Character, slot: WeaponSlot) -> Option<&Weapon> {
    let loadout = attacker.loadout();
    match slot {
        WeaponSlot::Primary => loadout.primary_weapon(),
        WeaponSlot::Secondary => loadout.secondary_weapon(),
        WeaponSlot::Index(i) => loadout.weapon(i),
    }
}

fn format_dice(dice: &[u8]) -> String {
    dice.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
