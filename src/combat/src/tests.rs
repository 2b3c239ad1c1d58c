// src/combat/src/tests.rs
use crate::attack::{
    AttackVerdict, DefenseState, WeaponSlot, attack_pool, charge_up, resolve_attack, take_aim,
};
use crate::copy::copy_weapon;
use crate::{CombatError, constants};

use character::{Character, Skill, Stat, capabilities};
use dice::{DiceRng, count_successes};
use items::{Element, Weapon, WeaponClass, WeaponFlag};

fn weapon(name: &str, class: WeaponClass) -> Weapon {
    Weapon::new(name, class, vec![Element::Slashing], vec![]).unwrap()
}

/// A fighter matching the canonical scenario: Dexterity 5, Aim 3,
/// Tenacity 4, Athletics 2, armed with a ranged primary.
fn fighter(name: &str) -> Character {
    let mut who = Character::new(name);
    who.base_mut().stats.set(Stat::Dexterity, 5);
    who.base_mut().stats.set(Stat::Tenacity, 4);
    who.base_mut().skills.set(Skill::Aim, 3);
    who.base_mut().skills.set(Skill::Athletics, 2);
    let rifle = weapon("Rail Rifle", WeaponClass::Ranged);
    let idx = who.base_mut().add_weapon(rifle);
    who.base_mut().set_primary(idx).unwrap();
    who
}

#[test]
fn class_table_matches_the_sheet() {
    let expected = [
        (WeaponClass::Ranged, Stat::Dexterity, Skill::Aim),
        (WeaponClass::Wave, Stat::Power, Skill::Force),
        (WeaponClass::Thrown, Stat::Power, Skill::Aim),
        (WeaponClass::Melee, Stat::Dexterity, Skill::Athletics),
        (WeaponClass::Blitz, Stat::Dexterity, Skill::Force),
        (WeaponClass::Sneak, Stat::Dexterity, Skill::Stealth),
        (WeaponClass::Grapple, Stat::Power, Skill::Athletics),
        (WeaponClass::Spell, Stat::Aura, Skill::Arcana),
        (WeaponClass::Will, Stat::Aura, Skill::Presence),
        (WeaponClass::Gadget, Stat::Cunning, Skill::Mechanics),
        (WeaponClass::Chip, Stat::Cunning, Skill::Computer),
    ];
    for (class, stat, skill) in expected {
        assert_eq!(attack_pool(class), Some((stat, skill)), "class {class}");
    }
    assert_eq!(attack_pool(WeaponClass::Random), None);
}

#[test]
fn ranged_attack_rolls_the_expected_pools() {
    let mut attacker = fighter("Axel");
    let defender = fighter("Blase");
    let mut rng = DiceRng::new(77);

    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::Normal,
        &mut rng,
    )
    .unwrap();

    // Dexterity 5 + Aim 3 = 8 dice before explosions, Tenacity 4 +
    // Athletics 2 = 6 for the dodge.
    assert!(outcome.attacker_dice.len() >= 8);
    assert!(outcome.defender_dice.len() >= 6);
    assert!(outcome.attacker_dice.iter().all(|&f| (1..=10).contains(&f)));

    assert_eq!(
        outcome.attacker_successes,
        count_successes(&outcome.attacker_dice)
    );
    assert_eq!(
        outcome.defender_successes,
        count_successes(&outcome.defender_dice)
    );

    match outcome.verdict {
        AttackVerdict::Hit { net } => {
            assert!(outcome.attacker_successes > outcome.defender_successes);
            assert_eq!(
                net,
                outcome.attacker_successes - outcome.defender_successes
            );
        }
        AttackVerdict::Dodged => {
            assert!(outcome.attacker_successes <= outcome.defender_successes);
        }
        AttackVerdict::Guarded => panic!("nobody was guarding"),
    }
    assert_eq!(outcome.logs.len(), 3);
}

#[test]
fn full_guard_doubles_tenacity_in_the_dodge_pool() {
    let mut attacker = fighter("Axel");
    let defender = fighter("Blase");
    let mut rng = DiceRng::new(5);

    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::FullGuard,
        &mut rng,
    )
    .unwrap();

    // Tenacity 4 doubled to 8, plus Athletics 2 = 12 dodge dice minimum.
    assert!(outcome.defender_dice.len() >= 12);
    assert!(outcome.logs.iter().any(|l| l.contains("full guard")));
}

#[test]
fn defender_capability_blocks_without_a_roll() {
    let mut attacker = fighter("Axel");
    let mut defender = fighter("Blase");
    defender.grant_capability(capabilities::DEFENDER);
    let mut rng = DiceRng::new(5);

    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::FullGuard,
        &mut rng,
    )
    .unwrap();

    assert_eq!(outcome.verdict, AttackVerdict::Guarded);
    assert!(outcome.attacker_dice.is_empty());
    assert!(outcome.defender_dice.is_empty());
    assert!(outcome.logs[0].contains("takes no damage"));

    // Without full guard the capability does nothing special.
    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::Normal,
        &mut rng,
    )
    .unwrap();
    assert_ne!(outcome.verdict, AttackVerdict::Guarded);
}

#[test]
fn random_class_never_consults_stats() {
    // Zero in every stat and skill: a normal weapon would have no pool, but
    // a Random weapon still rolls its two flat dice.
    let mut attacker = Character::new("Dritz");
    let idx = attacker
        .base_mut()
        .add_weapon(weapon("Chaos Orb", WeaponClass::Random));
    attacker.base_mut().set_primary(idx).unwrap();
    let defender = fighter("Blase");
    let mut rng = DiceRng::new(31);

    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::Normal,
        &mut rng,
    )
    .unwrap();
    assert!(outcome.attacker_dice.len() >= constants::RANDOM_CLASS_DICE as usize);
}

#[test]
fn zero_pool_is_an_error_not_a_roll() {
    let mut attacker = Character::new("Dritz");
    let idx = attacker
        .base_mut()
        .add_weapon(weapon("Pea Shooter", WeaponClass::Ranged));
    attacker.base_mut().set_primary(idx).unwrap();
    let defender = fighter("Blase");
    let mut rng = DiceRng::new(31);

    assert_eq!(
        resolve_attack(
            &mut attacker,
            &defender,
            WeaponSlot::Primary,
            DefenseState::Normal,
            &mut rng,
        ),
        Err(CombatError::NoDicePool("Dritz".to_string()))
    );
}

#[test]
fn missing_weapon_reference_aborts_cleanly() {
    let mut attacker = fighter("Axel");
    let defender = fighter("Blase");
    let mut rng = DiceRng::new(31);

    assert_eq!(
        resolve_attack(
            &mut attacker,
            &defender,
            WeaponSlot::Index(99),
            DefenseState::Normal,
            &mut rng,
        ),
        Err(CombatError::InvalidWeapon)
    );
    assert_eq!(
        resolve_attack(
            &mut attacker,
            &defender,
            WeaponSlot::Secondary,
            DefenseState::Normal,
            &mut rng,
        ),
        Err(CombatError::InvalidWeapon)
    );
}

#[test]
fn aim_and_charge_bank_dice_for_one_roll_only() {
    let mut attacker = fighter("Axel");
    let defender = fighter("Blase");

    assert_eq!(take_aim(&mut attacker), constants::AIM_BONUS_DICE);
    assert_eq!(
        charge_up(&mut attacker),
        constants::MAX_BONUS_DICE,
        "2 + 3 hits the ceiling"
    );
    assert_eq!(charge_up(&mut attacker), constants::MAX_BONUS_DICE);

    let mut rng = DiceRng::new(8);
    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::Normal,
        &mut rng,
    )
    .unwrap();

    // Base pool of 8 plus 5 banked dice.
    assert!(outcome.attacker_dice.len() >= 13);
    assert_eq!(attacker.bonus_dice(), 0, "bonus cleared after one roll");

    let outcome = resolve_attack(
        &mut attacker,
        &defender,
        WeaponSlot::Primary,
        DefenseState::Normal,
        &mut rng,
    )
    .unwrap();
    // Next roll is back to the unmodified pool.
    assert!(outcome.attacker_dice.len() >= 8);
}

// --- weapon copy ---

/// Target with a melee primary and a ranged secondary.
fn copy_target() -> Character {
    let mut who = Character::new("Vess");
    let saber = who.base_mut().add_weapon(weapon("Saber", WeaponClass::Melee));
    let buster = who
        .base_mut()
        .add_weapon(weapon("Buster", WeaponClass::Ranged));
    who.base_mut().set_primary(saber).unwrap();
    who.base_mut().set_secondary(buster).unwrap();
    who
}

#[test]
fn copy_requires_a_capability() {
    let mut copier = Character::new("Mime");
    let target = copy_target();
    assert_eq!(
        copy_weapon(&mut copier, &target),
        Err(CombatError::CannotCopy("Mime".to_string()))
    );
    assert!(copier.loadout().weapons.is_empty());
}

#[test]
fn copy_with_no_weapons_fails() {
    let mut copier = Character::new("Mime");
    copier.grant_capability(capabilities::WEAPON_COPY);
    let target = Character::new("Pacifist");
    assert_eq!(
        copy_weapon(&mut copier, &target),
        Err(CombatError::NothingToCopy("Pacifist".to_string()))
    );
}

#[test]
fn weapon_copy_prefers_eligible_primary_then_secondary() {
    // Primary is Melee (not ranged-like), secondary is Ranged: the
    // weapon-copier takes the secondary.
    let mut copier = Character::new("Mime");
    copier.grant_capability(capabilities::WEAPON_COPY);
    let target = copy_target();

    let outcome = copy_weapon(&mut copier, &target).unwrap();
    assert_eq!(outcome.weapon.name, "Buster");
    assert!(!outcome.coerced);
    assert!(!outcome.priority_override);

    // The technique-copier takes the melee primary instead.
    let mut mirror = Character::new("Mirror");
    mirror.grant_capability(capabilities::TECHNIQUE_COPY);
    let outcome = copy_weapon(&mut mirror, &target).unwrap();
    assert_eq!(outcome.weapon.name, "Saber");
}

#[test]
fn priority_flag_overrides_eligibility() {
    let mut copier = Character::new("Mime");
    copier.grant_capability(capabilities::WEAPON_COPY);

    let mut target = copy_target();
    let relic = Weapon::new(
        "Sealed Relic",
        WeaponClass::Spell,
        vec![Element::Disenchant],
        vec![WeaponFlag::Priority],
    )
    .unwrap();
    target.base_mut().add_weapon(relic);

    let outcome = copy_weapon(&mut copier, &target).unwrap();
    assert_eq!(outcome.weapon.name, "Sealed Relic");
    assert_eq!(outcome.weapon.class, WeaponClass::Spell);
    assert!(outcome.priority_override);
}

#[test]
fn fallback_coerces_class_rather_than_failing() {
    // Target owns nothing ranged-like: both designated weapons are spells.
    let mut target = Character::new("Sage");
    let grimoire = target
        .base_mut()
        .add_weapon(weapon("Grimoire", WeaponClass::Spell));
    let wand = target.base_mut().add_weapon(weapon("Wand", WeaponClass::Will));
    target.base_mut().set_primary(grimoire).unwrap();
    target.base_mut().set_secondary(wand).unwrap();

    let mut copier = Character::new("Mime");
    copier.grant_capability(capabilities::WEAPON_COPY);

    let outcome = copy_weapon(&mut copier, &target).unwrap();
    assert!(outcome.coerced);
    assert_eq!(outcome.weapon.name, "Grimoire");
    assert_eq!(outcome.weapon.class, WeaponClass::Ranged);
    // The target's own grimoire is untouched.
    assert_eq!(
        target.loadout().primary_weapon().unwrap().class,
        WeaponClass::Spell
    );
}

#[test]
fn copies_are_independent_records() {
    let mut copier = Character::new("Mime");
    copier.grant_capability(capabilities::WEAPON_COPY);
    let target = copy_target();

    copy_weapon(&mut copier, &target).unwrap();
    copy_weapon(&mut copier, &target).unwrap();
    assert_eq!(copier.loadout().weapons.len(), 2);

    // Renaming the copier's record never reaches back to the target.
    copier.loadout_mut().weapons[0].name = "Bootleg Buster".to_string();
    assert_eq!(target.loadout().weapons[1].name, "Buster");
    assert_eq!(copier.loadout().weapons[1].name, "Buster");
}
