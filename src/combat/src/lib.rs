// src/combat/src/lib.rs

//! Combat resolution: pooled attack rolls and the weapon-copy mechanic.
//!
//! Everything here runs to completion synchronously inside one command and
//! assumes the embedding layer serializes actions per character. Failure
//! paths validate first and mutate nothing.

pub mod attack;
pub mod copy;

#[cfg(test)]
mod tests;

pub use crate::attack::{
    AttackOutcome, AttackVerdict, DefenseState, WeaponSlot, attack_pool, charge_up, resolve_attack,
    take_aim,
};
pub use crate::copy::{CopyOutcome, copy_weapon};

use thiserror::Error;

/// Tuning constants for combat actions.
pub mod constants {
    /// Dice a `Random`-class weapon rolls in place of a stat/skill pool.
    pub const RANDOM_CLASS_DICE: u32 = 2;
    /// Tenacity multiplier for a full-guard dodge pool.
    pub const GUARD_TENACITY_MULTIPLIER: u32 = 2;
    /// Bonus dice banked by spending a round aiming.
    pub const AIM_BONUS_DICE: u32 = 2;
    /// Bonus dice banked by spending a round charging.
    pub const CHARGE_BONUS_DICE: u32 = 3;
    /// Ceiling on banked bonus dice across repeated aim/charge rounds.
    pub const MAX_BONUS_DICE: u32 = 5;
}

/// Terminal, synchronous failures. Every variant aborts the action before
/// any state is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombatError {
    #[error("invalid weapon")]
    InvalidWeapon,
    #[error("invalid target")]
    InvalidTarget,
    #[error("{0} has no dice to roll with that weapon")]
    NoDicePool(String),
    #[error("{0} lacks the capability to copy weapons or techniques")]
    CannotCopy(String),
    #[error("{0} has nothing to copy")]
    NothingToCopy(String),
}
