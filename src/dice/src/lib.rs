// src/dice/src/lib.rs

//! d10 dice pools: rolling, exploding, and success counting.
//!
//! Every contested action in the game rolls one ten-sided die per point of
//! the acting character's combined stat + skill, explodes the 10s, and counts
//! faces at or above the success threshold. The functions here are pure given
//! an injected [`DiceRng`], which keeps every roll replayable from a seed.

pub mod rng;

pub use crate::rng::DiceRng;

/// Pool mechanics constants shared by every roll in the game.
pub mod constants {
    /// Number of faces on every die in a pool.
    pub const DIE_FACES: u8 = 10;
    /// A die at or above this face counts as one success.
    pub const SUCCESS_THRESHOLD: u8 = 7;
    /// Total-dice ceiling for exploding rolls. The tabletop rule is an
    /// unbounded geometric process; the cap keeps the worst case finite.
    /// Past the cap, remaining 10s are left un-exploded.
    pub const EXPLOSION_CAP: usize = 1000;
}

use crate::constants::{DIE_FACES, EXPLOSION_CAP, SUCCESS_THRESHOLD};

/// Roll a pool of `stat + skill` ten-sided dice, in draw order.
///
/// A zero-sized pool returns an empty vec. Callers treat that as an invalid
/// stat/skill combination and report it, rather than scoring it as a
/// zero-success roll.
pub fn roll_pool(rng: &mut DiceRng, stat: u32, skill: u32) -> Vec<u8> {
    let size = (stat + skill) as usize;
    let mut dice = Vec::with_capacity(size);
    for _ in 0..size {
        dice.push(rng.d10());
    }
    dice
}

/// Explode maximum faces: every 10 grants one extra die appended to the end
/// of the pool, and extra dice explode in turn. Appending stops once the pool
/// holds [`constants::EXPLOSION_CAP`] dice.
///
/// Original dice are never reordered or dropped; the input is always a prefix
/// of the output.
pub fn explode(rng: &mut DiceRng, mut dice: Vec<u8>) -> Vec<u8> {
    let mut i = 0;
    while i < dice.len() {
        if dice[i] == DIE_FACES && dice.len() < EXPLOSION_CAP {
            let extra = rng.d10();
            dice.push(extra);
        }
        i += 1;
    }
    dice
}

/// Count faces at or above [`constants::SUCCESS_THRESHOLD`].
pub fn count_successes(dice: &[u8]) -> usize {
    dice.iter()
        .filter(|&&face| face >= SUCCESS_THRESHOLD)
        .count()
}

/// The common roll-then-explode sequence as one call.
pub fn pooled_roll(rng: &mut DiceRng, stat: u32, skill: u32) -> Vec<u8> {
    let dice = roll_pool(rng, stat, skill);
    explode(rng, dice)
}
