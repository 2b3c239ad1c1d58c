// src/lib.rs

//! Game-content core for Starfall MUD: dice-pool combat resolution, weapon
//! records, character sheets with armor modes, weapon copying, and scene
//! pose-order tracking.
//!
//! The host server owns networking, persistence, and command parsing. This
//! library exposes the rules: feed already-parsed [`Command`]s into a
//! [`World`] and read the narrative text back out of an [`OutputSink`].

pub mod commands;
pub mod output;
pub mod world;

pub use crate::commands::{Command, CommandError};
pub use crate::output::{OutputSink, Transcript};
pub use crate::world::World;

// The subcrates' main types, re-exported for embedders.
pub use character::{
    ArmorMode, Capability, Character, CharacterError, Loadout, Skill, Stat, SwapStyle,
    capabilities,
};
pub use combat::{
    AttackOutcome, AttackVerdict, CombatError, CopyOutcome, DefenseState, WeaponSlot,
};
pub use dice::DiceRng;
pub use items::{Element, Weapon, WeaponClass, WeaponError, WeaponFlag};
pub use scene::{PoseTracker, SceneError};
