// src/character/src/lib.rs

//! Character sheets: stats, skills, capabilities, weapons, and armor modes.

pub mod armor;
pub mod core;
pub mod stats;

pub use crate::armor::{ArmorMode, SwapStyle};
pub use crate::core::{Capability, Character, CharacterError, Loadout, capabilities};
pub use crate::stats::{
    Descriptors, SizeGrade, Skill, SkillBlock, SpeedGrade, Stat, StatBlock, StrengthGrade,
};
