// src/character/src/core.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use items::{Element, Weapon};

use crate::armor::{ArmorMode, SwapStyle};
use crate::stats::{Descriptors, Skill, SkillBlock, Stat, StatBlock};

/// Well-known capability names. The capability set is open (staff can grant
/// arbitrary tags), so these are plain name constants rather than an enum.
pub mod capabilities {
    pub const FLIGHT: &str = "flight";
    /// Gates copying ranged-like weapons (Ranged, Wave, Thrown).
    pub const WEAPON_COPY: &str = "weapon_copy";
    /// Gates copying melee-like weapons (Melee, Blitz, Sneak, Grapple).
    pub const TECHNIQUE_COPY: &str = "technique_copy";
    /// Full guard blocks all damage outright instead of doubling Tenacity.
    pub const DEFENDER: &str = "defender";
}

/// A named unlock tag. Normalized to lowercase so `Weapon_copy` and
/// `weapon_copy` are the same capability.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct Capability(String);

impl Capability {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_ascii_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name.trim().to_ascii_lowercase()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharacterError {
    #[error("an armor mode requires both a primary and a secondary weapon")]
    WeaponsNotSet,
    #[error("an armor mode named '{0}' already exists")]
    DuplicateMode(String),
    #[error("no armor mode matches '{0}'")]
    ModeNotFound(String),
    #[error("'{query}' matches several armor modes: {}", .candidates.join(", "))]
    AmbiguousMode {
        query: String,
        candidates: Vec<String>,
    },
    #[error("no weapon at index {0}")]
    InvalidWeaponIndex(usize),
}

/// The full combat-relevant working set: stats, skills, owned weapons, and
/// the designated primary/secondary weapons.
#[derive(Clone, Debug, Default, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Loadout {
    pub stats: StatBlock,
    pub skills: SkillBlock,
    pub weapons: Vec<Weapon>,
    primary: Option<usize>,
    secondary: Option<usize>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon to the owned list, returning its index.
    pub fn add_weapon(&mut self, weapon: Weapon) -> usize {
        self.weapons.push(weapon);
        self.weapons.len() - 1
    }

    pub fn weapon(&self, index: usize) -> Option<&Weapon> {
        self.weapons.get(index)
    }

    pub fn set_primary(&mut self, index: usize) -> Result<(), CharacterError> {
        if index >= self.weapons.len() {
            return Err(CharacterError::InvalidWeaponIndex(index));
        }
        self.primary = Some(index);
        Ok(())
    }

    pub fn set_secondary(&mut self, index: usize) -> Result<(), CharacterError> {
        if index >= self.weapons.len() {
            return Err(CharacterError::InvalidWeaponIndex(index));
        }
        self.secondary = Some(index);
        Ok(())
    }

    pub fn primary_weapon(&self) -> Option<&Weapon> {
        self.primary.and_then(|i| self.weapons.get(i))
    }

    pub fn secondary_weapon(&self) -> Option<&Weapon> {
        self.secondary.and_then(|i| self.weapons.get(i))
    }

    pub fn has_primary_and_secondary(&self) -> bool {
        self.primary_weapon().is_some() && self.secondary_weapon().is_some()
    }
}

/// A player character's sheet.
///
/// `base` is the chargen loadout and is never destructively overwritten.
/// Activating an armor mode copies that mode's snapshot into `working`;
/// while `working` is set, all reads and combat mutation go through it.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    base: Loadout,
    working: Option<Loadout>,
    active_mode: Option<String>,
    armor_modes: Vec<ArmorMode>,
    capabilities: Vec<Capability>,
    pub weakness: Option<Element>,
    pub resistance: Option<Element>,
    pub descriptors: Descriptors,
    bonus_dice: u32,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: Loadout::new(),
            working: None,
            active_mode: None,
            armor_modes: Vec::new(),
            capabilities: Vec::new(),
            weakness: None,
            resistance: None,
            descriptors: Descriptors::default(),
            bonus_dice: 0,
        }
    }

    /// The loadout currently in effect: the active mode's working copy, or
    /// the base sheet when no mode is active.
    pub fn loadout(&self) -> &Loadout {
        self.working.as_ref().unwrap_or(&self.base)
    }

    pub fn loadout_mut(&mut self) -> &mut Loadout {
        self.working.as_mut().unwrap_or(&mut self.base)
    }

    /// The chargen sheet, regardless of any active mode.
    pub fn base(&self) -> &Loadout {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut Loadout {
        &mut self.base
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.loadout().stats.get(stat)
    }

    pub fn skill(&self, skill: Skill) -> u32 {
        self.loadout().skills.get(skill)
    }

    // --- capabilities ---

    pub fn grant_capability(&mut self, name: &str) {
        let cap = Capability::new(name);
        if !self.capabilities.contains(&cap) {
            self.capabilities.push(cap);
        }
    }

    pub fn revoke_capability(&mut self, name: &str) {
        let cap = Capability::new(name);
        self.capabilities.retain(|c| c != &cap);
    }

    pub fn has_capability(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c.is(name))
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    // --- aim/charge bonus dice ---

    /// Bonus dice banked for the next attack roll.
    pub fn bonus_dice(&self) -> u32 {
        self.bonus_dice
    }

    pub fn set_bonus_dice(&mut self, dice: u32) {
        self.bonus_dice = dice;
    }

    /// Consume the banked bonus dice; they apply to one roll only.
    pub fn take_bonus_dice(&mut self) -> u32 {
        std::mem::take(&mut self.bonus_dice)
    }

    // --- armor modes ---

    pub fn armor_modes(&self) -> &[ArmorMode] {
        &self.armor_modes
    }

    /// Name of the active armor mode, if any.
    pub fn active_mode(&self) -> Option<&str> {
        self.active_mode.as_deref()
    }

    /// Snapshot the current loadout as a new armor mode. Requires both a
    /// primary and a secondary weapon to be designated first.
    pub fn create_armor_mode(
        &mut self,
        name: impl Into<String>,
        style: SwapStyle,
    ) -> Result<(), CharacterError> {
        let name = name.into();
        if !self.loadout().has_primary_and_secondary() {
            return Err(CharacterError::WeaponsNotSet);
        }
        if self
            .armor_modes
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(&name))
        {
            return Err(CharacterError::DuplicateMode(name));
        }
        let snapshot = self.loadout().clone();
        self.armor_modes.push(ArmorMode::new(name, style, snapshot));
        Ok(())
    }

    /// Activate an armor mode by name or unique prefix, copying its snapshot
    /// over the working loadout. Returns the style-keyed announcement.
    ///
    /// Ambiguous or unknown names mutate nothing.
    pub fn activate_armor_mode(&mut self, query: &str) -> Result<String, CharacterError> {
        let index = self.find_mode(query)?;
        let mode = &self.armor_modes[index];
        let announcement = mode.announcement(&self.name);
        self.working = Some(mode.snapshot.clone());
        self.active_mode = Some(mode.name.clone());
        Ok(announcement)
    }

    /// Drop the working override and return to the base sheet.
    pub fn revert_to_base(&mut self) {
        self.working = None;
        self.active_mode = None;
    }

    fn find_mode(&self, query: &str) -> Result<usize, CharacterError> {
        let needle = query.trim().to_ascii_lowercase();
        if let Some(index) = self
            .armor_modes
            .iter()
            .position(|m| m.name.to_ascii_lowercase() == needle)
        {
            return Ok(index);
        }

        let matches: Vec<usize> = self
            .armor_modes
            .iter()
            .enumerate()
            .filter(|(_, m)| m.name.to_ascii_lowercase().starts_with(&needle))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(CharacterError::ModeNotFound(query.to_string())),
            [index] => Ok(*index),
            several => Err(CharacterError::AmbiguousMode {
                query: query.to_string(),
                candidates: several
                    .iter()
                    .map(|&i| self.armor_modes[i].name.clone())
                    .collect(),
            }),
        }
    }
}
