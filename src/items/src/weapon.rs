// src/items/src/weapon.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Combat class of a weapon. Selects which stat/skill pair governs an attack
/// roll with it; `Random` weapons roll two flat d10s instead of a pool.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum WeaponClass {
    Ranged,
    Wave,
    Thrown,
    Melee,
    Blitz,
    Sneak,
    Grapple,
    Spell,
    Will,
    Gadget,
    Chip,
    Random,
}

impl WeaponClass {
    /// Classes a `Weapon_copy` user may copy.
    pub fn is_ranged_like(self) -> bool {
        matches!(
            self,
            WeaponClass::Ranged | WeaponClass::Wave | WeaponClass::Thrown
        )
    }

    /// Classes a `Technique_copy` user may copy.
    pub fn is_melee_like(self) -> bool {
        matches!(
            self,
            WeaponClass::Melee | WeaponClass::Blitz | WeaponClass::Sneak | WeaponClass::Grapple
        )
    }
}

/// Elemental type carried by a weapon. Every weapon has one to three.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Element {
    Slashing,
    Piercing,
    Blunt,
    Fire,
    Ice,
    Electric,
    Wind,
    Earth,
    Water,
    Toxic,
    Sonic,
    Laser,
    Explosive,
    Gravity,
    Nuclear,
    Psychic,
    Radiant,
    Shadow,
    Bio,
    Temporal,
    Spatial,
    Spirit,
    Disenchant,
}

/// Special-rule flag on a weapon. At most two per weapon.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum WeaponFlag {
    Megablast,
    Exceed,
    /// Forces this weapon to be the copy target regardless of class rules.
    Priority,
    Stable,
    Blind,
    Degrade,
    Entangle,
}

/// Invariant violations rejected at weapon construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeaponError {
    #[error("a weapon needs at least one elemental type")]
    NoElements,
    #[error("a weapon carries at most three elemental types (got {0})")]
    TooManyElements(usize),
    #[error("duplicate elemental type: {0}")]
    DuplicateElement(Element),
    #[error("a weapon carries at most two flags (got {0})")]
    TooManyFlags(usize),
    #[error("duplicate flag: {0}")]
    DuplicateFlag(WeaponFlag),
}

/// A weapon record. Immutable once created; the weapon-copy mechanic always
/// produces a new derived record rather than sharing this one.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub class: WeaponClass,
    pub elements: Vec<Element>,
    pub flags: Vec<WeaponFlag>,
}

impl Weapon {
    /// Build a weapon, enforcing the record invariants: exactly one class,
    /// one to three distinct elements, zero to two distinct flags.
    pub fn new(
        name: impl Into<String>,
        class: WeaponClass,
        elements: Vec<Element>,
        flags: Vec<WeaponFlag>,
    ) -> Result<Self, WeaponError> {
        if elements.is_empty() {
            return Err(WeaponError::NoElements);
        }
        if elements.len() > 3 {
            return Err(WeaponError::TooManyElements(elements.len()));
        }
        if let Some(dup) = first_duplicate(&elements) {
            return Err(WeaponError::DuplicateElement(dup));
        }
        if flags.len() > 2 {
            return Err(WeaponError::TooManyFlags(flags.len()));
        }
        if let Some(dup) = first_duplicate(&flags) {
            return Err(WeaponError::DuplicateFlag(dup));
        }

        Ok(Self {
            name: name.into(),
            class,
            elements,
            flags,
        })
    }

    pub fn has_flag(&self, flag: WeaponFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Fully independent duplicate of this record.
    pub fn duplicate(&self) -> Weapon {
        self.clone()
    }

    /// Independent duplicate with the class swapped out. Used by the
    /// weapon-copy fallback, which keeps the source's name and elements but
    /// coerces the class into the copier's eligible category.
    pub fn duplicate_as(&self, class: WeaponClass) -> Weapon {
        let mut copy = self.clone();
        copy.class = class;
        copy
    }
}

fn first_duplicate<T: Copy + PartialEq>(values: &[T]) -> Option<T> {
    for (i, &value) in values.iter().enumerate() {
        if values[..i].contains(&value) {
            return Some(value);
        }
    }
    None
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self
            .elements
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("/");
        write!(f, "{} [{}: {}]", self.name, self.class, elements)?;
        for flag in &self.flags {
            write!(f, " <{}>", flag)?;
        }
        Ok(())
    }
}
