// src/items/src/lib.rs

//! Weapon records and their closed enumerations.

pub mod weapon;

pub use crate::weapon::{Element, Weapon, WeaponClass, WeaponError, WeaponFlag};
