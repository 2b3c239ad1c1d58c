// src/combat/src/copy.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use character::{Character, capabilities};
use items::{Weapon, WeaponClass, WeaponFlag};

use crate::CombatError;

/// Which copy capability drove the selection, fixing the eligible class set
/// and the coercion class for the fallback.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
enum CopyCategory {
    /// `Weapon_copy`: ranged-like classes (Ranged, Wave, Thrown).
    Weapon,
    /// `Technique_copy`: melee-like classes (Melee, Blitz, Sneak, Grapple).
    Technique,
}

impl CopyCategory {
    fn eligible(self, class: WeaponClass) -> bool {
        match self {
            CopyCategory::Weapon => class.is_ranged_like(),
            CopyCategory::Technique => class.is_melee_like(),
        }
    }

    /// First eligible class of the category, used for the coerced fallback.
    fn coercion_class(self) -> WeaponClass {
        match self {
            CopyCategory::Weapon => WeaponClass::Ranged,
            CopyCategory::Technique => WeaponClass::Melee,
        }
    }
}

/// Result of a weapon-copy action.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct CopyOutcome {
    /// The new record appended to the copier's weapon list.
    pub weapon: Weapon,
    /// True when no eligible weapon existed and the class was coerced.
    pub coerced: bool,
    /// True when a Priority flag overrode class eligibility.
    pub priority_override: bool,
    pub logs: Vec<String>,
}

/// Copy a weapon from `target` into the copier's working weapon list.
///
/// Selection order: any Priority-flagged weapon wins outright; otherwise the
/// target's primary weapon if its class is eligible for the copier's
/// category, then the secondary; otherwise the primary (or first owned)
/// weapon with its class coerced into the category, so a copy always
/// succeeds once the capability gate passes. The copy is a fully independent
/// record owned by the copier.
pub fn copy_weapon(copier: &mut Character, target: &Character) -> Result<CopyOutcome, CombatError> {
    let category = if copier.has_capability(capabilities::WEAPON_COPY) {
        CopyCategory::Weapon
    } else if copier.has_capability(capabilities::TECHNIQUE_COPY) {
        CopyCategory::Technique
    } else {
        return Err(CombatError::CannotCopy(copier.name.clone()));
    };

    let theirs = target.loadout();
    if theirs.weapons.is_empty() {
        return Err(CombatError::NothingToCopy(target.name.clone()));
    }

    let mut coerced = false;
    let mut priority_override = false;

    let copy = if let Some(flagged) = theirs
        .weapons
        .iter()
        .find(|w| w.has_flag(WeaponFlag::Priority))
    {
        priority_override = true;
        flagged.duplicate()
    } else if let Some(primary) = theirs
        .primary_weapon()
        .filter(|w| category.eligible(w.class))
    {
        primary.duplicate()
    } else if let Some(secondary) = theirs
        .secondary_weapon()
        .filter(|w| category.eligible(w.class))
    {
        secondary.duplicate()
    } else {
        // Nothing eligible: keep the primary's name and elements but coerce
        // the class so the copier can actually wield it.
        coerced = true;
        let source = theirs.primary_weapon().unwrap_or(&theirs.weapons[0]);
        source.duplicate_as(category.coercion_class())
    };

    let logs = vec![
        format!(
            "{} studies {} intently and fabricates a copy of {}!",
            copier.name, target.name, copy,
        ),
        format!(
            "{} feels {}'s gaze linger on their {}.",
            target.name, copier.name, copy.name,
        ),
    ];

    copier.loadout_mut().add_weapon(copy.clone());

    Ok(CopyOutcome {
        weapon: copy,
        coerced,
        priority_override,
        logs,
    })
}
