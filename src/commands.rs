// src/commands.rs

//! Commands accepted by the world and the errors they can fail with.
//!
//! The host framework parses player input; by the time a command reaches
//! this layer its arguments are already split and named.

use character::CharacterError;
use combat::{CombatError, WeaponSlot};
use scene::SceneError;
use thiserror::Error;

/// One already-parsed player action. Commands run to completion, one at a
/// time, inside [`crate::World::execute`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Attack a target with the weapon in the given slot.
    Attack { target: String, slot: WeaponSlot },
    /// Sacrifice the round to guard; doubles Tenacity against the next
    /// attack, or blocks outright for Defender capability holders.
    Guard,
    /// Sacrifice the round aiming, banking bonus dice for the next attack.
    Aim,
    /// Sacrifice the round charging, banking bonus dice for the next attack.
    Charge,
    /// Copy a weapon or technique from the target.
    CopyWeapon { target: String },
    /// Activate an armor mode by name or unique prefix.
    ActivateMode { name: String },
    /// Drop the active armor mode and return to the base sheet.
    Revert,
    /// Join the scene's pose order.
    SceneJoin,
    /// Leave the scene's pose order.
    SceneLeave,
    /// Record a pose for the current round.
    Pose,
}

/// Why a command was rejected. Every failure is terminal and synchronous:
/// the actor gets one message, nothing is mutated, and the command must be
/// reissued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown character: {0}")]
    UnknownCharacter(String),
    #[error("a character cannot target themselves")]
    SelfTarget,
    #[error(transparent)]
    Combat(#[from] CombatError),
    #[error(transparent)]
    Character(#[from] CharacterError),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl CommandError {
    /// The message shown to the acting player.
    pub fn player_message(&self) -> String {
        match self {
            CommandError::UnknownCharacter(name) => {
                format!("There is nobody named '{}' here.", name)
            }
            CommandError::SelfTarget => "You cannot target yourself.".to_string(),
            CommandError::Combat(CombatError::InvalidWeapon) => {
                "That weapon reference is invalid.".to_string()
            }
            CommandError::Combat(CombatError::InvalidTarget) => {
                "That is not a valid target.".to_string()
            }
            // The remaining errors already read as player-facing sentences.
            other => format!("{}.", other),
        }
    }
}
