// src/world.rs

//! The owning registry of characters and the single entry point for
//! mutating them.
//!
//! The combat core assumes at-most-one-writer-at-a-time semantics on any
//! character. Rather than inheriting that guarantee silently from a host
//! framework, this layer makes it structural: every action funnels through
//! [`World::execute`], which takes `&mut self` and runs each command to
//! completion before the next can start.

use std::collections::HashMap;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use character::Character;
use combat::{DefenseState, charge_up, copy_weapon, resolve_attack, take_aim};
use dice::DiceRng;
use scene::PoseTracker;

use crate::commands::{Command, CommandError};
use crate::output::OutputSink;

/// All characters in play, plus the shared dice RNG, per-round defense
/// postures, and the scene's pose tracker.
#[derive(Clone, Debug, Serialize, Deserialize, Encode, Decode)]
pub struct World {
    characters: Vec<Character>,
    defense: HashMap<String, DefenseState>,
    scene: PoseTracker,
    rng: DiceRng,
}

impl World {
    /// World with a random dice seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// World with a fixed dice seed, for replayable scenes and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            characters: Vec::new(),
            defense: HashMap::new(),
            scene: PoseTracker::new(),
            rng: DiceRng::new(seed),
        }
    }

    pub fn add_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.index_of(name).map(|i| &self.characters[i])
    }

    pub fn character_mut(&mut self, name: &str) -> Option<&mut Character> {
        self.index_of(name).map(move |i| &mut self.characters[i])
    }

    pub fn scene(&self) -> &PoseTracker {
        &self.scene
    }

    /// The defense posture a character has declared for the current round.
    pub fn defense_of(&self, name: &str) -> DefenseState {
        self.defense
            .get(&normalize(name))
            .copied()
            .unwrap_or_default()
    }

    /// Run one command to completion. On failure the actor is told why and
    /// no state has been touched.
    pub fn execute(
        &mut self,
        actor: &str,
        command: Command,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        match self.dispatch(actor, command, sink) {
            Ok(()) => Ok(()),
            Err(error) => {
                sink.send(actor, &error.player_message());
                Err(error)
            }
        }
    }

    fn dispatch(
        &mut self,
        actor: &str,
        command: Command,
        sink: &mut dyn OutputSink,
    ) -> Result<(), CommandError> {
        match command {
            Command::Attack { target, slot } => {
                let (actor_i, target_i) = self.pair_indices(actor, &target)?;
                let defense = self.defense_of(&target);
                let outcome = {
                    let (attacker, defender) =
                        pair_mut(&mut self.characters, actor_i, target_i);
                    resolve_attack(attacker, defender, slot, defense, &mut self.rng)?
                };
                // Attacking drops the attacker's own guard; the defender's
                // posture stands until they next act.
                self.defense.remove(&normalize(actor));

                let attacker_name = self.characters[actor_i].name.clone();
                let defender_name = self.characters[target_i].name.clone();
                for log in &outcome.logs {
                    sink.send(&attacker_name, log);
                    sink.send(&defender_name, log);
                }
                Ok(())
            }
            Command::Guard => {
                let actor_i = self.index_required(actor)?;
                self.defense
                    .insert(normalize(actor), DefenseState::FullGuard);
                let name = self.characters[actor_i].name.clone();
                sink.send(&name, "You brace into a full guard.");
                Ok(())
            }
            Command::Aim => {
                let actor_i = self.index_required(actor)?;
                let banked = take_aim(&mut self.characters[actor_i]);
                let name = self.characters[actor_i].name.clone();
                sink.send(
                    &name,
                    &format!("You take careful aim ({} bonus dice banked).", banked),
                );
                Ok(())
            }
            Command::Charge => {
                let actor_i = self.index_required(actor)?;
                let banked = charge_up(&mut self.characters[actor_i]);
                let name = self.characters[actor_i].name.clone();
                sink.send(
                    &name,
                    &format!("You gather power ({} bonus dice banked).", banked),
                );
                Ok(())
            }
            Command::CopyWeapon { target } => {
                let (actor_i, target_i) = self.pair_indices(actor, &target)?;
                let outcome = {
                    let (copier, source) = pair_mut(&mut self.characters, actor_i, target_i);
                    copy_weapon(copier, source)?
                };
                let copier_name = self.characters[actor_i].name.clone();
                let target_name = self.characters[target_i].name.clone();
                sink.send(&copier_name, &outcome.logs[0]);
                sink.send(&target_name, &outcome.logs[1]);
                Ok(())
            }
            Command::ActivateMode { name } => {
                let actor_i = self.index_required(actor)?;
                let announcement = self.characters[actor_i].activate_armor_mode(&name)?;
                let who = self.characters[actor_i].name.clone();
                sink.send(&who, &announcement);
                Ok(())
            }
            Command::Revert => {
                let actor_i = self.index_required(actor)?;
                self.characters[actor_i].revert_to_base();
                let who = self.characters[actor_i].name.clone();
                sink.send(&who, "You power down to your base form.");
                Ok(())
            }
            Command::SceneJoin => {
                let actor_i = self.index_required(actor)?;
                let who = self.characters[actor_i].name.clone();
                self.scene.join(&who)?;
                sink.send(
                    &who,
                    &format!("You join the scene (round {}).", self.scene.round()),
                );
                Ok(())
            }
            Command::SceneLeave => {
                let actor_i = self.index_required(actor)?;
                let who = self.characters[actor_i].name.clone();
                self.scene.leave(&who)?;
                sink.send(&who, "You leave the scene.");
                Ok(())
            }
            Command::Pose => {
                let actor_i = self.index_required(actor)?;
                let who = self.characters[actor_i].name.clone();
                let completed_round = self.scene.mark_posed(&who)?;
                sink.send(&who, "Pose recorded.");
                if completed_round {
                    // Everyone posed: tell the whole scene the round rolled over.
                    let announcement = format!("Round {} begins.", self.scene.round());
                    for participant in self.scene.order() {
                        sink.send(participant, &announcement);
                    }
                } else if let Some(next) = self.scene.next_up() {
                    sink.send(&who, &format!("Next to pose: {}.", next));
                }
                Ok(())
            }
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.characters
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn index_required(&self, name: &str) -> Result<usize, CommandError> {
        self.index_of(name)
            .ok_or_else(|| CommandError::UnknownCharacter(name.to_string()))
    }

    fn pair_indices(&self, actor: &str, target: &str) -> Result<(usize, usize), CommandError> {
        let actor_i = self.index_required(actor)?;
        let target_i = self.index_required(target)?;
        if actor_i == target_i {
            return Err(CommandError::SelfTarget);
        }
        Ok((actor_i, target_i))
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Split-borrow an actor mutably and a second character immutably.
fn pair_mut(characters: &mut [Character], i: usize, j: usize) -> (&mut Character, &Character) {
    assert_ne!(i, j);
    if i < j {
        let (lo, hi) = characters.split_at_mut(j);
        (&mut lo[i], &hi[0])
    } else {
        let (lo, hi) = characters.split_at_mut(i);
        (&mut hi[0], &lo[j])
    }
}
