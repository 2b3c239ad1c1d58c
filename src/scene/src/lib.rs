// src/scene/src/lib.rs

//! Pose order tracking for roleplay scenes.
//!
//! A scene is an ordered list of participants and a per-round "has posed"
//! flag for each. When the last participant poses, the round advances and
//! the flags reset. Scenes are ephemeral; nothing here persists.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("{0} is already in the scene")]
    AlreadyInScene(String),
    #[error("{0} is not in the scene")]
    NotInScene(String),
    #[error("{0} has already posed this round")]
    AlreadyPosed(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
struct PoseEntry {
    name: String,
    posed: bool,
}

/// Tracks whose turn it is to pose within a scene.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct PoseTracker {
    entries: Vec<PoseEntry>,
    round: u32,
}

impl PoseTracker {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            round: 1,
        }
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join the scene at the end of the pose order.
    pub fn join(&mut self, name: &str) -> Result<(), SceneError> {
        if self.position(name).is_some() {
            return Err(SceneError::AlreadyInScene(name.to_string()));
        }
        self.entries.push(PoseEntry {
            name: name.to_string(),
            posed: false,
        });
        Ok(())
    }

    /// Leave the scene. If everyone remaining has already posed, the round
    /// advances.
    pub fn leave(&mut self, name: &str) -> Result<(), SceneError> {
        let index = self
            .position(name)
            .ok_or_else(|| SceneError::NotInScene(name.to_string()))?;
        self.entries.remove(index);
        self.maybe_advance_round();
        Ok(())
    }

    /// Record a pose. Returns true when this pose completed the round.
    pub fn mark_posed(&mut self, name: &str) -> Result<bool, SceneError> {
        let index = self
            .position(name)
            .ok_or_else(|| SceneError::NotInScene(name.to_string()))?;
        if self.entries[index].posed {
            return Err(SceneError::AlreadyPosed(name.to_string()));
        }
        self.entries[index].posed = true;
        Ok(self.maybe_advance_round())
    }

    /// First participant who has not yet posed this round.
    pub fn next_up(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| !e.posed)
            .map(|e| e.name.as_str())
    }

    /// Participant names in pose order.
    pub fn order(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }

    fn maybe_advance_round(&mut self) -> bool {
        if self.entries.is_empty() || self.entries.iter().any(|e| !e.posed) {
            return false;
        }
        for entry in &mut self.entries {
            entry.posed = false;
        }
        self.round += 1;
        true
    }
}
