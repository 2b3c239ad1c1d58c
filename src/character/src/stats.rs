// src/character/src/stats.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The seven ability scores.
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
pub enum Stat {
    Power,
    Dexterity,
    Tenacity,
    Cunning,
    Education,
    Charisma,
    Aura,
}

/// The twelve skill scores.
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
pub enum Skill {
    Discern,
    Aim,
    Athletics,
    Force,
    Mechanics,
    Medicine,
    Computer,
    Stealth,
    Heist,
    Convince,
    Presence,
    Arcana,
}

/// One named field per ability score, so sheet code never goes through a
/// string-keyed attribute bag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct StatBlock {
    pub power: u32,
    pub dexterity: u32,
    pub tenacity: u32,
    pub cunning: u32,
    pub education: u32,
    pub charisma: u32,
    pub aura: u32,
}

impl StatBlock {
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Power => self.power,
            Stat::Dexterity => self.dexterity,
            Stat::Tenacity => self.tenacity,
            Stat::Cunning => self.cunning,
            Stat::Education => self.education,
            Stat::Charisma => self.charisma,
            Stat::Aura => self.aura,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Power => self.power = value,
            Stat::Dexterity => self.dexterity = value,
            Stat::Tenacity => self.tenacity = value,
            Stat::Cunning => self.cunning = value,
            Stat::Education => self.education = value,
            Stat::Charisma => self.charisma = value,
            Stat::Aura => self.aura = value,
        }
    }
}

/// One named field per skill score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct SkillBlock {
    pub discern: u32,
    pub aim: u32,
    pub athletics: u32,
    pub force: u32,
    pub mechanics: u32,
    pub medicine: u32,
    pub computer: u32,
    pub stealth: u32,
    pub heist: u32,
    pub convince: u32,
    pub presence: u32,
    pub arcana: u32,
}

impl SkillBlock {
    pub fn get(&self, skill: Skill) -> u32 {
        match skill {
            Skill::Discern => self.discern,
            Skill::Aim => self.aim,
            Skill::Athletics => self.athletics,
            Skill::Force => self.force,
            Skill::Mechanics => self.mechanics,
            Skill::Medicine => self.medicine,
            Skill::Computer => self.computer,
            Skill::Stealth => self.stealth,
            Skill::Heist => self.heist,
            Skill::Convince => self.convince,
            Skill::Presence => self.presence,
            Skill::Arcana => self.arcana,
        }
    }

    pub fn set(&mut self, skill: Skill, value: u32) {
        match skill {
            Skill::Discern => self.discern = value,
            Skill::Aim => self.aim = value,
            Skill::Athletics => self.athletics = value,
            Skill::Force => self.force = value,
            Skill::Mechanics => self.mechanics = value,
            Skill::Medicine => self.medicine = value,
            Skill::Computer => self.computer = value,
            Skill::Stealth => self.stealth = value,
            Skill::Heist => self.heist = value,
            Skill::Convince => self.convince = value,
            Skill::Presence => self.presence = value,
            Skill::Arcana => self.arcana = value,
        }
    }
}

/// Narrative size grade.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SizeGrade {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
}

/// Narrative speed grade.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SpeedGrade {
    Crawling,
    Slow,
    #[default]
    Average,
    Fast,
    Supersonic,
}

/// Narrative strength grade.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StrengthGrade {
    Feeble,
    Below,
    #[default]
    Average,
    Superhuman,
    Titanic,
}

/// The size/speed/strength descriptor set shown on the sheet. Purely
/// narrative; nothing in combat reads these.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub struct Descriptors {
    pub size: SizeGrade,
    pub speed: SpeedGrade,
    pub strength: StrengthGrade,
}
