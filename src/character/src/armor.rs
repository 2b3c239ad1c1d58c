// src/character/src/armor.rs
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::core::Loadout;

/// Narrative flavor of an armor-mode swap. Purely cosmetic: the style only
/// selects which activation announcement is shown.
///
/// Styles are numbered 1-9 on the sheet; 9 and any unrecognized code fall
/// back to the generic `Armor` style.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Encode,
    Decode,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SwapStyle {
    Mode,
    Stance,
    Focus,
    Form,
    Vr,
    Summon,
    Minion,
    System,
    #[default]
    Armor,
}

impl SwapStyle {
    /// Map a sheet code to a style. Unrecognized codes get the generic style.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => SwapStyle::Mode,
            2 => SwapStyle::Stance,
            3 => SwapStyle::Focus,
            4 => SwapStyle::Form,
            5 => SwapStyle::Vr,
            6 => SwapStyle::Summon,
            7 => SwapStyle::Minion,
            8 => SwapStyle::System,
            _ => SwapStyle::Armor,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            SwapStyle::Mode => 1,
            SwapStyle::Stance => 2,
            SwapStyle::Focus => 3,
            SwapStyle::Form => 4,
            SwapStyle::Vr => 5,
            SwapStyle::Summon => 6,
            SwapStyle::Minion => 7,
            SwapStyle::System => 8,
            SwapStyle::Armor => 9,
        }
    }
}

/// A named point-in-time snapshot of a character's full combat loadout.
///
/// Activation copies the snapshot onto the character's working set; the
/// snapshot itself is never mutated afterward, so a mode can be swapped back
/// to at any time and restore exactly the stored values.
#[derive(Clone, Debug, PartialEq, Encode, Decode, Serialize, Deserialize)]
pub struct ArmorMode {
    pub name: String,
    pub style: SwapStyle,
    pub snapshot: Loadout,
}

impl ArmorMode {
    pub fn new(name: impl Into<String>, style: SwapStyle, snapshot: Loadout) -> Self {
        Self {
            name: name.into(),
            style,
            snapshot,
        }
    }

    /// The style-keyed activation announcement, shown to the room.
    pub fn announcement(&self, who: &str) -> String {
        match self.style {
            SwapStyle::Mode => format!("{} engages {}!", who, self.name),
            SwapStyle::Stance => format!("{} settles into the {} stance.", who, self.name),
            SwapStyle::Focus => format!("{} centers themselves, channeling {}.", who, self.name),
            SwapStyle::Form => format!("{}'s body shimmers and reshapes into {}!", who, self.name),
            SwapStyle::Vr => format!("{} jacks in and loads {}.", who, self.name),
            SwapStyle::Summon => format!("{} calls {} to their side!", who, self.name),
            SwapStyle::Minion => {
                format!("{} signals, and {} falls into formation around them.", who, self.name)
            }
            SwapStyle::System => format!("{} boots combat system {}.", who, self.name),
            SwapStyle::Armor => format!("{} activates their armor.", who),
        }
    }
}
