//! Encounters: placement, dispatch, and resolution.
//!
//! Four scripted encounter kinds are placed at distinct random cells every
//! time a level becomes active. Dispatch tests the player's position after
//! each move; most kinds fire once per activation, the Guardian keeps
//! re-firing until beaten.

pub mod assignment;
pub mod content;
pub mod dispatch;

pub use assignment::{EncounterRecord, Placement};
pub use dispatch::{EncounterOption, Selection};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::dungeon::LevelNumber;

/// The encounter kinds, in their fixed placement order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum EncounterKind {
    Trap,
    MadScientist,
    LostExplorer,
    Guardian,
}

impl EncounterKind {
    /// Which levels this kind is placed on.
    pub fn applies_to(self, level: LevelNumber) -> bool {
        match self {
            EncounterKind::Trap | EncounterKind::MadScientist => true,
            EncounterKind::LostExplorer => level.get() == 2,
            EncounterKind::Guardian => level.get() == 3,
        }
    }

    /// Banner title for the encounter screen.
    pub fn title(self) -> &'static str {
        match self {
            EncounterKind::Trap => "Trap Encounter",
            EncounterKind::MadScientist => "Mad Scientist Encounter",
            EncounterKind::LostExplorer => "Lost Explorer Encounter",
            EncounterKind::Guardian => "The Guardian Encounter",
        }
    }
}
