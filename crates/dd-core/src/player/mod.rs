//! Player state: identity, vitality, and held items.

pub mod inventory;
pub mod power;

pub use inventory::{InventoryState, Item};
pub use power::PowerPoints;

use serde::{Deserialize, Serialize};

/// The player character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub power: PowerPoints,
    pub inventory: InventoryState,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_alive(&self) -> bool {
        self.power.is_alive()
    }
}
