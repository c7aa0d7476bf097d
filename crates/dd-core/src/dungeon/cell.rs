//! Map cell types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cell/terrain type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum CellKind {
    #[default]
    Wall = 0,
    Floor = 1,
    Entrance = 2,
    Exit = 3,
}

impl CellKind {
    /// Check if the player can occupy this cell
    pub const fn is_passable(&self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Map symbol used by level literals and the map screen
    pub const fn symbol(&self) -> char {
        match self {
            CellKind::Wall => 'W',
            CellKind::Floor => '.',
            CellKind::Entrance => 'E',
            CellKind::Exit => 'X',
        }
    }

    pub const fn from_symbol(c: char) -> Option<CellKind> {
        match c {
            'W' => Some(CellKind::Wall),
            '.' | ' ' => Some(CellKind::Floor),
            'E' => Some(CellKind::Entrance),
            'X' => Some(CellKind::Exit),
            _ => None,
        }
    }
}
