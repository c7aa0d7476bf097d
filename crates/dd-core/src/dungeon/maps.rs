//! The fixed level table.
//!
//! Three hand-authored 5x5 levels. Layouts are static content; if one of
//! them fails to parse or lacks an entrance/exit the session aborts at
//! startup with a configuration error.

use serde::{Deserialize, Serialize};

use crate::dungeon::GridLevel;
use crate::error::GameError;

/// Number of levels in the dungeon
pub const LEVEL_COUNT: u32 = 3;

const LEVEL_1: [&str; 5] = [
    "WWWWW", //
    "W...W",
    "W.W.W",
    "W.WXW",
    "WEWWW",
];

const LEVEL_2: [&str; 5] = [
    "WWWWW", //
    "WE..W",
    "W.W.W",
    "W...X",
    "WW..W",
];

const LEVEL_3: [&str; 5] = [
    "WW..X", //
    "W..W.",
    "W....",
    "W.EWW",
    "WWWWW",
];

/// 1-based level number, validated against the level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelNumber(u32);

impl LevelNumber {
    pub const FIRST: LevelNumber = LevelNumber(1);

    pub fn new(n: u32) -> Result<Self, GameError> {
        if (1..=LEVEL_COUNT).contains(&n) {
            Ok(LevelNumber(n))
        } else {
            Err(GameError::config(format!(
                "invalid level number {n}, levels range from 1 to {LEVEL_COUNT}"
            )))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The following level, or `None` past the final one.
    pub fn next(self) -> Option<LevelNumber> {
        if self.0 < LEVEL_COUNT {
            Some(LevelNumber(self.0 + 1))
        } else {
            None
        }
    }

    pub fn is_final(self) -> bool {
        self.0 == LEVEL_COUNT
    }
}

impl std::fmt::Display for LevelNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build the layout for a level.
pub fn level(number: LevelNumber) -> Result<GridLevel, GameError> {
    let rows: &[&str] = match number.get() {
        1 => &LEVEL_1,
        2 => &LEVEL_2,
        _ => &LEVEL_3,
    };
    GridLevel::from_rows(rows)
}
