//! Player position and movement validation.
//!
//! Movement is two-phase: `propose` computes a candidate cell from a
//! direction, `commit` validates it against the grid and mutates only on
//! success. The grid itself is read-only throughout.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::dungeon::GridLevel;
use crate::error::GameError;

/// A coordinate on the active level's grid.
///
/// Displays as a room label in the original game's style: row letter plus
/// 1-based column, so `(1, 1)` is room `B2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Parse a room label like `B2` back into a coordinate.
    ///
    /// Labels past row `Z` are not produced by any shipped level, so a
    /// single letter is all that is accepted.
    pub fn from_label(label: &str) -> Option<Position> {
        let mut chars = label.trim().chars();
        let row_char = chars.next()?.to_ascii_uppercase();
        if !row_char.is_ascii_uppercase() {
            return None;
        }
        let col: usize = chars.as_str().parse().ok()?;
        if col == 0 {
            return None;
        }
        Some(Position {
            row: (row_char as u8 - b'A') as usize,
            col: col - 1,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row = (b'A' + (self.row % 26) as u8) as char;
        write!(f, "{}{}", row, self.col + 1)
    }
}

/// The four orthogonal movement directions. No diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta; `Up` decreases the row.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A proposed target cell, not yet validated. May be off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub row: isize,
    pub col: isize,
}

/// The player's tracked position on the active level.
///
/// Invariant: always an in-bounds, non-Wall cell. A fresh instance is
/// created at the entrance whenever a level becomes active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionState {
    pos: Position,
}

impl PositionState {
    /// Place the player at the level's entrance.
    pub fn at_entrance(level: &GridLevel) -> Result<Self, GameError> {
        Ok(Self {
            pos: level.find_entrance()?,
        })
    }

    /// Place the player at a specific cell, validating it first.
    pub fn at(level: &GridLevel, pos: Position) -> Result<Self, GameError> {
        let mut state = Self { pos };
        state.commit(
            level,
            Candidate {
                row: pos.row as isize,
                col: pos.col as isize,
            },
        )?;
        Ok(state)
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Compute the candidate cell one step in `direction`.
    pub fn propose(&self, direction: Direction) -> Candidate {
        let (dr, dc) = direction.delta();
        Candidate {
            row: self.pos.row as isize + dr,
            col: self.pos.col as isize + dc,
        }
    }

    /// Validate a candidate against the grid and move there.
    ///
    /// Rejects out-of-bounds and Wall targets with `InvalidPosition`,
    /// leaving the tracked position untouched.
    pub fn commit(&mut self, level: &GridLevel, candidate: Candidate) -> Result<(), GameError> {
        if !level.in_bounds(candidate.row, candidate.col) {
            return Err(GameError::InvalidPosition {
                reason: "you cannot move outside the map".to_string(),
            });
        }
        let target = Position {
            row: candidate.row as usize,
            col: candidate.col as usize,
        };
        if !level.cell(target)?.is_passable() {
            return Err(GameError::InvalidPosition {
                reason: "you cannot move through a wall".to_string(),
            });
        }
        self.pos = target;
        Ok(())
    }
}
