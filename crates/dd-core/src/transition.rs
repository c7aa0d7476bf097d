//! Level-to-level transitions.

use crate::dungeon::{CellKind, GridLevel, LevelNumber};
use crate::error::GameError;
use crate::position::Position;

/// Outcome of stepping past an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Move on to this level
    Next(LevelNumber),
    /// That was the final exit; the game is won
    Complete,
}

/// Is the player standing on the level's exit cell?
pub fn is_on_exit(level: &GridLevel, pos: Position) -> Result<bool, GameError> {
    Ok(level.cell(pos)? == CellKind::Exit)
}

/// Linear successor over the level sequence.
pub fn advance(current: LevelNumber) -> Advance {
    match current.next() {
        Some(next) => Advance::Next(next),
        None => Advance::Complete,
    }
}
